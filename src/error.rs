use thiserror::Error;

/// Errors raised at the engine's boundaries.
///
/// The rule functions themselves are total: missing numeric input yields
/// `None`, unknown templates yield a marked fallback string. Only parsing,
/// configuration and startup validation can fail.
#[derive(Error, Debug)]
pub enum GuidanceError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Config read failed ({0}): {1}")]
    ConfigRead(String, String),

    #[error("Config parse failed ({0}): {1}")]
    ConfigParse(String, String),

    #[error("Input read failed ({0}): {1}")]
    InputRead(String, String),

    #[error("Missing {status} template for {category} in trimester {trimester}")]
    MissingTemplate {
        category: String,
        trimester: u8,
        status: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GuidanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
