use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GuidanceError;
use crate::models::enums::Locale;

/// Application-level constants
pub const APP_NAME: &str = "prenatal-guidance";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the output locale.
pub const LOCALE_ENV: &str = "PRENATAL_GUIDANCE_LOCALE";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "prenatal_guidance=info"
}

/// Per-user configuration directory, when the platform has one.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Engine settings. Everything here is presentation; the rule tables are
/// compiled in and never configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub locale: Locale,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_filter: default_log_filter().to_string(),
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, GuidanceError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GuidanceError::ConfigRead(display.clone(), e.to_string()))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| GuidanceError::ConfigParse(display, e.to_string()))?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "Loaded engine config");
        Ok(config)
    }

    /// Load the per-user config file if present, otherwise defaults.
    pub fn load_default() -> Result<Self, GuidanceError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Defaults overlaid with PRENATAL_GUIDANCE_LOCALE and RUST_LOG.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(LOCALE_ENV).ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        )
    }

    fn with_overrides(mut self, locale: Option<&str>, log_filter: Option<&str>) -> Self {
        if let Some(raw) = locale {
            match raw.parse::<Locale>() {
                Ok(parsed) => self.locale = parsed,
                Err(e) => tracing::warn!(value = raw, error = %e, "Ignoring invalid locale override"),
            }
        }
        if let Some(filter) = log_filter.filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter.to_string();
        }
        self
    }
}
