//! Prenatal weight-gain guidance rules engine.
//!
//! Pure, deterministic rules: pre-pregnancy BMI classification, FIGO
//! cumulative-gain targets per gestational week, status classification with
//! Portuguese clinical narratives, and questionnaire advisories partitioned
//! by audience. [`engine::DefaultGuidanceEngine`] ties them together.

pub mod anthropometry;
pub mod config;
pub mod engine;
pub mod error;
pub mod gestation;
pub mod helpers;
pub mod models;
pub mod questionnaire;
pub mod summary;
pub mod weight_gain;

pub use engine::{DefaultGuidanceEngine, EvaluationReport, EvaluationRequest, GuidanceEngine};
pub use error::GuidanceError;

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. RUST_LOG wins over `filter`, which
/// wins over the crate default. A second call is a no-op.
pub fn init_tracing(filter: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(config::default_log_filter())));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
