//! Weight-gain assessment against the FIGO reference ranges.
//!
//! `reference` holds the fixed per-category targets, `interpolation` turns
//! the landmark weeks into an expected range for any week, `status` runs the
//! per-trimester decision procedure and `render` fills in the narrative
//! template for the resulting status. The pieces stay independent: the
//! renderer never re-derives the status and the classifier never formats text.

pub mod interpolation;
pub mod reference;
pub mod render;
pub mod status;
pub mod templates;

use serde::Serialize;

use crate::gestation::trimester_for_week;
use crate::models::enums::{BmiCategory, Locale, Trimester, WeightGainStatus};

pub use interpolation::{expected_gain, ExpectedGainRange};
pub use reference::{limits_for, CategoryLimits};
pub use render::{remaining_targets, render_message, RemainingTargets};
pub use status::classify_status;
pub use templates::TemplateTable;

/// Everything derived from (category, week, gain) in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightGainAssessment {
    pub trimester: Trimester,
    pub expected_range: ExpectedGainRange,
    pub status: WeightGainStatus,
    pub remaining: RemainingTargets,
    pub narrative: String,
}

/// Returns `None` for week 0, where no trimester applies.
pub fn assess(
    table: &TemplateTable,
    category: BmiCategory,
    week: u32,
    gain: f64,
    locale: Locale,
) -> Option<WeightGainAssessment> {
    let trimester = trimester_for_week(week)?;
    let status = classify_status(category, trimester, gain, week);
    let narrative = render::render_with(table, category, trimester, status, week, gain, locale);
    Some(WeightGainAssessment {
        trimester,
        expected_range: expected_gain(category, week),
        status,
        remaining: remaining_targets(limits_for(category), gain),
        narrative,
    })
}
