use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::helpers::{format_kg, round_half_up};
use crate::models::enums::{BmiCategory, Locale, Trimester, WeightGainStatus};

use super::reference::{limits_for, CategoryLimits, GainBand};
use super::templates::TemplateTable;

/// Prefix of the text returned when no template matches.
pub const MISSING_TEMPLATE_PREFIX: &str = "Mensagem não encontrada para status:";

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-z0-9_]+)\}").unwrap());

/// Distance from the current gain to each trimester boundary.
/// `min` never goes below zero; `max` is signed so an overshoot shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemainingTargets {
    pub trim1: GainBand,
    pub trim2: GainBand,
    pub trim3: GainBand,
}

fn remaining_min(target: f64, gain: f64) -> f64 {
    round_half_up(target - gain, 1).max(0.0)
}

fn remaining_max(target: f64, gain: f64) -> f64 {
    round_half_up(target - gain, 1)
}

fn remaining_band(min: f64, max: f64, gain: f64) -> GainBand {
    GainBand {
        min: remaining_min(min, gain),
        max: remaining_max(max, gain),
    }
}

pub fn remaining_targets(limits: &CategoryLimits, gain: f64) -> RemainingTargets {
    RemainingTargets {
        trim1: remaining_band(limits.trim1.min, limits.trim1.max, gain),
        trim2: remaining_band(limits.trim2.min, limits.trim2.max, gain),
        trim3: remaining_band(limits.trim3.min, limits.trim3.max, gain),
    }
}

/// Render the narrative for a status using the built-in templates.
pub fn render_message(
    category: BmiCategory,
    trimester: Trimester,
    status: WeightGainStatus,
    week: u32,
    gain: f64,
    locale: Locale,
) -> String {
    render_with(TemplateTable::builtin(), category, trimester, status, week, gain, locale)
}

/// Render against an explicit table. A missing template yields a marked
/// fallback string naming the status instead of an error.
pub fn render_with(
    table: &TemplateTable,
    category: BmiCategory,
    trimester: Trimester,
    status: WeightGainStatus,
    week: u32,
    gain: f64,
    locale: Locale,
) -> String {
    let Some(template) = table.get(category, trimester, status) else {
        tracing::warn!(
            category = category.as_str(),
            trimester = trimester.number(),
            status = status.as_str(),
            "No narrative template for status"
        );
        return format!("{MISSING_TEMPLATE_PREFIX} {}", status.as_str());
    };

    let limits = limits_for(category);
    let remaining = remaining_targets(limits, gain);

    let text = RE_PLACEHOLDER.replace_all(template.body, |caps: &Captures| -> Cow<'static, str> {
        let kg = |v: f64| Cow::Owned(format_kg(v, locale));
        match &caps[1] {
            "semana" => Cow::Owned(week.to_string()),
            "ganho" => kg(gain),
            "meta_min_1tri" => kg(remaining.trim1.min),
            "meta_max_1tri" => kg(remaining.trim1.max),
            "meta_min_2tri" => kg(remaining.trim2.min),
            "meta_max_2tri" => kg(remaining.trim2.max),
            "meta_min_3tri" => kg(remaining.trim3.min),
            "meta_max_3tri" => kg(remaining.trim3.max),
            "total_max" => kg(limits.total_max),
            "taxa_semanal" => Cow::Owned(limits.weekly_rate_grams.to_string()),
            other => {
                tracing::warn!(template = template.id, placeholder = other, "Unknown placeholder");
                Cow::Owned(caps[0].to_string())
            }
        }
    });

    tracing::debug!(template = template.id, "Narrative rendered");
    text.into_owned()
}
