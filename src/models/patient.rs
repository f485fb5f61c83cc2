use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::enums::{BmiCategory, Trimester};

/// Caller-supplied measurements for one evaluation. Every field is optional;
/// missing values propagate as `None` through the calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientMeasurements {
    pub pre_gestational_weight_kg: Option<f64>,
    /// Meters, or centimeters when the value is above 3.
    pub height: Option<f64>,
    pub current_weight_kg: Option<f64>,
    /// Zero, negative or fractional weeks are read as unknown.
    #[serde(deserialize_with = "deserialize_lenient_week")]
    pub gestational_week: Option<u32>,
    pub last_menstrual_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
}

/// Accepts a whole positive number (or its string form). Anything else
/// becomes `None` instead of failing the whole request.
fn deserialize_lenient_week<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(week_from_value))
}

fn week_from_value(value: &Value) -> Option<u32> {
    let week = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f > 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .filter(|w| *w > 0)
    .and_then(|w| u32::try_from(w).ok());
    if week.is_none() {
        tracing::warn!(value = %value, "Invalid gestational week, treating as unknown");
    }
    week
}

/// Aggregate numeric summary of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedData {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub cumulative_gain: Option<f64>,
    pub gestational_week: Option<u32>,
    pub trimester: Option<Trimester>,
    /// Same value as `critical_point_count`; no weighting is applied.
    pub risk_score: usize,
    pub critical_point_count: usize,
}
