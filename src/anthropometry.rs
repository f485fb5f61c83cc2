//! Pre-pregnancy BMI classification and cumulative gain.

use serde::{Deserialize, Serialize};

use crate::helpers::{positive, round_half_up};
use crate::models::enums::BmiCategory;

/// Heights above this are taken to be centimeters.
const CENTIMETER_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiClassification {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// BMI rounded to two decimals. `None` when weight or height is missing,
/// zero or negative.
pub fn compute_bmi(weight_kg: Option<f64>, height: Option<f64>) -> Option<f64> {
    let weight = positive(weight_kg)?;
    let mut height_m = positive(height)?;
    if height_m > CENTIMETER_THRESHOLD {
        height_m /= 100.0;
    }
    Some(round_half_up(weight / (height_m * height_m), 2))
}

pub fn category_for_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn classify_bmi(weight_kg: Option<f64>, height: Option<f64>) -> Option<BmiClassification> {
    let bmi = compute_bmi(weight_kg, height)?;
    let category = category_for_bmi(bmi);
    tracing::debug!(bmi, category = category.as_str(), "BMI classified");
    Some(BmiClassification { bmi, category })
}

/// Current minus pre-pregnancy weight, two decimals.
pub fn cumulative_gain(current_kg: Option<f64>, pre_gestational_kg: Option<f64>) -> Option<f64> {
    let current = positive(current_kg)?;
    let pre = positive(pre_gestational_kg)?;
    Some(round_half_up(current - pre, 2))
}
