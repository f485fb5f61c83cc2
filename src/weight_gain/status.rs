use crate::models::enums::{BmiCategory, Trimester, WeightGainStatus};

use super::reference::{limits_for, CategoryLimits};

/// Classify the cumulative gain for a category and trimester.
///
/// The total cap is checked first in every trimester. Underweight patients
/// must gain from zero; the other categories tolerate an initial loss down
/// to the trimester-1 loss limit, carried into trimester 2.
pub fn classify_status(
    category: BmiCategory,
    trimester: Trimester,
    gain: f64,
    week: u32,
) -> WeightGainStatus {
    let limits = limits_for(category);

    let status = if gain >= limits.total_max {
        WeightGainStatus::TotalMaxReached
    } else {
        match trimester {
            Trimester::First => first_trimester(category, limits, gain),
            Trimester::Second => second_trimester(category, limits, gain),
            Trimester::Third => third_trimester(limits, gain),
        }
    };

    tracing::debug!(
        category = category.as_str(),
        trimester = trimester.number(),
        week,
        gain,
        status = status.as_str(),
        "Weight-gain status classified"
    );
    status
}

fn first_trimester(category: BmiCategory, limits: &CategoryLimits, gain: f64) -> WeightGainStatus {
    let t1 = limits.trim1;
    let t2 = limits.trim2;
    match category {
        BmiCategory::Underweight => {
            if gain < 0.0 {
                WeightGainStatus::Loss
            } else if gain <= t1.max {
                WeightGainStatus::Adequate
            } else if gain >= t2.max {
                WeightGainStatus::MaxReachedNext
            } else if gain > t1.max {
                WeightGainStatus::MaxReached
            } else {
                WeightGainStatus::Below
            }
        }
        BmiCategory::Normal => {
            if gain < t1.loss_limit {
                WeightGainStatus::LossExcessive
            } else if gain < 0.0 {
                WeightGainStatus::LossAcceptable
            } else if gain <= t1.max {
                WeightGainStatus::Adequate
            } else if gain >= t2.max {
                WeightGainStatus::MaxReachedNext
            } else if gain > t1.max {
                WeightGainStatus::MaxReached
            } else {
                WeightGainStatus::Adequate
            }
        }
        // Any gain is above the recommendation: weight should be maintained.
        BmiCategory::Overweight | BmiCategory::Obese => {
            if gain < t1.loss_limit {
                WeightGainStatus::LossExcessive
            } else if gain <= 0.0 {
                WeightGainStatus::LossAcceptable
            } else if gain < t2.max {
                WeightGainStatus::Above
            } else if gain >= t2.max {
                WeightGainStatus::MaxReachedNext
            } else {
                WeightGainStatus::Adequate
            }
        }
    }
}

fn second_trimester(category: BmiCategory, limits: &CategoryLimits, gain: f64) -> WeightGainStatus {
    let t2 = limits.trim2;
    if gain < 0.0 {
        if !category.tolerates_initial_loss() {
            return WeightGainStatus::Loss;
        }
        return if gain < limits.trim1.loss_limit {
            WeightGainStatus::LossExcessive
        } else {
            WeightGainStatus::LossAcceptable
        };
    }
    if gain >= t2.max {
        WeightGainStatus::MaxReached
    } else if gain >= 0.0 {
        WeightGainStatus::Adequate
    } else {
        // Only reachable for a non-numeric gain.
        WeightGainStatus::Below
    }
}

fn third_trimester(limits: &CategoryLimits, gain: f64) -> WeightGainStatus {
    if gain < 0.0 {
        WeightGainStatus::Loss
    } else if gain < limits.trim2.min {
        WeightGainStatus::BelowSevere
    } else if gain < limits.trim3.min {
        WeightGainStatus::Below
    } else {
        WeightGainStatus::Adequate
    }
}
