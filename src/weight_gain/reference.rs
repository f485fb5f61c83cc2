use serde::Serialize;

use crate::models::enums::BmiCategory;

/// Cumulative-gain window in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GainBand {
    pub min: f64,
    pub max: f64,
}

/// Trimester 1 band plus the largest tolerated loss (a negative number, or
/// zero when no loss is tolerated).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FirstTrimesterBand {
    pub min: f64,
    pub max: f64,
    pub loss_limit: f64,
}

/// FIGO weight-gain targets for one pre-pregnancy category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryLimits {
    pub trim1: FirstTrimesterBand,
    pub trim2: GainBand,
    pub trim3: GainBand,
    pub total_min: f64,
    pub total_max: f64,
    pub weekly_rate_grams: u32,
}

/// Expected cumulative gain at one landmark week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landmark {
    pub week: u32,
    pub min: f64,
    pub max: f64,
}

pub const LANDMARK_WEEKS: [u32; 4] = [0, 13, 27, 40];

static UNDERWEIGHT: CategoryLimits = CategoryLimits {
    trim1: FirstTrimesterBand { min: 0.2, max: 1.2, loss_limit: 0.0 },
    trim2: GainBand { min: 5.6, max: 7.2 },
    trim3: GainBand { min: 9.7, max: 12.2 },
    total_min: 9.7,
    total_max: 12.2,
    weekly_rate_grams: 242,
};

static NORMAL: CategoryLimits = CategoryLimits {
    trim1: FirstTrimesterBand { min: 0.2, max: 1.2, loss_limit: -1.8 },
    trim2: GainBand { min: 3.1, max: 6.3 },
    trim3: GainBand { min: 8.0, max: 12.0 },
    total_min: 8.0,
    total_max: 12.0,
    weekly_rate_grams: 200,
};

static OVERWEIGHT: CategoryLimits = CategoryLimits {
    trim1: FirstTrimesterBand { min: -1.6, max: 0.0, loss_limit: -1.6 },
    trim2: GainBand { min: 2.3, max: 3.7 },
    trim3: GainBand { min: 7.0, max: 9.0 },
    total_min: 7.0,
    total_max: 9.0,
    weekly_rate_grams: 175,
};

static OBESE: CategoryLimits = CategoryLimits {
    trim1: FirstTrimesterBand { min: -1.6, max: 0.0, loss_limit: -1.6 },
    trim2: GainBand { min: 2.7, max: 4.2 },
    trim3: GainBand { min: 5.0, max: 7.2 },
    total_min: 5.0,
    total_max: 7.2,
    weekly_rate_grams: 125,
};

const fn landmark(week: u32, min: f64, max: f64) -> Landmark {
    Landmark { week, min, max }
}

static UNDERWEIGHT_LANDMARKS: [Landmark; 4] = [
    landmark(0, 0.0, 0.0),
    landmark(13, 0.2, 1.2),
    landmark(27, 5.6, 7.2),
    landmark(40, 9.7, 12.2),
];

static NORMAL_LANDMARKS: [Landmark; 4] = [
    landmark(0, 0.0, 0.0),
    landmark(13, -1.8, 0.7),
    landmark(27, 3.1, 6.3),
    landmark(40, 8.0, 12.0),
];

static OVERWEIGHT_LANDMARKS: [Landmark; 4] = [
    landmark(0, 0.0, 0.0),
    landmark(13, -1.6, 0.0),
    landmark(27, 2.3, 3.7),
    landmark(40, 7.0, 9.0),
];

static OBESE_LANDMARKS: [Landmark; 4] = [
    landmark(0, 0.0, 0.0),
    landmark(13, -1.6, 0.0),
    landmark(27, 1.1, 2.7),
    landmark(40, 5.0, 7.2),
];

/// Reference targets for a category. Read-only for the process lifetime.
pub fn limits_for(category: BmiCategory) -> &'static CategoryLimits {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT,
        BmiCategory::Normal => &NORMAL,
        BmiCategory::Overweight => &OVERWEIGHT,
        BmiCategory::Obese => &OBESE,
    }
}

/// Interpolation landmarks at weeks 0, 13, 27 and 40.
pub fn landmarks_for(category: BmiCategory) -> &'static [Landmark; 4] {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT_LANDMARKS,
        BmiCategory::Normal => &NORMAL_LANDMARKS,
        BmiCategory::Overweight => &OVERWEIGHT_LANDMARKS,
        BmiCategory::Obese => &OBESE_LANDMARKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_max_equals_third_trimester_max() {
        for category in BmiCategory::ALL {
            let limits = limits_for(category);
            assert_eq!(limits.total_max, limits.trim3.max, "{category}");
            assert_eq!(limits.total_min, limits.trim3.min, "{category}");
        }
    }

    #[test]
    fn loss_limits() {
        assert_eq!(limits_for(BmiCategory::Underweight).trim1.loss_limit, 0.0);
        assert_eq!(limits_for(BmiCategory::Normal).trim1.loss_limit, -1.8);
        assert_eq!(limits_for(BmiCategory::Overweight).trim1.loss_limit, -1.6);
        assert_eq!(limits_for(BmiCategory::Obese).trim1.loss_limit, -1.6);
    }

    #[test]
    fn weekly_rates() {
        let rates: Vec<u32> = BmiCategory::ALL
            .iter()
            .map(|c| limits_for(*c).weekly_rate_grams)
            .collect();
        assert_eq!(rates, vec![242, 200, 175, 125]);
    }

    #[test]
    fn landmarks_cover_fixed_weeks() {
        for category in BmiCategory::ALL {
            let weeks: Vec<u32> = landmarks_for(category).iter().map(|l| l.week).collect();
            assert_eq!(weeks, LANDMARK_WEEKS.to_vec());
            let last = landmarks_for(category)[3];
            assert_eq!(last.max, limits_for(category).total_max);
        }
    }
}
