use serde::{Deserialize, Serialize};

use crate::helpers::round_half_up;
use crate::models::enums::BmiCategory;

use super::reference::landmarks_for;

/// Expected cumulative gain {min, max} in kilograms for one week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedGainRange {
    pub min: f64,
    pub max: f64,
}

/// Piecewise-linear interpolation between the two landmark weeks that
/// bracket `week`, rounded to one decimal. Week 0 yields zero and weeks past
/// 40 clamp to the week-40 landmark.
pub fn expected_gain(category: BmiCategory, week: u32) -> ExpectedGainRange {
    if week < 1 {
        return ExpectedGainRange::default();
    }
    let landmarks = landmarks_for(category);
    let last = landmarks[landmarks.len() - 1];
    if week > last.week {
        return ExpectedGainRange {
            min: last.min,
            max: last.max,
        };
    }

    let Some(segment) = landmarks
        .windows(2)
        .find(|pair| week <= pair[1].week)
    else {
        return ExpectedGainRange {
            min: last.min,
            max: last.max,
        };
    };
    let (start, end) = (segment[0], segment[1]);
    let ratio = f64::from(week - start.week) / f64::from(end.week - start.week);

    ExpectedGainRange {
        min: round_half_up(start.min + (end.min - start.min) * ratio, 1),
        max: round_half_up(start.max + (end.max - start.max) * ratio, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn week_zero_is_zero() {
        for category in BmiCategory::ALL {
            assert_eq!(expected_gain(category, 0), ExpectedGainRange::default());
        }
    }

    #[test]
    fn landmark_weeks_reproduce_landmarks() {
        let r = expected_gain(BmiCategory::Normal, 13);
        assert!(approx(r.min, -1.8) && approx(r.max, 0.7));
        let r = expected_gain(BmiCategory::Obese, 27);
        assert!(approx(r.min, 1.1) && approx(r.max, 2.7));
        let r = expected_gain(BmiCategory::Underweight, 40);
        assert!(approx(r.min, 9.7) && approx(r.max, 12.2));
    }

    #[test]
    fn interpolates_inside_segment() {
        // Normal, week 17: -1.8 + 4.9 * 4/14 = -0.4 ; 0.7 + 5.6 * 4/14 = 2.3
        let r = expected_gain(BmiCategory::Normal, 17);
        assert!(approx(r.min, -0.4), "min {}", r.min);
        assert!(approx(r.max, 2.3), "max {}", r.max);

        // Underweight, week 30: 5.6 + 4.1 * 3/13 = 6.546 → 6.5
        let r = expected_gain(BmiCategory::Underweight, 30);
        assert!(approx(r.min, 6.5));
        // 7.2 + 5.0 * 3/13 = 8.353 → 8.4
        assert!(approx(r.max, 8.4));
    }

    #[test]
    fn clamps_after_forty_weeks() {
        let r = expected_gain(BmiCategory::Overweight, 42);
        assert!(approx(r.min, 7.0) && approx(r.max, 9.0));
    }

    #[test]
    fn max_is_monotonic_for_every_week() {
        for category in BmiCategory::ALL {
            let mut previous = expected_gain(category, 0).max;
            for week in 1..=45 {
                let current = expected_gain(category, week).max;
                assert!(current + 1e-9 >= previous, "{category} week {week}");
                previous = current;
            }
        }
    }

    #[test]
    fn min_is_monotonic_from_week_thirteen() {
        for category in BmiCategory::ALL {
            let mut previous = expected_gain(category, 13).min;
            for week in 14..=45 {
                let current = expected_gain(category, week).min;
                assert!(current + 1e-9 >= previous, "{category} week {week}");
                previous = current;
            }
        }
    }

    #[test]
    fn underweight_min_is_monotonic_everywhere() {
        let mut previous = expected_gain(BmiCategory::Underweight, 0).min;
        for week in 1..=40 {
            let current = expected_gain(BmiCategory::Underweight, week).min;
            assert!(current + 1e-9 >= previous, "week {week}");
            previous = current;
        }
    }

    #[test]
    fn tolerated_loss_dips_min_in_first_trimester() {
        assert!(expected_gain(BmiCategory::Normal, 7).min < 0.0);
        assert!(expected_gain(BmiCategory::Obese, 10).min < 0.0);
    }
}
