//! Gestational age, trimester and maternal age on naive calendar dates.
//!
//! Dates never carry a time of day or a timezone: `2024-03-10` is parsed as
//! that calendar day, so day counts cannot shift by one across UTC offsets.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::GuidanceError;
use crate::models::enums::Trimester;

/// Remainder days at or above this round the week up.
const ROUND_UP_DAYS: u32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationalAge {
    pub weeks: u32,
    pub day_remainder: u32,
    pub rounded_weeks: u32,
    pub total_days: u32,
}

/// Parse `YYYY-MM-DD` as a local calendar date.
pub fn parse_local_date(text: &str) -> Result<NaiveDate, GuidanceError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| GuidanceError::InvalidDate(text.to_string()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `earlier` to `later`; negative when inverted.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

pub fn round_week(weeks: u32, day_remainder: u32) -> u32 {
    if day_remainder >= ROUND_UP_DAYS {
        weeks + 1
    } else {
        weeks
    }
}

/// Gestational age at `reference` for a last menstrual period. A reference
/// before the period yields all zeros, meaning "unknown".
pub fn compute_gestational_age(last_menstrual: NaiveDate, reference: NaiveDate) -> GestationalAge {
    let total = days_between(last_menstrual, reference);
    let Ok(total_days) = u32::try_from(total) else {
        tracing::warn!(
            %last_menstrual,
            %reference,
            "Reference date precedes last menstrual period, gestational age unknown"
        );
        return GestationalAge::default();
    };
    let weeks = total_days / 7;
    let day_remainder = total_days % 7;
    GestationalAge {
        weeks,
        day_remainder,
        rounded_weeks: round_week(weeks, day_remainder),
        total_days,
    }
}

/// Trimester for a gestational week; `None` before week 1.
pub fn trimester_for_week(week: u32) -> Option<Trimester> {
    match week {
        0 => None,
        1..=13 => Some(Trimester::First),
        14..=27 => Some(Trimester::Second),
        _ => Some(Trimester::Third),
    }
}

/// Completed years of age at `reference`.
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> Option<u32> {
    if birth > reference {
        return None;
    }
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
