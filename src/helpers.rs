use crate::models::enums::Locale;

/// Round half up (toward positive infinity) to `places` decimals.
/// Matches the rounding the clinical tables were computed with, so
/// -0.05 rounds to -0.0 rather than -0.1.
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor + 0.5).floor() / factor;
    // Normalize -0.0 so it never prints with a sign.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Kilogram value with exactly one decimal and the locale's separator.
pub fn format_kg(value: f64, locale: Locale) -> String {
    let text = format!("{:.1}", round_half_up(value, 1));
    match locale.decimal_separator() {
        '.' => text,
        sep => text.replace('.', &sep.to_string()),
    }
}

/// A finite, strictly positive measurement, or `None`.
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
