//! Display formatting for fiscal and temperature figures.
//!
//! The dashboard renders these strings verbatim, so the formats are part of
//! the API contract: `$245.6B`, `-0.28°C`, `23.5%`.

/// Format a $B figure: one decimal, dropped when the value is whole.
/// Negative values (treasury surplus) keep the sign ahead of the `$`.
pub fn format_billions(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let magnitude = rounded.abs();
    if magnitude.fract() == 0.0 {
        format!("{sign}${magnitude:.0}B")
    } else {
        format!("{sign}${magnitude:.1}B")
    }
}

/// Format a temperature delta: always signed, two decimals.
pub fn format_degrees(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}°C")
    } else {
        format!("{value:.2}°C")
    }
}

/// Format a share of total as a one-decimal percentage.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
