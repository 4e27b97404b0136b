//! Formatting utilities used for CLI outputs.

/// Duration as `07h 20m`. Negative spans are shown by magnitude.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    format!("{:02}h {:02}m", abs_m / 60, abs_m % 60)
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
