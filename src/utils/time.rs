//! Clock helpers for the add form defaults.

use chrono::Timelike;

/// Current local time as `H:MM`, a value the time resolver accepts.
pub fn now_clock_text() -> String {
    let now = chrono::Local::now();
    format!("{}:{:02}", now.hour(), now.minute())
}
