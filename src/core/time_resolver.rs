//! Turns a calendar date plus a free-form clock string into a
//! [`ResolvedTimestamp`].

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{AppError, AppResult};
use crate::models::timestamp::ResolvedTimestamp;

/// `H:MM` or `HH:MM`, optional spaces, optional `a`/`p`, optional `m`.
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d?\d):(\d{2})\s*(?:(p)|a)?m?$").expect("valid clock regex")
});

/// What to do with clock text that does not match the accepted pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeParsePolicy {
    /// Fall back to midnight of the given date.
    #[default]
    Lenient,
    /// Reject unparseable or out-of-range input with `AppError::InvalidTime`.
    Strict,
}

impl TimeParsePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            TimeParsePolicy::Strict
        } else {
            TimeParsePolicy::Lenient
        }
    }
}

/// Hour and minute extracted from clock text, already converted to 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn is_in_range(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }
}

/// Parse clock text such as `9:30`, `09:30am`, `9:30 PM` or `14:30`.
///
/// `12` without a `p` marker means midnight; `1`..`11` with `p` are moved to
/// the afternoon; anything else is taken as a 24-hour value.
pub fn parse_clock(text: &str) -> Option<ClockTime> {
    let caps = CLOCK_RE.captures(text)?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let pm = caps.get(3).is_some();

    if hour == 12 && !pm {
        hour = 0;
    } else if hour < 12 && pm {
        hour += 12;
    }

    Some(ClockTime { hour, minute })
}

/// Resolve `time_text` on `date`, falling back to midnight when the text
/// cannot be parsed or rolls past the last representable date.
pub fn resolve(date: NaiveDate, time_text: &str) -> ResolvedTimestamp {
    parse_clock(time_text)
        .and_then(|clock| ResolvedTimestamp::at(date, clock.hour, clock.minute))
        .unwrap_or_else(|| {
            tracing::debug!(input = time_text, %date, "unresolvable time, using midnight");
            ResolvedTimestamp::midnight(date)
        })
}

/// Same as [`resolve`] but lets the caller reject bad input.
pub fn resolve_with(
    date: NaiveDate,
    time_text: &str,
    policy: TimeParsePolicy,
) -> AppResult<ResolvedTimestamp> {
    match policy {
        TimeParsePolicy::Lenient => Ok(resolve(date, time_text)),
        TimeParsePolicy::Strict => {
            parse_clock(time_text)
                .filter(ClockTime::is_in_range)
                .and_then(|clock| ResolvedTimestamp::at(date, clock.hour, clock.minute))
                .ok_or_else(|| AppError::InvalidTime(time_text.to_string()))
        }
    }
}
