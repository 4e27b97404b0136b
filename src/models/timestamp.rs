use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Wire layout of a resolved timestamp. Seconds are always written as `00`.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:00";

/// Minute-precision point in time sent to the API as `YYYY-MM-DDTHH:MM:00`.
///
/// Values are naive wall-clock times in the server zone (treated as UTC);
/// no offset is ever attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedTimestamp(NaiveDateTime);

impl ResolvedTimestamp {
    /// Midnight of `date`.
    pub fn midnight(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    /// `date` at `hour:minute`. Out-of-range fields carry over into the
    /// following hours/days; `None` when that runs past the last
    /// representable date.
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Option<Self> {
        let offset = Duration::hours(hour as i64) + Duration::minutes(minute as i64);
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(offset)
            .map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }

    /// Parse a `YYYY-MM-DDTHH:MM:SS` string; seconds must be zero.
    pub fn parse_wire(s: &str) -> AppResult<Self> {
        let dt = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S")
            .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;
        if dt.second() != 0 {
            return Err(AppError::InvalidTimestamp(s.to_string()));
        }
        Ok(Self(dt))
    }
}

impl fmt::Display for ResolvedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
