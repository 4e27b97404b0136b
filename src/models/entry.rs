use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::errors::{AppError, AppResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Accepted layouts for timestamps coming from the server, after the
/// optional `Z` designator has been stripped.
const SERVER_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// One sleep/wake transition as returned by `GET /api/entries`.
///
/// The server emits zone-less strings; they are read as UTC wall-clock time
/// and kept naive, the same convention used for resolved timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Entry {
    pub time: NaiveDateTime,
}

impl Entry {
    pub fn new(time: NaiveDateTime) -> Self {
        Self { time }
    }

    /// Parse a server timestamp such as `2024-01-01T22:00:00`,
    /// `2024-01-01T22:00:00Z` or `2024-01-01T22:00:00.000`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let s = raw.trim();
        let s = s
            .strip_suffix('Z')
            .or_else(|| s.strip_suffix('z'))
            .unwrap_or(s);

        SERVER_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::new)
            .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))
    }

    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> AppResult<Vec<Self>> {
        raw.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// `YYYY-MM-DD` key used to group entries by calendar day.
    pub fn day_key(&self) -> String {
        self.time.format("%Y-%m-%d").to_string()
    }

    /// Midnight at or before this entry.
    pub fn previous_midnight(&self) -> NaiveDateTime {
        self.date().and_time(NaiveTime::MIN)
    }

    /// First midnight strictly after this entry; `None` on the last
    /// representable day.
    pub fn next_midnight(&self) -> Option<NaiveDateTime> {
        self.previous_midnight().checked_add_signed(Duration::days(1))
    }

    /// Minutes left until the end of this entry's day.
    pub fn minutes_until_midnight(&self) -> i64 {
        match self.next_midnight() {
            Some(midnight) => (midnight - self.time).num_minutes(),
            None => MINUTES_PER_DAY - self.minutes_since_midnight(),
        }
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        (self.time.hour() * 60 + self.time.minute()) as i64
    }

    pub fn get_date_time(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M").to_string()
    }
}
