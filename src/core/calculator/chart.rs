use chrono::NaiveDate;

use crate::models::entry::Entry;
use crate::models::sleep_state::SleepState;

pub use crate::models::entry::MINUTES_PER_DAY;

/// One bar of a chart column: starts `offset_minutes` after the column's
/// midnight and lasts `span_minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub offset_minutes: i64,
    pub span_minutes: i64,
}

impl Segment {
    pub fn offset_percent(&self) -> f64 {
        self.offset_minutes as f64 * 100.0 / MINUTES_PER_DAY as f64
    }

    pub fn span_percent(&self) -> f64 {
        self.span_minutes as f64 * 100.0 / MINUTES_PER_DAY as f64
    }

    pub fn end_minutes(&self) -> i64 {
        self.offset_minutes + self.span_minutes
    }
}

/// Entries of one calendar day together with the number of entries that
/// precede them in the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColumn {
    pub start_index: usize,
    pub entries: Vec<Entry>,
    pub segments: Vec<Segment>,
}

impl ChartColumn {
    pub fn new(start_index: usize, entries: Vec<Entry>) -> Self {
        let segments = segments(&entries);
        Self {
            start_index,
            entries,
            segments,
        }
    }

    /// Calendar day of the column. Columns are never built empty.
    pub fn date(&self) -> Option<NaiveDate> {
        self.entries.first().map(Entry::date)
    }

    /// State shown by segment `k`, given the chart's start parity.
    pub fn segment_state(&self, k: usize, start_parity: usize) -> SleepState {
        SleepState::from_index(self.start_index + k, start_parity)
    }

    pub fn total_minutes(&self) -> i64 {
        self.segments.iter().map(|s| s.span_minutes).sum()
    }

    /// Minutes from the first entry to the end of the column, i.e. the total
    /// without the leading span before the first entry.
    pub fn tracked_minutes(&self) -> i64 {
        self.segments.iter().skip(1).map(|s| s.span_minutes).sum()
    }

    pub fn minutes_in(&self, state: SleepState, start_parity: usize) -> i64 {
        self.segments
            .iter()
            .enumerate()
            .filter(|(k, _)| self.segment_state(*k, start_parity) == state)
            .map(|(_, s)| s.span_minutes)
            .sum()
    }
}

/// Split `entries` into maximal runs sharing the same `YYYY-MM-DD` key,
/// keeping the input order. Each run records how many entries came before it.
pub fn group_by_day(entries: &[Entry]) -> Vec<(usize, Vec<Entry>)> {
    let mut groups: Vec<(usize, Vec<Entry>)> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let same_day = groups
            .last()
            .and_then(|(_, day)| day.last())
            .is_some_and(|prev| prev.day_key() == entry.day_key());

        match groups.last_mut() {
            Some((_, day)) if same_day => day.push(*entry),
            _ => groups.push((index, vec![*entry])),
        }
    }

    groups
}

/// Offsets and spans of one day group, from the midnight before the first
/// entry to the midnight after the last one.
pub fn segments(day_entries: &[Entry]) -> Vec<Segment> {
    let (Some(first), Some(last)) = (day_entries.first(), day_entries.last()) else {
        return Vec::new();
    };

    let mut prev = first.previous_midnight();
    let mut spans = Vec::with_capacity(day_entries.len() + 1);
    for entry in day_entries {
        spans.push((entry.time - prev).num_minutes());
        prev = entry.time;
    }
    spans.push(last.minutes_until_midnight());

    let mut offset = 0;
    spans
        .into_iter()
        .map(|span| {
            let segment = Segment {
                offset_minutes: offset,
                span_minutes: span,
            };
            offset += span;
            segment
        })
        .collect()
}

/// Build one chart column per calendar day, in input order.
pub fn bucket(entries: &[Entry]) -> Vec<ChartColumn> {
    group_by_day(entries)
        .into_iter()
        .map(|(start_index, day)| ChartColumn::new(start_index, day))
        .collect()
}
