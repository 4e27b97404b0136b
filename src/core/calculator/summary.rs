use chrono::NaiveDate;

use super::chart::ChartColumn;
use crate::models::entry::Entry;
use crate::models::sleep_state::SleepState;

/// Time between two consecutive entries.
#[derive(Debug, Clone)]
pub struct Span {
    pub index: usize,
    pub start: Entry,
    pub end: Option<Entry>,
    pub state: SleepState,
    pub duration_minutes: i64,
}

/// Per-day totals shown next to each chart row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub date: Option<NaiveDate>,
    pub entries: usize,
    pub asleep_minutes: i64,
    pub awake_minutes: i64,
}

/// Walk the entries in order and describe each span they open.
///
/// The span opened by entry `i` ends at entry `i + 1`; the last one is still
/// open. Its state is the one the entry switches to.
pub fn build_spans(entries: &[Entry], start_parity: usize) -> Vec<Span> {
    entries
        .iter()
        .enumerate()
        .map(|(i, start)| {
            let end = entries.get(i + 1).copied();
            Span {
                index: i,
                start: *start,
                end,
                state: SleepState::from_index(i + 1, start_parity),
                duration_minutes: end
                    .map(|e| (e.time - start.time).num_minutes())
                    .unwrap_or(0),
            }
        })
        .collect()
}

pub fn summarize_column(column: &ChartColumn, start_parity: usize) -> DaySummary {
    DaySummary {
        date: column.date(),
        entries: column.entries.len(),
        asleep_minutes: column.minutes_in(SleepState::Asleep, start_parity),
        awake_minutes: column.minutes_in(SleepState::Awake, start_parity),
    }
}
