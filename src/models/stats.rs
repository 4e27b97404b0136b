use serde::{Deserialize, Serialize};

use super::entry::Entry;
use crate::errors::AppResult;

/// One `(timestamp, label)` pair of a stats column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord(pub String, pub String);

impl StatRecord {
    pub fn timestamp(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &str {
        &self.1
    }

    pub fn entry(&self) -> AppResult<Entry> {
        Entry::parse(&self.0)
    }
}

/// Aggregate statistics computed by the server (`GET /api/stats`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub longest_awake: Vec<StatRecord>,
    pub shortest_awake: Vec<StatRecord>,
    pub longest_asleep: Vec<StatRecord>,
    pub shortest_asleep: Vec<StatRecord>,
    pub earliest_wake: Vec<StatRecord>,
    pub earliest_sleep: Vec<StatRecord>,
    pub latest_wake: Vec<StatRecord>,
    pub latest_sleep: Vec<StatRecord>,
    pub avg_awake: String,
    pub avg_asleep: String,
}

/// Stats columns that carry a date next to their label, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatColumn {
    LongestAwake,
    ShortestAwake,
    LongestAsleep,
    ShortestAsleep,
    EarliestWake,
    LatestWake,
    EarliestSleep,
    LatestSleep,
}

impl StatColumn {
    pub const ALL: [StatColumn; 8] = [
        StatColumn::LongestAwake,
        StatColumn::ShortestAwake,
        StatColumn::LongestAsleep,
        StatColumn::ShortestAsleep,
        StatColumn::EarliestWake,
        StatColumn::LatestWake,
        StatColumn::EarliestSleep,
        StatColumn::LatestSleep,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatColumn::LongestAwake => "Longest awake",
            StatColumn::ShortestAwake => "Shortest awake",
            StatColumn::LongestAsleep => "Longest asleep",
            StatColumn::ShortestAsleep => "Shortest asleep",
            StatColumn::EarliestWake => "Earliest wake",
            StatColumn::LatestWake => "Latest wake",
            StatColumn::EarliestSleep => "Earliest sleep",
            StatColumn::LatestSleep => "Latest sleep",
        }
    }
}

impl Stats {
    pub fn column(&self, column: StatColumn) -> &[StatRecord] {
        match column {
            StatColumn::LongestAwake => &self.longest_awake,
            StatColumn::ShortestAwake => &self.shortest_awake,
            StatColumn::LongestAsleep => &self.longest_asleep,
            StatColumn::ShortestAsleep => &self.shortest_asleep,
            StatColumn::EarliestWake => &self.earliest_wake,
            StatColumn::LatestWake => &self.latest_wake,
            StatColumn::EarliestSleep => &self.earliest_sleep,
            StatColumn::LatestSleep => &self.latest_sleep,
        }
    }
}
