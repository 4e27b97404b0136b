use crate::core::calculator::chart::{self, ChartColumn};
use crate::models::entry::Entry;

/// How the chart columns are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Most recent day first (dashboard view) instead of chronological.
    pub recent_first: bool,
    /// Keep only the last N days, if set.
    pub days: Option<usize>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            recent_first: true,
            days: None,
        }
    }
}

pub struct Core;

impl Core {
    /// Bucket entries into day columns, then apply the display options.
    /// Bucketing itself never reorders; reversal happens here.
    pub fn build_chart(entries: &[Entry], opts: ChartOptions) -> Vec<ChartColumn> {
        let mut columns = chart::bucket(entries);

        if let Some(n) = opts.days {
            let skip = columns.len().saturating_sub(n);
            columns.drain(..skip);
        }

        if opts.recent_first {
            columns.reverse();
        }

        columns
    }
}
