//! Terminal rendering of the server statistics.

use crate::models::stats::{StatColumn, Stats};
use crate::utils::table::Table;

/// Rows shown per stats column.
pub const ROWS_PER_COLUMN: usize = 5;

pub fn render_averages(stats: &Stats) -> String {
    let mut table = Table::with_headers(&["Average", "Duration"]);
    table.add_row(vec!["Awake".into(), stats.avg_awake.clone()]);
    table.add_row(vec!["Asleep".into(), stats.avg_asleep.clone()]);
    table.render()
}

/// One block per column: rank, date of the record and its label. Records
/// whose timestamp cannot be parsed are shown verbatim.
pub fn render_column(stats: &Stats, column: StatColumn) -> String {
    let mut table = Table::with_headers(&["#", column.title(), ""]);

    for (i, record) in stats
        .column(column)
        .iter()
        .take(ROWS_PER_COLUMN)
        .enumerate()
    {
        let when = record
            .entry()
            .map(|e| e.get_date_time())
            .unwrap_or_else(|_| record.timestamp().to_string());
        table.add_row(vec![
            (i + 1).to_string(),
            when,
            record.label().to_string(),
        ]);
    }

    if table.is_empty() {
        table.add_row(vec!["-".into(), "--".into(), String::new()]);
    }

    table.render()
}

pub fn render_stats(stats: &Stats) -> String {
    let mut blocks = vec![render_averages(stats)];
    blocks.extend(StatColumn::ALL.iter().map(|c| render_column(stats, *c)));
    blocks.join("\n")
}
