//! Terminal rendering of chart columns: one row per day, one cell per
//! `1440 / width` minutes.

use crate::core::calculator::chart::{ChartColumn, MINUTES_PER_DAY, Segment};
use crate::core::calculator::summary::summarize_column;
use crate::models::sleep_state::SleepState;
use crate::utils::colors::{paint_state, state_glyph};
use crate::utils::formatting::{mins2readable, percent};

#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: usize,
    pub start_parity: usize,
    pub color: bool,
    pub percent: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 48,
            start_parity: 0,
            color: false,
            percent: false,
        }
    }
}

const DATE_COL: usize = 10;

/// Index of the segment covering `minute`, if any.
fn segment_at(segments: &[Segment], minute: i64) -> Option<usize> {
    segments
        .iter()
        .position(|s| s.offset_minutes <= minute && minute < s.end_minutes())
}

fn render_bar(column: &ChartColumn, style: &ChartStyle) -> String {
    let width = style.width.max(1) as i64;
    let mut bar = String::new();

    for cell in 0..width {
        // sample the middle of the cell
        let minute = (2 * cell + 1) * MINUTES_PER_DAY / (2 * width);
        match segment_at(&column.segments, minute) {
            Some(k) => {
                let state = column.segment_state(k, style.start_parity);
                bar.push_str(&paint_state(
                    &state_glyph(state).to_string(),
                    state,
                    style.color,
                ));
            }
            None => bar.push(' '),
        }
    }

    bar
}

fn render_percentages(column: &ChartColumn, style: &ChartStyle) -> String {
    column
        .segments
        .iter()
        .enumerate()
        .map(|(k, s)| {
            let state = column.segment_state(k, style.start_parity);
            paint_state(
                &format!(
                    "{}@{}+{}",
                    state.as_str(),
                    percent(s.offset_percent()),
                    percent(s.span_percent())
                ),
                state,
                style.color,
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hour labels aligned with the bar cells.
pub fn render_axis(width: usize) -> String {
    let width = width.max(1);
    let mut axis = vec![' '; width + 2];

    for hour in [0usize, 6, 12, 18] {
        let pos = hour * width / 24;
        let label = format!("{:02}", hour);
        for (i, c) in label.chars().enumerate() {
            if pos + i < axis.len() {
                axis[pos + i] = c;
            }
        }
    }

    format!(
        "{} {}",
        " ".repeat(DATE_COL),
        axis.into_iter().collect::<String>().trim_end()
    )
}

pub fn render_row(column: &ChartColumn, style: &ChartStyle) -> String {
    let date = column
        .date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let summary = summarize_column(column, style.start_parity);

    if style.percent {
        return format!(
            "{:<width$} {}",
            date,
            render_percentages(column, style),
            width = DATE_COL
        );
    }

    format!(
        "{:<width$} {}  {} {}  {} {}",
        date,
        render_bar(column, style),
        state_glyph(SleepState::Asleep),
        mins2readable(summary.asleep_minutes),
        state_glyph(SleepState::Awake),
        mins2readable(summary.awake_minutes),
        width = DATE_COL
    )
}

pub fn render_chart(columns: &[ChartColumn], style: &ChartStyle) -> String {
    let mut out = String::new();

    if !style.percent {
        out.push_str(&render_axis(style.width));
        out.push('\n');
    }

    for column in columns {
        out.push_str(&render_row(column, style));
        out.push('\n');
    }

    out
}
