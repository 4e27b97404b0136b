use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{ChartOptions, Core};
use crate::errors::AppResult;
use crate::ui::chart::{ChartStyle, render_chart};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Chart {
        days,
        chronological,
        percent,
    } = cmd
    {
        let entries = open_dashboard(cfg)?.entries()?;
        if entries.is_empty() {
            info("No entries yet.");
            return Ok(());
        }

        let opts = ChartOptions {
            recent_first: cfg.recent_first && !*chronological,
            days: *days,
        };
        let style = ChartStyle {
            width: cfg.chart_width,
            start_parity: cfg.start_parity,
            color,
            percent: *percent,
        };

        print!("{}", render_chart(&Core::build_chart(&entries, opts), &style));
    }
    Ok(())
}
