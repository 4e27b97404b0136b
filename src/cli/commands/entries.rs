use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summary::build_spans;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::mins2readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entries { last } = cmd {
        let entries = open_dashboard(cfg)?.entries()?;
        if entries.is_empty() {
            info("No entries yet.");
            return Ok(());
        }

        let spans = build_spans(&entries, cfg.start_parity);
        let skip = last.map_or(0, |n| spans.len().saturating_sub(n));

        let mut table = Table::with_headers(&["#", "Entry", "Then", "For"]);
        for span in spans.iter().skip(skip) {
            table.add_row(vec![
                (span.index + 1).to_string(),
                span.start.get_date_time(),
                span.state.as_str().to_string(),
                match span.end {
                    Some(_) => mins2readable(span.duration_minutes),
                    None => "--".to_string(),
                },
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
