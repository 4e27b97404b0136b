use crate::cli::commands::{date_or_today, open_dashboard};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::time_resolver::TimeParsePolicy;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::now_clock_text;

/// Add one entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        time,
        date,
        estimated,
        strict,
    } = cmd
    {
        //
        // 1. Form values (defaults: today, now)
        //
        let d = date_or_today(date)?;
        let time_text = time.clone().unwrap_or_else(now_clock_text);
        let policy = TimeParsePolicy::from_strict(*strict || cfg.strict_time);

        //
        // 2. Send and reload
        //
        let dashboard = open_dashboard(cfg)?;
        let resolved = AddLogic::apply(&dashboard, d, &time_text, *estimated, policy)?;

        let added = format!(
            "Entry added at {}{}",
            resolved,
            if *estimated { " (estimated)" } else { "" }
        );
        match dashboard.entries() {
            Ok(list) => success(format!("{} ({} entries)", added, list.len())),
            Err(e) => {
                success(added);
                warning(format!("Saved, but could not refresh entries: {}", e));
            }
        }
    }

    Ok(())
}
