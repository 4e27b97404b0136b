use crate::cli::commands::date_or_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::time_resolver::{TimeParsePolicy, resolve_with};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Resolve { time, date, strict } = cmd {
        let d = date_or_today(date)?;
        let policy = TimeParsePolicy::from_strict(*strict || cfg.strict_time);
        println!("{}", resolve_with(d, time, policy)?);
    }
    Ok(())
}
