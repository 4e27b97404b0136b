use crate::cli::commands::open_dashboard;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::stats::render_stats;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let stats = open_dashboard(cfg)?.stats()?;
    header("Sleep statistics");
    print!("{}", render_stats(&stats));
    Ok(())
}
