use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { yes } = cmd {
        let dashboard = open_dashboard(cfg)?;
        let last = DeleteLogic::preview(&dashboard)?;

        let prompt = format!(
            "Are you sure you want to delete the last entry ({})?",
            last.get_date_time()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&dashboard)?;
        match dashboard.entries() {
            Ok(list) => success(format!(
                "Entry {} has been deleted ({} entries left).",
                last.get_date_time(),
                list.len()
            )),
            Err(e) => {
                success(format!("Entry {} has been deleted.", last.get_date_time()));
                warning(format!("Saved, but could not refresh entries: {}", e));
            }
        }
    }

    Ok(())
}
