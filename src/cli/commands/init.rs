use std::path::Path;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if Config::init_at(path, force)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
