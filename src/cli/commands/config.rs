use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set,
    } = cmd
    {
        if let Some(assignment) = set {
            // reload from disk so that --api does not leak into the file
            let mut on_disk = Config::load(path)?;
            ConfigLogic::set(&mut on_disk, path, assignment)?;
            success(format!("Updated {}", path.display()));
        }

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            if !path.exists() {
                Config::init_at(path, false)?;
            }
            ConfigLogic::edit(path, editor)?;
            success("Configuration file edited");
        }
    }

    Ok(())
}
