//! sleepy library root.
//! Exposes the CLI parser, the high-level run() function and the pure time
//! resolution / chart bucketing core.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the diagnostic logger on stderr. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "sleepy=warn",
        1 => "sleepy=info",
        _ => "sleepy=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let color = utils::colors::color_enabled(cli.no_color);

    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Resolve { .. } => cli::commands::resolve::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg, color),
        Commands::Entries { .. } => cli::commands::entries::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // load config once; `init` must work even when the file is broken
    let config_path = Config::resolve_path(cli.config.as_deref());
    let mut cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };

    if let Some(api) = &cli.api {
        cfg.set_value("api_url", api)?;
    }

    tracing::debug!(config = %config_path.display(), api = %cfg.api_url, "configuration loaded");
    dispatch(&cli, &cfg, &config_path)
}
