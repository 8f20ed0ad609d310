//! gymcheck library root.
//! Exposes the CLI parser, the high-level run() function and the
//! check-in, calendar and analytics modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{LogFormat, LoggingConfig, init_logging};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Qr { .. } => cli::commands::qr::handle(&cli.command, cfg),
        Commands::Scan { .. } => cli::commands::scan::handle(&cli.command, cfg),
        Commands::Calendar => cli::commands::calendar::handle(&cli.command),
        Commands::Visit { .. } => cli::commands::visit::handle(&cli.command, cfg),
        Commands::Analytics { .. } => cli::commands::analytics::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Membership { .. } => cli::commands::membership::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    let format = if cfg.log_format == "json" {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    if let Err(e) = init_logging(
        LoggingConfig::default()
            .with_level(cfg.log_level.clone())
            .with_format(format),
    ) {
        ui::messages::warning(format!("Logging disabled: {}", e));
    }

    dispatch(&cli, &cfg)
}
