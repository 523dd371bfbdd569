#![allow(clippy::print_stdout, clippy::print_stderr)]

mod args;
mod handlers;

use crate::args::{AppCommands, Cli};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use fedhub::domain::config::{AppConfig, LoggingConfig};
use fedhub::kernel::config::{load_config, validate_app_config};
use fedhub_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match cli.config.as_deref() {
        Some(path) => {
            let cfg: AppConfig = load_config(Some(path))
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            validate_app_config(&cfg)?;
            cfg
        },
        None => AppConfig::default(),
    };

    let _log = init_logger(&cfg.logging)?;
    let _slices = fedhub::init();
    tracing::debug!(config = ?cli.config, "FedHub CLI initialized");

    match cli.command {
        AppCommands::Check { file, kind, fail_fast } => {
            handlers::check::check_records(&file, kind, fail_fast)?;
        },
        AppCommands::Snapshot { file, strict } => {
            handlers::snapshot::check_snapshot(&file, strict)?;
        },
        AppCommands::Config {} => handlers::config::show_config(&cfg)?,
    }

    Ok(())
}

fn init_logger(logging: &LoggingConfig) -> Result<Logger> {
    let level = logging
        .level
        .parse::<LevelFilter>()
        .map_err(|e| anyhow!("Invalid logging.level `{}`: {e}", logging.level))?;

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(logging.console)
        .level(level);

    let logger = match &logging.path {
        Some(path) => {
            let builder = builder.path(path);
            let builder = if logging.json { builder.json() } else { builder };
            builder.init()?
        },
        None => builder.init()?,
    };

    Ok(logger)
}
