//! SeenBot - console chat that warns about replies left on seen

use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use seenbot::cli::Cli;
use seenbot::config::Config;
use seenbot::{ConsoleSink, StdinSource, TurnCoordinator};

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", level);
            tracing::Level::WARN
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // stdout carries the chat transcript, so logs go to stderr
    // Priority: CLI --log-level > RUST_LOG > WARN
    let filter = match cli_log_level {
        Some(level) => tracing_subscriber::EnvFilter::default().add_directive(parse_level(level).into()),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::default().add_directive(tracing::Level::WARN.into())),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install log subscriber: {}", e))?;

    debug!("Logging initialized");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::from_cli(&cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    info!(timeout_secs = config.timeout_secs, participants = ?config.participants, "seenbot starting");

    let mut coordinator = TurnCoordinator::from_config(&config, Box::new(StdinSource), Arc::new(ConsoleSink::new()));
    match coordinator.run().await {
        Err(e) if e.is_input_closed() => {
            info!(reason = %e, "Chat ended");
            Ok(())
        }
        Err(e) => Err(e).context("Chat session failed"),
        Ok(()) => Ok(()),
    }
}
