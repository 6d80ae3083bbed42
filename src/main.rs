//! Tic-tac-toe with move history - unified CLI
//!
//! Play in the terminal, or apply a script of intents and print the result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_history::{AppConfig, GameController, parse_intents, run_script, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.reversed {
        config.set_reversed_display(true);
    }

    match cli.command {
        Command::Play { log_file } => run_play(config, log_file),
        Command::Script { json, intents } => run_script_command(&config, json, &intents),
    }
}

/// Builds the env filter: `RUST_LOG` wins, then the configured filter.
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen.
fn run_play(mut config: AppConfig, log_file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = log_file {
        config.set_log_file(path);
    }

    let file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %config.log_file().display(), "Starting tic-tac-toe");
    tui::run_tui(&config)
}

/// Apply intents without a terminal and print the resulting display model.
fn run_script_command(config: &AppConfig, json: bool, intents: &[String]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    let intents = parse_intents(intents)?;
    let mut controller = GameController::with_reversed_display(*config.reversed_display());
    let model = run_script(&mut controller, &intents)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print!("{}", model.to_text());
    }
    Ok(())
}
