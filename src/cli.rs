//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(short, long, global = true)]
    pub reversed: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply intents without a terminal and print the result
    ///
    /// Intents: a board number 1-9 or label (center, top-left, ...),
    /// jump:N, reverse, forward, toggle, restart.
    Script {
        /// Print the display model as JSON
        #[arg(long)]
        json: bool,

        /// Intents to apply in order
        #[arg(required = true)]
        intents: Vec<String>,
    },
}
