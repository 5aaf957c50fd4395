//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_connect_four::Player;

/// Strictly Games - Connect Four in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play Connect Four against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play Connect Four against the engine
    Play {
        /// Path to game config file (optional)
        #[arg(short, long, default_value = "connect_four.toml")]
        config: PathBuf,

        /// Marker you play (red or yellow)
        #[arg(long)]
        human: Option<Player>,

        /// Marker that moves first (red or yellow)
        #[arg(long)]
        first: Option<Player>,

        /// Pause before the opponent answers, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the opponent's tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    ShowConfig {
        /// Path to game config file (optional)
        #[arg(short, long, default_value = "connect_four.toml")]
        config: PathBuf,
    },
}
