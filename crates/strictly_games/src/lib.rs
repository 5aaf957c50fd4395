//! Strictly Games library - terminal Connect Four
//!
//! Wires the [`strictly_connect_four`] engine to a line-based terminal front end.
//!
//! # Architecture
//!
//! - **Config**: TOML settings merged with command-line overrides
//! - **Players**: async [`Player`] trait with a keyboard-driven [`HumanPlayer`]
//! - **Orchestrator**: turn loop that streams [`GameEvent`]s to the UI
//! - **Render**: plain-text board and status lines

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod orchestrator;
mod players;

pub mod render;

// Crate-level exports
pub use cli::{Cli, Command};
pub use config::{ConfigError, ConfigOverrides, GameConfig, MAX_OPPONENT_DELAY_MS};
pub use orchestrator::{GameEvent, Orchestrator, Scoreboard};
pub use players::{Action, HumanPlayer, Player, parse_action};
