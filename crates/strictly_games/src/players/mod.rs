//! Player trait and implementations.

mod human;

pub use human::{HumanPlayer, parse_action};

use anyhow::Result;
use strictly_connect_four::ConnectFourEngine;

/// What a player asks the orchestrator to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Drop a disc into the zero-based column.
    Drop(usize),
    /// Take back moves until it is this player's turn again.
    Undo,
    /// Abandon the current game and start a fresh one.
    NewGame,
    /// Leave the session.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that drive the game.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next action from this player.
    async fn next_action(&mut self, engine: &ConnectFourEngine) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
