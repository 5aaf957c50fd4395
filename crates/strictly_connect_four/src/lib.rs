//! Pure Connect Four game logic.
//!
//! The [`ConnectFourEngine`] owns a 6x7 grid, validates and applies drops,
//! reports wins and draws, supports one-step undo, and picks moves for a
//! depth-1 heuristic opponent.
//!
//! # Example
//!
//! ```
//! use strictly_connect_four::{ConnectFourEngine, GameOutcome, Player};
//!
//! let mut engine = ConnectFourEngine::seeded(7);
//! assert_eq!(engine.drop(3, Player::Red), Ok(GameOutcome::Ongoing));
//!
//! let col = engine.select_opponent_move().expect("board has room");
//! engine.drop(col, engine.opponent()).unwrap();
//! assert_eq!(engine.to_move(), Player::Red);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod types;

pub mod invariants;
pub mod opponent;
pub mod rules;

pub use action::MoveError;
pub use engine::ConnectFourEngine;
pub use opponent::MoveReason;
pub use types::{CONNECT, COLS, Cell, GameOutcome, Grid, GridParseError, Player, ROWS};
