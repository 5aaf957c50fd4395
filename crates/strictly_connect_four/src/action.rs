//! Move rejection reasons.
//!
//! Rejections are expected during normal play (a click on a full column,
//! input after the game ended). A rejected move never changes engine state.

use super::types::COLS;

/// Reason a drop was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The column index is outside the board.
    #[display("Column {} is out of range (0-{})", _0, COLS - 1)]
    InvalidColumn(usize),

    /// The column has no empty cell left.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// The game already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
