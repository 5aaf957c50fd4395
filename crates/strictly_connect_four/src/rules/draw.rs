//! Draw detection logic for Connect Four.

use super::super::{Cell, Grid};
use tracing::instrument;

/// Checks if the board is full (every column's top cell occupied).
///
/// Gravity keeps columns contiguous, so the top row alone decides this.
/// A full board with no winning last move is a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.rows()[0].iter().all(|cell| *cell != Cell::Empty)
}
