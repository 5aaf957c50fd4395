//! Depth-1 heuristic opponent.
//!
//! Fixed priority policy, not a search:
//! 1. take an immediate win,
//! 2. otherwise block the other player's immediate win,
//! 3. otherwise play as close to the center column as possible, breaking
//!    ties at random.
//!
//! Wins and blocks are tried in ascending column order and the first hit is
//! taken. Nothing beyond one ply is examined.

use super::rules::check_win;
use super::{COLS, Grid, Player};
use rand::Rng;
use tracing::{debug, instrument};

/// Why the opponent chose a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum MoveReason {
    /// The column completes four for the mover.
    Win,
    /// The column stops the other player completing four.
    Block,
    /// No tactical move; closest to the center.
    Center,
}

/// Picks a column for `mark`, or `None` if the grid is full.
pub fn select_move<R: Rng + ?Sized>(grid: &Grid, mark: Player, rng: &mut R) -> Option<usize> {
    select_move_with_reason(grid, mark, rng).map(|(col, _)| col)
}

/// Picks a column for `mark` and reports which rule chose it.
#[instrument(skip(grid, rng))]
pub fn select_move_with_reason<R: Rng + ?Sized>(
    grid: &Grid,
    mark: Player,
    rng: &mut R,
) -> Option<(usize, MoveReason)> {
    let candidates = grid.playable_columns();
    if candidates.is_empty() {
        debug!("No playable columns");
        return None;
    }

    if let Some(col) = first_completing_column(grid, &candidates, mark) {
        debug!(col, "Taking immediate win");
        return Some((col, MoveReason::Win));
    }

    if let Some(col) = first_completing_column(grid, &candidates, mark.opponent()) {
        debug!(col, "Blocking opponent win");
        return Some((col, MoveReason::Block));
    }

    let col = pick_central(&candidates, rng)?;
    debug!(col, "Preferring center");
    Some((col, MoveReason::Center))
}

/// First candidate column where a `mark` disc would complete four.
///
/// Each probe runs on a copy of the grid.
fn first_completing_column(grid: &Grid, candidates: &[usize], mark: Player) -> Option<usize> {
    candidates.iter().copied().find(|&col| {
        let mut probe = *grid;
        probe
            .place(col, mark)
            .is_some_and(|row| check_win(&probe, row, col))
    })
}

/// Distance of a column from the center column.
pub fn center_distance(col: usize) -> usize {
    col.abs_diff(COLS / 2)
}

/// Uniform pick among the (at most two) candidates nearest the center.
fn pick_central<R: Rng + ?Sized>(candidates: &[usize], rng: &mut R) -> Option<usize> {
    let nearest = candidates.iter().copied().map(center_distance).min()?;
    let tied: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&col| center_distance(col) == nearest)
        .take(2)
        .collect();

    match tied.as_slice() {
        [only] => Some(*only),
        _ => Some(tied[rng.random_range(0..tied.len())]),
    }
}
