//! Win detection logic for Connect Four.
//!
//! Detection is anchored at the disc just placed: any new line of four must
//! pass through it, so only the four axes through that cell are examined.

use super::super::{CONNECT, COLS, Cell, Grid, Player, ROWS};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line direction through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Row and column step along this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Length of the contiguous run of same-player discs through a cell.
///
/// Counts the cell itself plus matching discs in both directions along
/// `axis`. Returns 0 for empty or off-board cells.
pub fn run_length(grid: &Grid, row: usize, col: usize, axis: Axis) -> usize {
    let Some(Cell::Occupied(player)) = grid.get(row, col) else {
        return 0;
    };
    let (dr, dc) = axis.delta();
    1 + count_direction(grid, row, col, dr, dc, player)
        + count_direction(grid, row, col, -dr, -dc, player)
}

fn count_direction(
    grid: &Grid,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while grid.get_signed(r, c) == Some(Cell::Occupied(player)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Returns the first axis through `(row, col)` with a run of at least four.
pub fn winning_axis(grid: &Grid, row: usize, col: usize) -> Option<Axis> {
    Axis::iter().find(|&axis| run_length(grid, row, col, axis) >= CONNECT)
}

/// Checks whether the disc at `(row, col)` is part of four in a row.
#[instrument(skip(grid))]
pub fn check_win(grid: &Grid, row: usize, col: usize) -> bool {
    winning_axis(grid, row, col).is_some()
}

/// Scans the whole grid for a player with four in a row.
///
/// Only needed when loading an arbitrary position; during play the anchored
/// [`check_win`] is sufficient.
#[instrument(skip(grid))]
pub fn find_winner(grid: &Grid) -> Option<Player> {
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| (row, col)))
        .find(|&(row, col)| check_win(grid, row, col))
        .and_then(|(row, col)| match grid.get(row, col) {
            Some(Cell::Occupied(player)) => Some(player),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let grid = Grid::new();
        assert!(!check_win(&grid, 5, 3));
        assert_eq!(run_length(&grid, 5, 3, Axis::Horizontal), 0);
    }

    #[test]
    fn test_horizontal_run_counted_from_middle() {
        let grid = grid(
            ".......
             .......
             .......
             .......
             .......
             .RRRR..",
        );
        assert_eq!(run_length(&grid, 5, 2, Axis::Horizontal), 4);
        assert_eq!(winning_axis(&grid, 5, 2), Some(Axis::Horizontal));
    }

    #[test]
    fn test_three_is_not_enough() {
        let grid = grid(
            ".......
             .......
             .......
             ...Y...
             ...Y...
             RRRY...",
        );
        assert!(!check_win(&grid, 5, 0));
        assert!(!check_win(&grid, 3, 3));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let grid = grid(
            ".......
             .......
             ...Y...
             ..YR...
             .YRR...
             YRRR...",
        );
        assert_eq!(winning_axis(&grid, 2, 3), Some(Axis::AntiDiagonal));
        assert_eq!(winning_axis(&grid, 5, 0), Some(Axis::AntiDiagonal));
    }

    #[test]
    fn test_run_stops_at_opponent_disc() {
        let grid = grid(
            ".......
             .......
             .......
             .......
             .......
             RRYRR..",
        );
        assert_eq!(run_length(&grid, 5, 0, Axis::Horizontal), 2);
        assert_eq!(run_length(&grid, 5, 4, Axis::Horizontal), 2);
    }

    #[test]
    fn test_find_winner_scans_board() {
        let grid = grid(
            ".......
             .......
             ......Y
             ......Y
             ......Y
             RRR...Y",
        );
        assert_eq!(find_winner(&grid), Some(Player::Yellow));
        assert_eq!(find_winner(&Grid::new()), None);
    }
}
