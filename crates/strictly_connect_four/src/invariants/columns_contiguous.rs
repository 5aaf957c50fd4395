//! Gravity invariant: discs stack from the bottom with no gaps.

use super::super::{COLS, Cell, ConnectFourEngine, Grid, ROWS};
use super::Invariant;

/// Invariant: every column's discs are contiguous from the bottom row up.
///
/// Walking a column from the top, once a disc is seen every cell below it
/// must also hold a disc.
pub struct ColumnsContiguousInvariant;

impl Invariant<Grid> for ColumnsContiguousInvariant {
    fn holds(grid: &Grid) -> bool {
        (0..COLS).all(|col| {
            let mut seen_disc = false;
            (0..ROWS).all(|row| {
                let occupied = grid.get(row, col) != Some(Cell::Empty);
                if seen_disc && !occupied {
                    return false;
                }
                seen_disc |= occupied;
                true
            })
        })
    }

    fn description() -> &'static str {
        "Discs in each column are contiguous from the bottom row"
    }
}

impl<R> Invariant<ConnectFourEngine<R>> for ColumnsContiguousInvariant {
    fn holds(engine: &ConnectFourEngine<R>) -> bool {
        <Self as Invariant<Grid>>::holds(engine.grid())
    }

    fn description() -> &'static str {
        <Self as Invariant<Grid>>::description()
    }
}
