//! History consistency invariant: each snapshot is exactly one drop behind the next.

use super::super::ConnectFourEngine;
use super::Invariant;

/// Invariant: disc counts along the history grow by exactly one per step.
///
/// The snapshots followed by the current grid form a chain where every
/// step added one disc. No drop went unrecorded and no snapshot was taken
/// without a drop.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<ConnectFourEngine<R>> for HistoryConsistentInvariant {
    fn holds(engine: &ConnectFourEngine<R>) -> bool {
        let counts: Vec<usize> = engine
            .snapshot_grids()
            .chain(std::iter::once(engine.grid()))
            .map(|grid| grid.disc_count())
            .collect();

        counts.windows(2).all(|pair| pair[1] == pair[0] + 1)
    }

    fn description() -> &'static str {
        "Each history snapshot is exactly one disc behind the next state"
    }
}
