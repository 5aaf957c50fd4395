//! Connect Four game engine.
//!
//! Owns the grid, the player to move, the game-active flag and the undo
//! history. All mutation goes through [`ConnectFourEngine::drop`],
//! [`ConnectFourEngine::undo`] and [`ConnectFourEngine::reset`]; a rejected
//! drop leaves every field untouched.

use super::action::MoveError;
use super::invariants::{ColumnsContiguousInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation};
use super::opponent;
use super::rules;
use super::types::{COLS, Cell, GameOutcome, Grid, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// State captured before each successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    grid: Grid,
    to_move: Player,
}

/// Connect Four engine with a depth-1 heuristic opponent.
///
/// `R` is the random source used to break ties in
/// [`select_opponent_move`](Self::select_opponent_move). Seed it for
/// reproducible games.
#[derive(Debug, Clone)]
pub struct ConnectFourEngine<R = StdRng> {
    grid: Grid,
    to_move: Player,
    active: bool,
    outcome: GameOutcome,
    history: Vec<Snapshot>,
    starting_player: Player,
    opponent: Player,
    rng: R,
}

impl ConnectFourEngine<StdRng> {
    /// Creates a new game with an OS-seeded random source.
    ///
    /// Red moves first and Yellow is the engine-controlled opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a new game whose opponent tie-breaks are reproducible.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ConnectFourEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ConnectFourEngine<R> {
    /// Creates a new game using the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            grid: Grid::new(),
            to_move: Player::Red,
            active: true,
            outcome: GameOutcome::Ongoing,
            history: Vec::new(),
            starting_player: Player::Red,
            opponent: Player::Yellow,
            rng,
        }
    }

    /// Sets who moves first and restarts the game.
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self.reset();
        self
    }

    /// Sets which marker [`select_opponent_move`](Self::select_opponent_move) plays.
    pub fn with_opponent(mut self, player: Player) -> Self {
        self.opponent = player;
        self
    }

    /// Loads an arbitrary position with empty history.
    ///
    /// The grid must obey gravity. A position that already contains four in
    /// a row, or a full grid, is loaded as finished.
    #[instrument(skip(grid, rng))]
    pub fn from_position(grid: Grid, to_move: Player, rng: R) -> Result<Self, InvariantViolation> {
        if !<ColumnsContiguousInvariant as Invariant<Grid>>::holds(&grid) {
            warn!("Rejected position with floating discs");
            return Err(InvariantViolation::new(
                <ColumnsContiguousInvariant as Invariant<Grid>>::description(),
            ));
        }

        let outcome = match rules::find_winner(&grid) {
            Some(winner) => GameOutcome::Win(winner),
            None if rules::is_full(&grid) => GameOutcome::Draw,
            None => GameOutcome::Ongoing,
        };

        let mut engine = Self::with_rng(rng);
        engine.grid = grid;
        engine.to_move = to_move;
        engine.starting_player = to_move;
        engine.outcome = outcome;
        engine.active = !outcome.is_terminal();
        Ok(engine)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player expected to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns false once the game has been won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the outcome of the most recent move.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Number of drops that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the engine-controlled marker.
    pub fn opponent(&self) -> Player {
        self.opponent
    }

    /// Returns who moves first after a reset.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Columns that can still take a disc, in ascending order.
    pub fn playable_columns(&self) -> Vec<usize> {
        self.grid.playable_columns()
    }

    /// Returns true iff `col` is on the board and its top cell is empty.
    pub fn is_column_playable(&self, col: usize) -> bool {
        self.grid.is_column_playable(col)
    }

    /// Lowest empty row of `col`, or `None` when full or out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        self.grid.lowest_empty_row(col)
    }

    /// Checks whether the disc at `(row, col)` is part of four in a row.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        rules::check_win(&self.grid, row, col)
    }

    /// True iff every column's top cell is occupied.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.grid)
    }

    /// Drops `player`'s disc into `col`.
    ///
    /// Win is evaluated from the placed cell only, then the board is checked
    /// for a draw. Either ends the game. On [`GameOutcome::Ongoing`] the turn
    /// passes to `player`'s opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`], [`MoveError::InvalidColumn`] or
    /// [`MoveError::ColumnFull`] without changing any state.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn drop(&mut self, col: usize, player: Player) -> Result<GameOutcome, MoveError> {
        if !self.active {
            warn!("Drop rejected: game over");
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            warn!("Drop rejected: column out of range");
            return Err(MoveError::InvalidColumn(col));
        }
        let Some(row) = self.grid.lowest_empty_row(col) else {
            warn!("Drop rejected: column full");
            return Err(MoveError::ColumnFull(col));
        };

        self.history.push(Snapshot {
            grid: self.grid,
            to_move: self.to_move,
        });
        self.grid.set(row, col, Cell::Occupied(player));

        let outcome = if let Some(axis) = rules::winning_axis(&self.grid, row, col) {
            info!(%player, %axis, row, col, "Four in a row");
            GameOutcome::Win(player)
        } else if rules::is_full(&self.grid) {
            info!("Board full, draw");
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        };

        if outcome.is_terminal() {
            self.active = false;
        } else {
            self.to_move = player.opponent();
        }
        self.outcome = outcome;

        debug!(row, ?outcome, "Disc placed");
        self.debug_assert_invariants();
        Ok(outcome)
    }

    /// Restores the state from before the most recent drop.
    ///
    /// Reactivates a finished game. Returns false if there was nothing to undo.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            debug!("Nothing to undo");
            return false;
        };

        self.grid = snapshot.grid;
        self.to_move = snapshot.to_move;
        self.active = true;
        self.outcome = GameOutcome::Ongoing;

        self.debug_assert_invariants();
        true
    }

    /// Clears the board and history and gives the move to the starting player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.history.clear();
        self.to_move = self.starting_player;
        self.active = true;
        self.outcome = GameOutcome::Ongoing;
        debug!(starting_player = %self.starting_player, "Game reset");
    }

    pub(crate) fn snapshot_grids(&self) -> impl Iterator<Item = &Grid> {
        self.history.iter().map(|snapshot| &snapshot.grid)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn debug_assert_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated"
        );
    }
}

impl<R: Rng> ConnectFourEngine<R> {
    /// Chooses a column for the opponent marker.
    ///
    /// Win if possible, else block the other player's win, else play nearest
    /// the center with a random tie-break. Returns `None` when no column is
    /// playable. The grid is not modified.
    #[instrument(skip(self), fields(opponent = %self.opponent))]
    pub fn select_opponent_move(&mut self) -> Option<usize> {
        let (col, reason) =
            opponent::select_move_with_reason(&self.grid, self.opponent, &mut self.rng)?;
        debug!(col, %reason, "Opponent move selected");
        Some(col)
    }
}
