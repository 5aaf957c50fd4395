//! Core domain types for Connect Four.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Number of rows on the board. Row 0 is the top.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Discs in a line needed to win.
pub const CONNECT: usize = 4;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Red (moves first by default).
    Red,
    /// Yellow (the opponent by default).
    Yellow,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Single-character symbol used in the grid text format.
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

/// A cell on the Connect Four grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No disc.
    Empty,
    /// Cell holding a player's disc.
    Occupied(Player),
}

impl Cell {
    /// Single-character symbol used in the grid text format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'R' | 'r' => Some(Cell::Occupied(Player::Red)),
            'Y' | 'y' => Some(Cell::Occupied(Player::Yellow)),
            _ => None,
        }
    }
}

/// 6x7 Connect Four grid.
///
/// A plain value: copying a grid produces an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Cells indexed `[row][col]`, row 0 at the top.
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the cell at signed coordinates, `None` when off the board.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }

    /// Overwrites a cell. Does not enforce gravity.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Returns true iff the column exists and its top cell is empty.
    pub fn is_column_playable(&self, col: usize) -> bool {
        matches!(self.get(0, col), Some(Cell::Empty))
    }

    /// Returns the lowest empty row of a column, scanning up from the bottom.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drops a disc into a column and returns the row it landed in.
    ///
    /// Returns `None` without touching the grid if the column is full or
    /// out of range.
    pub fn place(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.lowest_empty_row(col)?;
        self.cells[row][col] = Cell::Occupied(player);
        Some(row)
    }

    /// Columns that can still take a disc, in ascending order.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_column_playable(col)).collect()
    }

    /// Number of discs on the grid.
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Returns all rows, top first.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            if idx + 1 < ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses six lines of seven symbols (`.`, `R`, `Y`), top row first.
    ///
    /// Blank lines and surrounding whitespace are ignored. Gravity is not
    /// checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != ROWS {
            return Err(GridParseError::new(format!(
                "Expected {} rows, found {}",
                ROWS,
                lines.len()
            )));
        }

        let mut grid = Grid::new();
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != COLS {
                return Err(GridParseError::new(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    COLS
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    GridParseError::new(format!(
                        "Unknown symbol {:?} at row {}, column {}",
                        symbol, row, col
                    ))
                })?;
                grid.set(row, col, cell);
            }
        }

        Ok(grid)
    }
}

/// Grid text parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid parse error: {} at {}:{}", message, file, line)]
pub struct GridParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result of the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game continues.
    Ongoing,
    /// The player who just moved completed a line.
    Win(Player),
    /// The board filled up without a winner.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true for Win and Draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "in progress"),
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
