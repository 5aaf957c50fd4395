//! Game rules for Connect Four.
//!
//! Pure functions over a [`Grid`](crate::Grid). The engine composes them;
//! the opponent heuristic probes them on scratch copies.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Axis, check_win, find_winner, run_length, winning_axis};
