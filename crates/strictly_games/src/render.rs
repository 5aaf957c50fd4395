//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;
use strictly_connect_four::{COLS, GameOutcome, Grid, Player as Mark};

/// Draws the grid with a 1-based column header.
pub fn board(grid: &Grid) -> String {
    let header = (1..=COLS)
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![header];
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Status line shown under the board.
pub fn status(to_move: Mark, outcome: GameOutcome, human: Mark) -> String {
    match outcome {
        GameOutcome::Win(winner) if winner == human => {
            "You win! (n = new game, u = undo, q = quit)".to_string()
        }
        GameOutcome::Win(winner) => format!("{} wins. (n = new game, u = undo, q = quit)", winner),
        GameOutcome::Draw => "Draw. (n = new game, u = undo, q = quit)".to_string(),
        GameOutcome::Ongoing if to_move == human => {
            format!("{} to move: column 1-{}, u = undo, n = new game, q = quit", to_move, COLS)
        }
        GameOutcome::Ongoing => format!("{} to move", to_move),
    }
}

/// Text for one event, or `None` when the event prints nothing.
pub fn event(event: &GameEvent, human: Mark) -> Option<String> {
    match event {
        GameEvent::Board {
            grid,
            to_move,
            outcome,
        } => Some(format!(
            "\n{}\n{}",
            board(grid),
            status(*to_move, *outcome, human)
        )),
        GameEvent::OpponentThinking => Some("Opponent is thinking...".to_string()),
        GameEvent::MoveMade { player, column } => {
            Some(format!("{} dropped into column {}", player, column + 1))
        }
        GameEvent::Rejected(reason) => Some(format!("Rejected: {}", reason)),
        GameEvent::Undone { moves } => Some(format!(
            "Took back {} move{}",
            moves,
            if *moves == 1 { "" } else { "s" }
        )),
        GameEvent::NewGame => Some("New game".to_string()),
        GameEvent::GameOver(_) => None,
    }
}
