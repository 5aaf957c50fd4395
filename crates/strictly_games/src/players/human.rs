//! Human player that reads commands line by line.

use super::{Action, Player};
use anyhow::Result;
use strictly_connect_four::ConnectFourEngine;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument};

/// Human player reading from any buffered async source.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    #[instrument(skip(self, _engine), fields(player = %self.name))]
    async fn next_action(&mut self, _engine: &ConnectFourEngine) -> Result<Action> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                debug!("Input closed");
                return Ok(Action::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }
            return Ok(parse_action(&line));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses one line of keyboard input.
///
/// Columns are typed 1-based. Numbers past the board are passed through so
/// the engine can reject them.
pub fn parse_action(line: &str) -> Action {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "q" | "quit" => Action::Quit,
        "u" | "undo" => Action::Undo,
        "n" | "new" => Action::NewGame,
        _ => match input.parse::<usize>() {
            Ok(column) if column >= 1 => Action::Drop(column - 1),
            _ => Action::Unrecognized(line.trim().to_string()),
        },
    }
}
