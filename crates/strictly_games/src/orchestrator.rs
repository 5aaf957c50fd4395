//! Game orchestration between a human and the engine's opponent.

use crate::players::{Action, Player};
use anyhow::Result;
use derive_getters::Getters;
use std::time::Duration;
use strictly_connect_four::{ConnectFourEngine, GameOutcome, Grid, Player as Mark};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Current position, sent after every change.
    Board {
        /// Grid contents.
        grid: Grid,
        /// Marker due to move.
        to_move: Mark,
        /// Result so far.
        outcome: GameOutcome,
    },
    /// Opponent is choosing a column.
    OpponentThinking,
    /// A disc landed.
    MoveMade {
        /// Who dropped it.
        player: Mark,
        /// Zero-based column.
        column: usize,
    },
    /// An action was refused. The game is unchanged.
    Rejected(String),
    /// Moves were taken back.
    Undone {
        /// Number of drops removed.
        moves: usize,
    },
    /// A fresh game started.
    NewGame,
    /// Game ended.
    GameOver(GameOutcome),
}

/// Results across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    red_wins: u32,
    yellow_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished game. Ongoing outcomes are ignored.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::Red) => self.red_wins += 1,
            GameOutcome::Win(Mark::Yellow) => self.yellow_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }

    /// Games counted so far.
    pub fn games(&self) -> u32 {
        self.red_wins + self.yellow_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Red {} - Yellow {} (draws: {})",
            self.red_wins, self.yellow_wins, self.draws
        )
    }
}

/// Orchestrates a session between a human and the engine.
pub struct Orchestrator {
    engine: ConnectFourEngine,
    human: Box<dyn Player>,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    scoreboard: Scoreboard,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// The human plays whichever marker the engine does not.
    pub fn new(
        engine: ConnectFourEngine,
        human: Box<dyn Player>,
        delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            engine,
            human,
            delay,
            event_tx,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Marker played by the human.
    pub fn human_mark(&self) -> Mark {
        self.engine.opponent().opponent()
    }

    /// Current engine state.
    pub fn engine(&self) -> &ConnectFourEngine {
        &self.engine
    }

    /// Runs until the human quits, then returns the session results.
    #[instrument(skip(self), fields(human = %self.human.name()))]
    pub async fn run(&mut self) -> Result<Scoreboard> {
        info!("Starting game orchestration");
        self.send_board()?;

        loop {
            if self.engine.is_active() && self.engine.to_move() == self.engine.opponent() {
                self.play_opponent().await?;
                continue;
            }

            debug!("Waiting for human action");
            let action = self.human.next_action(&self.engine).await?;
            match action {
                Action::Drop(column) => self.play_human(column)?,
                Action::Undo => self.undo()?,
                Action::NewGame => self.new_game()?,
                Action::Unrecognized(input) => {
                    self.event_tx.send(GameEvent::Rejected(format!(
                        "Unrecognized input '{}': type 1-7, u, n or q",
                        input
                    )))?;
                }
                Action::Quit => {
                    self.scoreboard.record(self.engine.outcome());
                    info!(score = %self.scoreboard, "Session finished");
                    return Ok(self.scoreboard);
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn play_human(&mut self, column: usize) -> Result<()> {
        let mark = self.human_mark();
        match self.engine.drop(column, mark) {
            Ok(outcome) => self.after_drop(mark, column, outcome),
            Err(e) => {
                warn!(error = %e, "Human move rejected");
                self.event_tx.send(GameEvent::Rejected(e.to_string()))?;
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn play_opponent(&mut self) -> Result<()> {
        self.event_tx.send(GameEvent::OpponentThinking)?;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mark = self.engine.opponent();
        let Some(column) = self.engine.select_opponent_move() else {
            anyhow::bail!("Opponent found no playable column in an active game");
        };
        let outcome = self
            .engine
            .drop(column, mark)
            .map_err(|e| anyhow::anyhow!("Opponent move rejected: {}", e))?;
        self.after_drop(mark, column, outcome)
    }

    fn after_drop(&mut self, player: Mark, column: usize, outcome: GameOutcome) -> Result<()> {
        debug!(%player, column, %outcome, "Disc placed");
        self.event_tx.send(GameEvent::MoveMade { player, column })?;
        self.send_board()?;
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.event_tx.send(GameEvent::GameOver(outcome))?;
        }
        Ok(())
    }

    /// Rewinds until the human is due to move, or history runs out.
    #[instrument(skip(self))]
    fn undo(&mut self) -> Result<()> {
        let human = self.human_mark();
        let mut moves = 0;
        if self.engine.undo() {
            moves += 1;
            while self.engine.to_move() != human && self.engine.undo() {
                moves += 1;
            }
        }

        if moves == 0 {
            self.event_tx
                .send(GameEvent::Rejected("Nothing to undo".to_string()))?;
            return Ok(());
        }
        debug!(moves, "Moves undone");
        self.event_tx.send(GameEvent::Undone { moves })?;
        self.send_board()
    }

    #[instrument(skip(self))]
    fn new_game(&mut self) -> Result<()> {
        self.scoreboard.record(self.engine.outcome());
        self.engine.reset();
        info!(score = %self.scoreboard, "New game");
        self.event_tx.send(GameEvent::NewGame)?;
        self.send_board()
    }

    fn send_board(&self) -> Result<()> {
        self.event_tx.send(GameEvent::Board {
            grid: *self.engine.grid(),
            to_move: self.engine.to_move(),
            outcome: self.engine.outcome(),
        })?;
        Ok(())
    }
}
