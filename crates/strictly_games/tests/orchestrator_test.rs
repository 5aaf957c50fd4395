//! Tests for the turn loop, driven by scripted keyboard input.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_connect_four::{ConnectFourEngine, GameOutcome, Grid, Player as Mark};
use strictly_games::{GameEvent, HumanPlayer, Orchestrator, Scoreboard};
use tokio::sync::mpsc;

async fn run_script(
    engine: ConnectFourEngine,
    script: &'static str,
) -> (Scoreboard, Vec<GameEvent>, Grid) {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let human = HumanPlayer::new("Tester", script.as_bytes());
    let mut orchestrator = Orchestrator::new(engine, Box::new(human), Duration::ZERO, event_tx);

    let scoreboard = orchestrator.run().await.expect("Session runs to completion");
    let grid = *orchestrator.engine().grid();
    drop(orchestrator);

    let mut events = Vec::new();
    while let Some(event) = event_rx.recv().await {
        events.push(event);
    }
    (scoreboard, events, grid)
}

fn position(text: &str, to_move: Mark) -> ConnectFourEngine {
    let grid: Grid = text.parse().expect("Valid grid text");
    ConnectFourEngine::from_position(grid, to_move, StdRng::seed_from_u64(0))
        .expect("Valid position")
}

fn rejections(events: &[GameEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Rejected(reason) => Some(reason.as_str()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_quit_immediately() {
    let (scoreboard, events, grid) = run_script(ConnectFourEngine::seeded(1), "q\n").await;

    assert_eq!(scoreboard, Scoreboard::default());
    assert_eq!(grid, Grid::new());
    assert_eq!(
        events,
        vec![GameEvent::Board {
            grid: Grid::new(),
            to_move: Mark::Red,
            outcome: GameOutcome::Ongoing,
        }]
    );
}

#[tokio::test]
async fn test_opponent_answers_and_undo_rewinds_both() {
    let (_, events, grid) = run_script(ConnectFourEngine::seeded(1), "4\nu\nq\n").await;

    let moves: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .cloned()
        .collect();
    assert_eq!(
        moves,
        vec![
            GameEvent::MoveMade {
                player: Mark::Red,
                column: 3
            },
            GameEvent::MoveMade {
                player: Mark::Yellow,
                column: 3
            },
        ]
    );
    assert!(events.contains(&GameEvent::OpponentThinking));
    assert!(events.contains(&GameEvent::Undone { moves: 2 }));
    assert_eq!(grid, Grid::new());
}

#[tokio::test]
async fn test_bad_input_is_reported_and_ignored() {
    let (_, events, grid) = run_script(ConnectFourEngine::seeded(1), "9\nhello\nu\nq\n").await;

    let reasons = rejections(&events);
    assert_eq!(reasons.len(), 3);
    assert!(reasons[0].contains("out of range"));
    assert!(reasons[1].contains("hello"));
    assert_eq!(reasons[2], "Nothing to undo");
    assert_eq!(grid, Grid::new());
    assert!(!events.iter().any(|e| matches!(e, GameEvent::MoveMade { .. })));
}

#[tokio::test]
async fn test_opponent_moves_first_when_configured() {
    let engine = ConnectFourEngine::seeded(2).with_starting_player(Mark::Yellow);
    let (_, events, grid) = run_script(engine, "q\n").await;

    assert!(events.contains(&GameEvent::MoveMade {
        player: Mark::Yellow,
        column: 3
    }));
    assert_eq!(grid.disc_count(), 1);
}

#[tokio::test]
async fn test_human_win_counts_on_new_game() {
    let engine = position(
        "
        .......
        .......
        .......
        .......
        YYY....
        RRR....",
        Mark::Red,
    );
    let (scoreboard, events, grid) = run_script(engine, "4\nn\nq\n").await;

    assert!(events.contains(&GameEvent::GameOver(GameOutcome::Win(Mark::Red))));
    assert!(events.contains(&GameEvent::NewGame));
    assert_eq!(*scoreboard.red_wins(), 1);
    assert_eq!(scoreboard.games(), 1);
    assert_eq!(grid, Grid::new());
}

#[tokio::test]
async fn test_opponent_takes_win_and_blocks_further_drops() {
    let engine = position(
        "
        .......
        .......
        .......
        .......
        R......
        YYY...R",
        Mark::Red,
    );
    let (scoreboard, events, _) = run_script(engine, "7\n1\nq\n").await;

    assert!(events.contains(&GameEvent::MoveMade {
        player: Mark::Yellow,
        column: 3
    }));
    assert!(events.contains(&GameEvent::GameOver(GameOutcome::Win(Mark::Yellow))));
    assert_eq!(rejections(&events), vec!["Game is already over"]);
    assert_eq!(*scoreboard.yellow_wins(), 1);
    assert_eq!(scoreboard.games(), 1);
}

#[tokio::test]
async fn test_undo_after_loss_reopens_game() {
    let engine = position(
        "
        .......
        .......
        .......
        .......
        R......
        YYY...R",
        Mark::Red,
    );
    let (scoreboard, events, grid) = run_script(engine, "7\nu\nq\n").await;

    assert!(events.contains(&GameEvent::Undone { moves: 2 }));
    assert_eq!(grid.disc_count(), 5);
    assert_eq!(scoreboard, Scoreboard::default());
}

#[tokio::test]
async fn test_end_of_input_quits() {
    let (scoreboard, events, grid) = run_script(ConnectFourEngine::seeded(3), "4\n").await;

    assert_eq!(grid.disc_count(), 2);
    assert_eq!(scoreboard.games(), 0);
    assert!(matches!(events.last(), Some(GameEvent::Board { to_move: Mark::Red, .. })));
}
