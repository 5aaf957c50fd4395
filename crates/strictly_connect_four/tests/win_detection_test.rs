//! Tests for anchored four-in-a-row detection on every axis.

use strictly_connect_four::rules::{Axis, check_win, run_length, winning_axis};
use strictly_connect_four::{ConnectFourEngine, GameOutcome, Grid, Player};

fn grid(text: &str) -> Grid {
    text.parse().expect("Valid grid text")
}

/// Asserts that every cell in `cells` agrees on `expected`.
fn assert_all(g: &Grid, cells: &[(usize, usize)], expected: bool) {
    for &(row, col) in cells {
        assert_eq!(
            check_win(g, row, col),
            expected,
            "cell ({}, {}) in\n{}",
            row,
            col,
            g
        );
    }
}

#[test]
fn test_horizontal_three_four_five() {
    let three = grid(
        ".......
         .......
         .......
         .......
         YYY....
         RRR.Y..",
    );
    assert_all(&three, &[(5, 0), (5, 1), (5, 2), (4, 0), (4, 2)], false);

    let four = grid(
        ".......
         .......
         .......
         .......
         .YYY...
         .RRRR..",
    );
    assert_all(&four, &[(5, 1), (5, 2), (5, 3), (5, 4)], true);
    assert_eq!(winning_axis(&four, 5, 1), Some(Axis::Horizontal));

    let five = grid(
        ".......
         .......
         .......
         .......
         YYY.Y..
         RRRRR..",
    );
    assert_all(&five, &[(5, 0), (5, 2), (5, 4)], true);
    assert_eq!(run_length(&five, 5, 2, Axis::Horizontal), 5);
}

#[test]
fn test_vertical_three_four_five() {
    let three = grid(
        ".......
         .......
         .......
         ..R....
         ..R....
         ..RYYY.",
    );
    assert_all(&three, &[(3, 2), (4, 2), (5, 2)], false);

    let four = grid(
        ".......
         .......
         ..Y....
         ..Y....
         ..Y....
         .RYRR..",
    );
    assert_all(&four, &[(2, 2), (3, 2), (4, 2), (5, 2)], true);
    assert_eq!(winning_axis(&four, 2, 2), Some(Axis::Vertical));

    let five = grid(
        ".......
         ..Y....
         ..Y....
         ..Y....
         ..Y....
         RRYRR..",
    );
    assert_eq!(run_length(&five, 1, 2, Axis::Vertical), 5);
    assert_all(&five, &[(1, 2), (3, 2), (5, 2)], true);
}

#[test]
fn test_diagonal_three_four_five() {
    // Top-left to bottom-right
    let three = grid(
        ".......
         .......
         .......
         R......
         YR.....
         YYR....",
    );
    assert_all(&three, &[(3, 0), (4, 1), (5, 2)], false);

    let four = grid(
        ".......
         .......
         R......
         YR.....
         YYR....
         RYYR...",
    );
    assert_all(&four, &[(2, 0), (3, 1), (4, 2), (5, 3)], true);
    assert_eq!(winning_axis(&four, 3, 1), Some(Axis::Diagonal));

    let five = grid(
        ".......
         R......
         YR.....
         RYR....
         YRYR...
         RYRYR..",
    );
    assert_eq!(run_length(&five, 3, 2, Axis::Diagonal), 5);
    assert_all(&five, &[(1, 0), (3, 2), (5, 4)], true);
}

#[test]
fn test_anti_diagonal_three_four_five() {
    // Top-right to bottom-left
    let three = grid(
        ".......
         .......
         .......
         ......Y
         .....YR
         ....YRR",
    );
    assert_all(&three, &[(3, 6), (4, 5), (5, 4)], false);

    let four = grid(
        ".......
         .......
         ......Y
         .....YR
         ....YRR
         ...YRRY",
    );
    assert_all(&four, &[(2, 6), (3, 5), (4, 4), (5, 3)], true);
    assert_eq!(winning_axis(&four, 4, 4), Some(Axis::AntiDiagonal));

    let five = grid(
        ".......
         ......Y
         .....YR
         ....YRY
         ...YRYR
         ..YRYRR",
    );
    assert_eq!(run_length(&five, 3, 4, Axis::AntiDiagonal), 5);
    assert_all(&five, &[(1, 6), (3, 4), (5, 2)], true);
}

#[test]
fn test_broken_line_is_not_a_win() {
    let g = grid(
        ".......
         .......
         .......
         .......
         YYY.YY.
         RRYRRR.",
    );
    assert_all(&g, &[(5, 0), (5, 1), (5, 3), (5, 5)], false);
}

#[test]
fn test_engine_reports_diagonal_win_from_last_disc() {
    let mut engine = ConnectFourEngine::seeded(3);
    // Build a rising diagonal for Red ending at (2, 3)
    let moves = [
        (0, Player::Red),
        (1, Player::Yellow),
        (1, Player::Red),
        (2, Player::Yellow),
        (2, Player::Red),
        (3, Player::Yellow),
        (2, Player::Red),
        (3, Player::Yellow),
        (3, Player::Red),
        (6, Player::Yellow),
    ];
    for (col, player) in moves {
        assert_eq!(engine.drop(col, player), Ok(GameOutcome::Ongoing));
    }

    assert_eq!(engine.drop(3, Player::Red), Ok(GameOutcome::Win(Player::Red)));
    assert!(engine.check_win(2, 3));
    assert!(engine.check_win(5, 0));
    assert!(!engine.check_win(5, 1));
}
