//! Tests verifying the minimax engine plays tic-tac-toe perfectly.
//!
//! Perfect play means never losing against any opponent, always exploiting
//! a decidable position, and drawing against another perfect player.

use noxo_engine::{Board, Outcome, Side};
use noxo_solver::Minimax;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn play_out(board: &mut Board, first: Side, mut pick: impl FnMut(&Board, Side) -> usize) -> Outcome {
    let mut to_move = first;
    while board.evaluate().is_in_progress() {
        let cell = pick(board, to_move);
        board.place(cell, to_move).unwrap();
        to_move = to_move.opponent();
    }
    board.evaluate()
}

#[test]
fn test_optimal_self_play_always_draws() {
    let minimax = Minimax::new();
    let mut board = Board::EMPTY;
    let outcome = play_out(&mut board, Side::X, |board, side| {
        minimax.best_move(board, side).unwrap()
    });
    assert_eq!(outcome, Outcome::Draw, "final board:\n{board}");
}

#[test]
fn test_self_play_draws_from_every_x_opening() {
    let minimax = Minimax::new();
    for opening in 0..9 {
        let mut board = Board::EMPTY;
        board.place(opening, Side::X).unwrap();
        let outcome = play_out(&mut board, Side::O, |board, side| {
            minimax.best_move(board, side).unwrap()
        });
        assert_eq!(
            outcome,
            Outcome::Draw,
            "opening {opening} should still draw, final board:\n{board}"
        );
    }
}

#[test]
fn test_never_loses_as_o_against_random_play() {
    let minimax = Minimax::new();

    for seed in 0..50 {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut board = Board::EMPTY;
        let outcome = play_out(&mut board, Side::X, |board, side| match side {
            Side::O => minimax.best_move(board, side).unwrap(),
            Side::X => {
                let choices: Vec<_> = board.empty_cells().collect();
                choices[rng.random_range(0..choices.len())]
            }
        });
        assert_ne!(
            outcome.winner(),
            Some(Side::X),
            "O lost to random play with seed {seed}, final board:\n{board}"
        );
    }
}

#[test]
fn test_never_loses_as_x_against_random_play() {
    let minimax = Minimax::new();

    for seed in 0..50 {
        let mut rng = Pcg64Mcg::seed_from_u64(1000 + seed);
        let mut board = Board::EMPTY;
        let outcome = play_out(&mut board, Side::X, |board, side| match side {
            Side::X => minimax.best_move(board, side).unwrap(),
            Side::O => {
                let choices: Vec<_> = board.empty_cells().collect();
                choices[rng.random_range(0..choices.len())]
            }
        });
        assert_ne!(
            outcome.winner(),
            Some(Side::O),
            "X lost to random play with seed {seed}, final board:\n{board}"
        );
    }
}

#[test]
fn test_center_opening_is_answered_with_a_corner() {
    let mut board = Board::EMPTY;
    board.place(4, Side::X).unwrap();

    let reply = Minimax::new().best_move(&board, Side::O).unwrap();
    assert!(
        [0, 2, 6, 8].contains(&reply),
        "expected a corner reply to the center opening, got {reply}"
    );
}

#[test]
fn test_finds_the_winning_cell() {
    // X . X / O O . / . . . — X to move wins at 1.
    let board = Board::from_ascii("X.X\nOO.\n...");
    assert_eq!(Minimax::new().best_move(&board, Side::X), Ok(1));
}

#[test]
fn test_blocks_the_winning_cell() {
    // X X . / O . . / . . . — O to move must block at 2.
    let board = Board::from_ascii("XX.\nO..\n...");
    assert_eq!(Minimax::new().best_move(&board, Side::O), Ok(2));
}

#[test]
fn test_best_move_is_deterministic() {
    let minimax = Minimax::new();
    let board = Board::from_ascii("X..\n.O.\n..X");
    let first = minimax.best_move(&board, Side::O);
    for _ in 0..10 {
        assert_eq!(minimax.best_move(&board, Side::O), first);
    }
}
