//! Draw detection: bare kings, stalemate and threefold repetition.

use super::{play, position};
use crate::board::{CastleSide, Color, History, Piece, RepetitionMode, Square, State, StateBuilder};

#[test]
fn test_bare_kings_is_draw() {
    let state = position("8/8/3k4/8/8/3K4/8/8", "w", "-", "-");
    assert!(state.flags().draw);
    assert!(state.is_bare_kings());
    assert!(state.is_draw(&History::default()));
    assert!(!state.legal_actions().unwrap().is_empty());
}

#[test]
fn test_king_and_minor_is_not_draw() {
    let state = position("8/8/3k4/8/8/3KN3/8/8", "w", "-", "-");
    assert!(!state.flags().draw);
    assert!(!state.is_draw(&History::default()));
}

#[test]
fn test_capture_into_bare_kings() {
    // White king takes the last black piece
    let state = position("8/8/8/8/8/8/3n4/3K3k", "w", "-", "-");
    assert!(!state.flags().draw);
    let next = play(&state, &[("d1", "d2")]);
    assert!(next.flags().draw);
    assert!(next.is_bare_kings());
}

#[test]
fn test_stalemate_flags() {
    let state = position("k7/2Q5/2K5/8/8/8/8/8", "b", "-", "-");
    assert!(state.is_stalemate());
    assert!(state.flags().draw);
    assert!(!state.flags().black_check);
    assert!(!state.flags().black_checkmate);
    assert!(state.legal_actions().unwrap().is_empty());
}

#[test]
fn test_stalemate_by_step() {
    // Queen to h7 leaves b8 free; queen to c7 leaves nothing
    let state = position("k7/8/2K5/8/8/8/8/7Q", "w", "-", "-");
    let next = play(&state, &[("h1", "h7")]);
    assert!(!next.flags().draw);
    let stalemate = position("k7/8/2K5/8/8/6Q1/8/8", "w", "-", "-");
    let next = play(&stalemate, &[("g3", "c7")]);
    assert!(next.is_stalemate());
    assert!(next.flags().draw);
}

#[test]
fn test_side_not_to_move_without_actions_is_not_stalemate() {
    // Black would be stalemated but it is White's turn
    let state = position("k7/2Q5/2K5/8/8/8/8/8", "w", "-", "-");
    assert!(!state.is_stalemate());
    assert!(!state.flags().draw);
}

#[test]
fn test_threefold_by_knight_shuffle() {
    let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    let mut history = History::new(RepetitionMode::FullPosition);
    let mut state = State::new();
    history.push(&state);
    for round in 0..2 {
        for mv in shuffle {
            state = play(&state, &[mv]);
            history.push(&state);
        }
        assert_eq!(history.count(&state), round + 2);
    }
    assert!(history.is_threefold(&state));
    assert!(state.is_draw(&history));
    // The flag only covers bare kings and stalemate
    assert!(!state.flags().draw);
}

#[test]
fn test_lost_castling_rights_break_repetition() {
    let start = StateBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .piece(Square(7, 0), Color::Black, Piece::Rook)
        .castle(Color::White, CastleSide::Queenside)
        .castle(Color::Black, CastleSide::Queenside)
        .build()
        .unwrap();
    let walk = [("e1", "e2"), ("e8", "e7"), ("e2", "e1"), ("e7", "e8")];

    let mut full = History::new(RepetitionMode::FullPosition);
    let mut board_only = History::new(RepetitionMode::BoardOnly);
    full.push(&start);
    board_only.push(&start);
    let mut state = start.clone();
    for _ in 0..2 {
        for mv in walk {
            state = play(&state, &[mv]);
            full.push(&state);
            board_only.push(&state);
        }
    }

    // Same squares as the start but without castling rights
    assert_eq!(board_only.count(&start), 3);
    assert!(board_only.is_threefold(&state));
    assert_eq!(full.count(&start), 1);
    assert_eq!(full.count(&state), 2);
    assert!(!full.is_threefold(&state));
}

#[test]
fn test_history_from_states() {
    let a = State::new();
    let b = play(&a, &[("e2", "e4")]);
    let history: History = [&a, &b, &a].into_iter().collect();
    assert_eq!(history.len(), 3);
    assert_eq!(history.count(&a), 2);
    assert_eq!(history.count(&b), 1);
}
