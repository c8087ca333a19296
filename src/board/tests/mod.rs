//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `checkmate.rs` - Mating patterns and their color-mirrored versions
//! - `draw.rs` - Bare kings, stalemate and repetition
//! - `edge_cases.rs` - En passant, castling, promotion and pins
//! - `symmetry.rs` - Board transforms and the action counts they preserve
//! - `proptest.rs` - Property-based tests

mod draw;
mod perft;

use crate::board::{codec, Action, CastleSide, Color, Piece, Square, State, StateBuilder};

/// Board text for the piece-placement field of a FEN string.
pub(super) fn board_text(placement: &str) -> String {
    let mut text = String::with_capacity(64);
    for symbol in placement.chars() {
        match symbol {
            '/' => {}
            '1'..='8' => {
                let run = symbol as usize - '0' as usize;
                text.extend(std::iter::repeat(codec::EMPTY_GLYPH).take(run));
            }
            _ => {
                let color = if symbol.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = match symbol.to_ascii_lowercase() {
                    'p' => Piece::Pawn,
                    'n' => Piece::Knight,
                    'b' => Piece::Bishop,
                    'r' => Piece::Rook,
                    'q' => Piece::Queen,
                    'k' => Piece::King,
                    other => panic!("bad placement symbol {other}"),
                };
                text.push(piece.glyph(color));
            }
        }
    }
    text
}

/// Position from a FEN placement, side to move (`w`/`b`), castling field
/// (`KQkq` or `-`) and en-passant field (`e3` or `-`).
pub(super) fn position(placement: &str, turn: &str, castling: &str, en_passant: &str) -> State {
    let board = codec::decode(&board_text(placement)).unwrap();
    let side = if turn == "w" { Color::White } else { Color::Black };
    let mut builder = StateBuilder::from_state(&board).side_to_move(side);
    for symbol in castling.chars() {
        builder = match symbol {
            'K' => builder.castle(Color::White, CastleSide::Kingside),
            'Q' => builder.castle(Color::White, CastleSide::Queenside),
            'k' => builder.castle(Color::Black, CastleSide::Kingside),
            'q' => builder.castle(Color::Black, CastleSide::Queenside),
            _ => builder,
        };
    }
    if en_passant != "-" {
        builder = builder.en_passant(Some(en_passant.parse().unwrap()));
    }
    builder.build().unwrap()
}

/// The first legal action moving from `from` to `to`.
pub(super) fn find(state: &State, from: &str, to: &str) -> Action {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    state
        .legal_actions()
        .unwrap()
        .into_iter()
        .find(|a| a.from() == from && a.to() == to)
        .unwrap_or_else(|| panic!("no legal action {from}{to}"))
}

/// Play a sequence of `from`-`to` moves.
pub(super) fn play(state: &State, moves: &[(&str, &str)]) -> State {
    moves.iter().fold(state.clone(), |current, (from, to)| {
        let action = find(&current, from, to);
        current.step(&action).unwrap()
    })
}
