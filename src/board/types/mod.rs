//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit board representation
//! - `Action` and `ActionList` - ply transitions
//! - `CastlingRights` and `CastleSide` - castling state

mod action;
mod bitboard;
mod castling;
mod piece;
mod square;

pub use action::{Action, ActionList};
pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
