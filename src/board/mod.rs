//! Chess position representation and rules.
//!
//! Uses bitboards for move generation and attack detection. Supports the
//! full movement rules including castling, en passant and promotions.
//!
//! # Example
//! ```
//! use chess_env::board::State;
//!
//! let state = State::new();
//! let actions = state.legal_actions().unwrap();
//! println!("Starting position has {} legal actions", actions.len());
//! ```

pub mod attack_tables;
mod builder;
pub mod codec;
mod error;
mod eval;
mod history;
mod make;
mod movegen;
mod rules;
mod search;
mod state;
pub mod symmetry;
mod types;

#[cfg(test)]
mod tests;

pub use builder::StateBuilder;
pub use codec::{decode, encode, ActionRecord, StateRecord};
pub use error::{CodecError, RulesError, SquareError};
pub use eval::PieceValues;
pub use history::{History, RepetitionMode};
pub use search::{AlphaBetaSearch, SearchParams, SearchResult, TieBreak, MATE_SCORE};
pub use state::{ResultFlags, State};
pub use types::{
    Action, ActionList, Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
