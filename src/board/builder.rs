//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than decoding board text.
//!
//! # Example
//! ```
//! use chess_env::board::{Color, Piece, Square, StateBuilder};
//!
//! let state = StateBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.piece_count(), 3);
//! ```

use super::{CastleSide, CastlingRights, Color, Piece, RulesError, Square, State};

/// A fluent builder for constructing `State` positions.
#[derive(Clone, Debug)]
pub struct StateBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    ply: u32,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateBuilder {
    /// Create a builder for an empty board, White to move.
    #[must_use]
    pub fn new() -> Self {
        StateBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            ply: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_state(&State::new())
    }

    /// Create a builder holding everything `state` holds except its flags.
    #[must_use]
    pub fn from_state(state: &State) -> Self {
        let pieces = state
            .occupied()
            .iter()
            .filter_map(|sq| state.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .collect();
        StateBuilder {
            pieces,
            side_to_move: state.turn(),
            castling_rights: state.castling_rights(),
            en_passant: state.en_passant(),
            ply: state.ply(),
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub const fn castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Set or clear the en-passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant = target;
        self
    }

    #[must_use]
    pub const fn ply(mut self, ply: u32) -> Self {
        self.ply = ply;
        self
    }

    /// Build the position and compute its result flags.
    ///
    /// Fails on a square outside the board, and unless each color has
    /// exactly one king.
    pub fn build(self) -> Result<State, RulesError> {
        let squares = self.pieces.iter().map(|(sq, _, _)| *sq);
        if let Some(sq) = squares.chain(self.en_passant).find(|sq| !sq.is_on_board()) {
            return Err(RulesError::OffBoardSquare {
                rank: sq.rank(),
                file: sq.file(),
            });
        }

        let mut state = State::empty();
        for (square, color, piece) in self.pieces {
            state.set_piece(square, color, piece);
        }
        state.turn = self.side_to_move;
        state.castling_rights = self.castling_rights;
        state.en_passant = self.en_passant;
        state.ply = self.ply;
        state.validate_kings()?;
        state.flags = state.compute_flags();
        Ok(state)
    }
}
