//! Text and record encodings of positions and actions.
//!
//! Board text is 64 glyphs, row-major starting from Black's back rank: index
//! 0 is a8, index 7 is h8 and index 63 is h1. An empty square is a space;
//! white pieces are `♖♘♗♕♔♙` and black pieces `♜♞♝♛♚♟`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Action, CastlingRights, CodecError, Color, Piece, Square, State};

/// Glyph of an empty square
pub const EMPTY_GLYPH: char = ' ';

/// Board text of the standard starting position
pub const START_BOARD: &str = concat!(
    "♜♞♝♛♚♝♞♜",
    "♟♟♟♟♟♟♟♟",
    "        ",
    "        ",
    "        ",
    "        ",
    "♙♙♙♙♙♙♙♙",
    "♖♘♗♕♔♗♘♖",
);

/// Board square shown at position `idx` of board text.
#[inline]
#[must_use]
pub fn text_index_to_square(idx: usize) -> Option<Square> {
    (idx < 64).then(|| Square(7 - idx / 8, idx % 8))
}

/// Position of `sq` in board text.
#[inline]
#[must_use]
pub fn square_to_text_index(sq: Square) -> usize {
    (7 - sq.rank()) * 8 + sq.file()
}

/// Parse board text. The result has White to move, no castling rights, no
/// en-passant target and cleared flags.
pub fn decode(text: &str) -> Result<State, CodecError> {
    let symbols: Vec<char> = text.chars().collect();
    if symbols.len() != 64 {
        return Err(CodecError::InvalidLength { len: symbols.len() });
    }
    let mut state = State::empty();
    for (index, &symbol) in symbols.iter().enumerate() {
        if symbol == EMPTY_GLYPH {
            continue;
        }
        let (color, piece) =
            Piece::from_glyph(symbol).ok_or(CodecError::InvalidSymbol { index, symbol })?;
        state.set_piece(Square(7 - index / 8, index % 8), color, piece);
    }
    Ok(state)
}

/// Board text of `state`; `decode(&encode(s))` has the same board as `s`.
#[must_use]
pub fn encode(state: &State) -> String {
    (0..64)
        .map(|idx| {
            let sq = Square(7 - idx / 8, idx % 8);
            match state.piece_at(sq) {
                Some((color, piece)) => piece.glyph(color),
                None => EMPTY_GLYPH,
            }
        })
        .collect()
}

/// Flat, serializable form of a `State`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateRecord {
    pub board: String,
    pub white_to_move: bool,
    /// White kingside, white queenside, black kingside, black queenside
    pub castling: [bool; 4],
    /// `Square::index` of the en-passant target
    pub en_passant: Option<usize>,
    /// White check, black check, white checkmate, black checkmate, draw
    pub flags: [bool; 5],
    pub ply: u32,
}

impl State {
    #[must_use]
    pub fn to_record(&self) -> StateRecord {
        StateRecord {
            board: encode(self),
            white_to_move: self.turn == Color::White,
            castling: self.castling_rights.to_flags(),
            en_passant: self.en_passant.map(Square::index),
            flags: self.flags.to_array(),
            ply: self.ply,
        }
    }

    /// Rebuild a state from a record. The record's flags are ignored and
    /// recomputed from the position.
    pub fn from_record(record: &StateRecord) -> Result<State, CodecError> {
        let mut state = decode(&record.board)?;
        state.turn = if record.white_to_move {
            Color::White
        } else {
            Color::Black
        };
        state.castling_rights = CastlingRights::from_flags(record.castling);
        state.en_passant = record
            .en_passant
            .map(|index| Square::from_index(index).ok_or(CodecError::OffBoardSquare { index }))
            .transpose()?;
        state.ply = record.ply;
        state.flags = state.compute_flags();
        Ok(state)
    }
}

/// Flat, serializable form of an `Action`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionRecord {
    /// Glyph of the moving piece, which also gives its color
    pub piece: char,
    pub from: usize,
    pub to: usize,
    /// White kingside, white queenside, black kingside, black queenside
    pub castling: [bool; 4],
    /// Promotion kind: pawn, knight, bishop, rook, queen
    pub promotion: [bool; 5],
}

fn single_flag(flags: &[bool]) -> Result<Option<usize>, ()> {
    let mut set = flags.iter().enumerate().filter(|(_, f)| **f).map(|(i, _)| i);
    match (set.next(), set.next()) {
        (None, _) => Ok(None),
        (Some(i), None) => Ok(Some(i)),
        (Some(_), Some(_)) => Err(()),
    }
}

impl Action {
    #[must_use]
    pub fn to_record(&self) -> ActionRecord {
        let mut promotion = [false; 5];
        if let Some(piece) = self.promotion {
            promotion[piece.index()] = true;
        }
        ActionRecord {
            piece: self.piece.glyph(self.color),
            from: self.from.index(),
            to: self.to.index(),
            castling: self
                .castling_right()
                .map_or([false; 4], CastlingRights::to_flags),
            promotion,
        }
    }

    /// Rebuild an action from a record.
    ///
    /// Capture and en-passant bookkeeping is not part of the record; `step`
    /// derives both from the position it is applied to.
    pub fn from_record(record: &ActionRecord) -> Result<Action, CodecError> {
        let (color, piece) = Piece::from_glyph(record.piece).ok_or(CodecError::InvalidSymbol {
            index: 0,
            symbol: record.piece,
        })?;
        let from = Square::from_index(record.from)
            .ok_or(CodecError::OffBoardSquare { index: record.from })?;
        let to =
            Square::from_index(record.to).ok_or(CodecError::OffBoardSquare { index: record.to })?;

        let castling =
            single_flag(&record.castling).map_err(|()| CodecError::InvalidCastling)?;
        let promotion =
            single_flag(&record.promotion).map_err(|()| CodecError::InvalidPromotion)?;

        if let Some(i) = castling {
            let (castle_color, side) = CastlingRights::ORDER[i];
            let action = Action::castle(castle_color, side);
            if piece != Piece::King
                || color != castle_color
                || promotion.is_some()
                || action.from != from
                || action.to != to
            {
                return Err(CodecError::InvalidCastling);
            }
            return Ok(action);
        }

        match promotion {
            Some(i) => {
                let promo = Piece::from_index(i).ok_or(CodecError::InvalidPromotion)?;
                if promo == Piece::Pawn
                    || piece != Piece::Pawn
                    || to.rank() != color.pawn_promotion_rank()
                {
                    return Err(CodecError::InvalidPromotion);
                }
                Ok(Action::promotion(color, from, to, promo, None))
            }
            None => Ok(Action::new(color, piece, from, to, None)),
        }
    }
}
