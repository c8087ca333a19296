use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Derived check, checkmate and draw indicators of a position.
///
/// Recomputed whenever a position is produced by `step` or reconstructed
/// from a record or builder; never set independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultFlags {
    pub white_check: bool,
    pub black_check: bool,
    pub white_checkmate: bool,
    pub black_checkmate: bool,
    /// Bare kings or stalemate. Repetition needs a `History` and is reported
    /// by `State::is_draw` instead.
    pub draw: bool,
}

impl ResultFlags {
    /// Flags in record order: white check, black check, white checkmate,
    /// black checkmate, draw.
    #[must_use]
    pub fn to_array(self) -> [bool; 5] {
        [
            self.white_check,
            self.black_check,
            self.white_checkmate,
            self.black_checkmate,
            self.draw,
        ]
    }

    /// Check flag for one color
    #[must_use]
    pub fn check(self, color: Color) -> bool {
        match color {
            Color::White => self.white_check,
            Color::Black => self.black_check,
        }
    }

    /// Checkmate flag for one color
    #[must_use]
    pub fn checkmate(self, color: Color) -> bool {
        match color {
            Color::White => self.white_checkmate,
            Color::Black => self.black_checkmate,
        }
    }
}

/// A chess position.
///
/// States are values: every transition produces a new `State` and leaves the
/// input untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) turn: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) flags: ResultFlags,
    pub(crate) ply: u32,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl State {
    /// The standard starting position, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut state = State::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            state.set_piece(Square(0, file), Color::White, *piece);
            state.set_piece(Square(7, file), Color::Black, *piece);
            state.set_piece(Square(1, file), Color::White, Piece::Pawn);
            state.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        state.castling_rights = CastlingRights::all();
        state
    }

    pub(crate) fn empty() -> Self {
        State {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            turn: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            flags: ResultFlags::default(),
            ply: 0,
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 &= !bit;
        self.occupied[c_idx].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    /// Remove whatever stands on `sq`, returning it.
    pub(crate) fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let found = self.piece_at(sq);
        if let Some((color, piece)) = found {
            self.remove_piece(sq, color, piece);
        }
        found
    }

    /// The piece standing on `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = Bitboard::from_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }
        let color = if self.occupied[Color::White.index()].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .iter()
            .find(|piece| self.pieces[color.index()][piece.index()].0 & bit != 0)
            .map(|&piece| (color, piece))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// The 64 cells indexed by `Square::index` (a1 = 0, h8 = 63).
    #[must_use]
    pub fn cells(&self) -> [Option<(Color, Piece)>; 64] {
        let mut cells = [None; 64];
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces[color.index()][piece.index()].iter() {
                    cells[sq.index()] = Some((color, piece));
                }
            }
        }
        cells
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square skipped by a pawn double push on the previous ply
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> ResultFlags {
        self.flags
    }

    /// Plies applied since this line of positions was created
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Squares holding `piece` of `color`
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Squares holding any piece of `color`
    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Squares holding any piece
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// Total number of pieces on the board, kings included
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.all_occupied.popcount()
    }

    /// Number of `piece` of `color` on the board
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> u32 {
        self.pieces(color, piece).popcount()
    }

    /// Square of the king of `color`; the lowest one if several are present.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).iter().next()
    }

    /// Only the two kings remain.
    #[must_use]
    pub fn is_bare_kings(&self) -> bool {
        self.piece_count() == 2
            && self.count(Color::White, Piece::King) == 1
            && self.count(Color::Black, Piece::King) == 1
    }
}

impl Default for State {
    fn default() -> Self {
        State::new()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let symbol = match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => piece.glyph(color),
                    None => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefgh")?;
        write!(f, "{} to move", self.turn)
    }
}
