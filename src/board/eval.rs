//! Static material evaluation.

use super::{Color, Piece, State};

/// Material weight of each piece kind, indexed by `Piece::index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceValues {
    values: [i32; 6],
}

impl PieceValues {
    /// Weights in `Piece::ALL` order: pawn, knight, bishop, rook, queen, king.
    #[must_use]
    pub const fn new(values: [i32; 6]) -> Self {
        PieceValues { values }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self, piece: Piece) -> i32 {
        self.values[piece.index()]
    }

    /// Change the weight of one kind.
    #[must_use]
    pub const fn with(mut self, piece: Piece, value: i32) -> Self {
        self.values[piece.index()] = value;
        self
    }
}

impl Default for PieceValues {
    /// Pawn 1, knight 3, bishop 3, rook 5, queen 9, king 1 000 000.
    fn default() -> Self {
        PieceValues::new([1, 3, 3, 5, 9, 1_000_000])
    }
}

impl State {
    /// Total material of `color`.
    #[must_use]
    pub fn material(&self, color: Color, values: &PieceValues) -> i32 {
        Piece::ALL
            .iter()
            .map(|&piece| values.value(piece) * self.count(color, piece) as i32)
            .sum()
    }

    /// Material of `color` minus material of its opponent.
    #[must_use]
    pub fn evaluate(&self, color: Color, values: &PieceValues) -> i32 {
        self.material(color, values) - self.material(color.opponent(), values)
    }
}
