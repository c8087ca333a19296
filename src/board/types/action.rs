//! Action (move) type and action list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::castling::{CastleSide, CastlingRights};
use super::piece::{Color, Piece};
use super::square::Square;

/// One ply transition.
///
/// Identity is the moving piece, its source and destination squares, the
/// castling side and the promotion kind. The en-passant flag and the captured
/// kind are bookkeeping filled in by the move generator and do not take part
/// in equality or hashing.
#[derive(Clone, Copy)]
pub struct Action {
    pub(crate) color: Color,
    pub(crate) piece: Piece,
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) castling: Option<CastleSide>,
    pub(crate) promotion: Option<Piece>,
    pub(crate) en_passant: bool,
    pub(crate) captured: Option<Piece>,
}

impl Action {
    /// A plain move or capture; `captured` is what stands on `to`.
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    ) -> Self {
        Action {
            color,
            piece,
            from,
            to,
            castling: None,
            promotion: None,
            en_passant: false,
            captured,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn promotion(
        color: Color,
        from: Square,
        to: Square,
        promotion: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Action {
            color,
            piece: Piece::Pawn,
            from,
            to,
            castling: None,
            promotion: Some(promotion),
            en_passant: false,
            captured,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn en_passant(color: Color, from: Square, to: Square) -> Self {
        Action {
            color,
            piece: Piece::Pawn,
            from,
            to,
            castling: None,
            promotion: None,
            en_passant: true,
            captured: Some(Piece::Pawn),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn castle(color: Color, side: CastleSide) -> Self {
        let rank = color.back_rank();
        Action {
            color,
            piece: Piece::King,
            from: Square(rank, 4),
            to: Square(rank, side.king_to_file()),
            castling: Some(side),
            promotion: None,
            en_passant: false,
            captured: None,
        }
    }

    /// Color of the moving piece
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Kind of the moving piece
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Destination square (the king's destination for castling)
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Castling side, if this action castles
    #[inline]
    #[must_use]
    pub const fn castling(&self) -> Option<CastleSide> {
        self.castling
    }

    /// The single castling right this action exercises, if any
    #[must_use]
    pub fn castling_right(&self) -> Option<CastlingRights> {
        self.castling.map(|side| {
            let mut rights = CastlingRights::none();
            rights.set(self.color, side);
            rights
        })
    }

    /// Promotion kind, if this is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn promotion_piece(&self) -> Option<Piece> {
        self.promotion
    }

    /// Returns true if this action is an en-passant capture
    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    /// Kind of the captured piece, if any (a pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if this action captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this is a pawn advancing two squares
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        matches!(self.piece, Piece::Pawn) && self.from.0.abs_diff(self.to.0) == 2
    }

    /// The square of the pawn removed by an en-passant capture
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant_victim(&self) -> Square {
        Square(self.from.0, self.to.1)
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.piece == other.piece
            && self.from == other.from
            && self.to == other.to
            && self.castling == other.castling
            && self.promotion == other.promotion
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.piece.hash(state);
        self.from.hash(state);
        self.to.hash(state);
        self.castling.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({} {}{}", self.piece.glyph(self.color), self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.glyph(self.color))?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.glyph(self.color.opponent()))?;
        }
        if let Some(side) = self.castling {
            write!(f, " castle {side:?}")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.piece.glyph(self.color);
        match self.castling {
            Some(CastleSide::Kingside) => return write!(f, "{glyph} castle kingside"),
            Some(CastleSide::Queenside) => return write!(f, "{glyph} castle queenside"),
            None => {}
        }
        write!(f, "{glyph} {} -> {}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, " promote to {}", promo.glyph(self.color))?;
        }
        if self.en_passant {
            write!(f, " en passant")?;
        }
        Ok(())
    }
}

/// Typical number of pseudo-legal actions; the list grows past it if needed.
const ACTION_LIST_CAPACITY: usize = 64;

/// List of actions in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    pub(crate) fn new() -> Self {
        ActionList {
            actions: Vec::with_capacity(ACTION_LIST_CAPACITY),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Action> {
        self.actions.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Action> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    /// Number of actions per moving piece kind, indexed by `Piece::index`.
    #[must_use]
    pub fn counts_by_piece(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for action in &self.actions {
            counts[action.piece.index()] += 1;
        }
        counts
    }

    pub(crate) fn retain<F: FnMut(&Action) -> bool>(&mut self, f: F) {
        self.actions.retain(f);
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for ActionList {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl Index<usize> for ActionList {
    type Output = Action;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.actions[idx]
    }
}
