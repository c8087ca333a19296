//! Applying actions to states.

use super::{Action, CastleSide, Color, Piece, RulesError, Square, State};

impl State {
    /// Board transition for `action` without validation or flag
    /// recomputation. The returned state has cleared flags.
    ///
    /// Used on actions produced by the move generator, where the moving piece
    /// is known to stand on its source square.
    pub(crate) fn make(&self, action: &Action) -> State {
        let mut next = self.clone();
        let color = action.color;
        let from = action.from;
        let to = action.to;

        let is_en_passant = action.piece == Piece::Pawn
            && from.file() != to.file()
            && Some(to) == self.en_passant
            && self.is_empty(to);

        next.remove_piece(from, color, action.piece);
        if is_en_passant {
            next.clear_square(action.en_passant_victim());
        } else {
            next.clear_square(to);
        }
        next.set_piece(to, color, action.promotion.unwrap_or(action.piece));

        if let Some(side) = action.castling {
            let rank = color.back_rank();
            let rook_from = side.rook_home(color);
            let rook_to = Square(rank, side.rook_to_file());
            if next.clear_square(rook_from).is_some() {
                next.set_piece(rook_to, color, Piece::Rook);
            }
        }

        if action.piece == Piece::King {
            next.castling_rights.remove_color(color);
        }
        revoke_rights_touching(&mut next, from);
        revoke_rights_touching(&mut next, to);

        next.en_passant = if action.is_double_pawn_push() {
            Some(Square((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };
        next.turn = self.turn.opponent();
        next.ply = self.ply.saturating_add(1);
        next.flags = Default::default();
        next
    }

    /// Apply `action` and return the successor position with recomputed
    /// result flags. `self` is left untouched.
    ///
    /// The action must move a piece of the side to move that stands on the
    /// action's source square; legality against `legal_actions` is the
    /// caller's responsibility.
    pub fn step(&self, action: &Action) -> Result<State, RulesError> {
        self.validate_kings()?;
        if action.color != self.turn {
            return Err(RulesError::WrongSideToMove {
                expected: self.turn,
            });
        }
        if self.piece_at(action.from) != Some((action.color, action.piece)) {
            return Err(RulesError::PieceMismatch {
                square: action.from,
            });
        }
        let mut next = self.make(action);
        next.flags = next.compute_flags();
        Ok(next)
    }
}

/// A king or rook leaving its home square, or a rook captured on its corner,
/// loses the matching right.
fn revoke_rights_touching(state: &mut State, sq: Square) {
    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if sq == side.rook_home(color) {
                state.castling_rights.remove(color, side);
            }
        }
    }
}
