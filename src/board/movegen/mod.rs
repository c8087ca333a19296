//! Pseudo-legal move generation.
//!
//! Generated actions obey piece movement and occupancy but may leave the
//! mover's king attacked; `State::legal_actions` filters those out. Castling
//! is generated from rights and empty squares only, the attacked-square
//! conditions belong to the legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Action, ActionList, Bitboard, Color, Piece, Square, State};

impl State {
    /// Pseudo-legal actions of the side to move, in generation order.
    #[must_use]
    pub fn pseudo_legal_actions(&self) -> ActionList {
        self.pseudo_legal_actions_for(self.turn)
    }

    /// Pseudo-legal actions of `color`: pawns, knights, bishops, rooks,
    /// queens, king; by ascending source square within a kind.
    pub(crate) fn pseudo_legal_actions_for(&self, color: Color) -> ActionList {
        let mut actions = ActionList::new();
        for piece in Piece::ALL {
            for from in self.pieces(color, piece).iter() {
                self.piece_actions(color, piece, from, &mut actions);
            }
        }
        actions
    }

    fn piece_actions(&self, color: Color, piece: Piece, from: Square, out: &mut ActionList) {
        match piece {
            Piece::Pawn => self.pawn_actions(color, from, out),
            Piece::Knight => self.knight_actions(color, from, out),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.slider_actions(color, piece, from, out);
            }
            Piece::King => self.king_actions(color, from, out),
        }
    }

    /// Push one action per target square, recording what stands there.
    fn push_targets(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
        targets: Bitboard,
        out: &mut ActionList,
    ) {
        for to in targets.iter() {
            let captured = self.piece_at(to).map(|(_, p)| p);
            out.push(Action::new(color, piece, from, to, captured));
        }
    }
}
