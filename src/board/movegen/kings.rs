use super::super::attack_tables::{
    sliding_attacks, Slider, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::{Action, ActionList, Bitboard, CastleSide, Color, Piece, Square, State};

impl State {
    /// King steps, then castling kingside and queenside.
    ///
    /// Castling needs the right, the king on its home square, the rook on its
    /// corner and empty squares between them. Whether the king passes through
    /// an attacked square is decided by the legality filter.
    pub(crate) fn king_actions(&self, color: Color, from: Square, out: &mut ActionList) {
        let targets = Bitboard(KING_ATTACKS[from.index()]).and(self.occupancy(color).not());
        self.push_targets(color, Piece::King, from, targets, out);

        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }
        for side in CastleSide::BOTH {
            if self.castling_rights.has(color, side)
                && self.piece_at(side.rook_home(color)) == Some((color, Piece::Rook))
                && side
                    .between_files()
                    .iter()
                    .all(|&file| self.is_empty(Square(back_rank, file)))
            {
                out.push(Action::castle(color, side));
            }
        }
    }

    /// Returns true if any piece of `attacker` attacks `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let target_idx = square.index();
        let pieces = &self.pieces[attacker.index()];

        // A pawn of `attacker` hits `square` exactly when a pawn of the other
        // color on `square` would hit it back.
        let pawn_sources = PAWN_ATTACKS[attacker.opponent().index()][target_idx];
        if pieces[Piece::Pawn.index()].0 & pawn_sources != 0 {
            return true;
        }
        if pieces[Piece::Knight.index()].0 & KNIGHT_ATTACKS[target_idx] != 0 {
            return true;
        }
        if pieces[Piece::King.index()].0 & KING_ATTACKS[target_idx] != 0 {
            return true;
        }

        let queens = pieces[Piece::Queen.index()].0;
        let rook_like = pieces[Piece::Rook.index()].0 | queens;
        let bishop_like = pieces[Piece::Bishop.index()].0 | queens;
        let blockers = self.all_occupied;

        if sliding_attacks(Slider::Rook, square, blockers).0 & rook_like != 0 {
            return true;
        }
        sliding_attacks(Slider::Bishop, square, blockers).0 & bishop_like != 0
    }
}
