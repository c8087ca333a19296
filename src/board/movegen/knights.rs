use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{ActionList, Bitboard, Color, Piece, Square, State};

impl State {
    pub(crate) fn knight_actions(&self, color: Color, from: Square, out: &mut ActionList) {
        let targets = Bitboard(KNIGHT_ATTACKS[from.index()]).and(self.occupancy(color).not());
        self.push_targets(color, Piece::Knight, from, targets, out);
    }
}
