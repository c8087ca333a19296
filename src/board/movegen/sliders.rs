use super::super::attack_tables::{queen_attacks, sliding_attacks, Slider};
use super::super::{ActionList, Color, Piece, Square, State};

impl State {
    /// Bishop, rook and queen actions from the attack table, minus squares
    /// held by friendly pieces.
    pub(crate) fn slider_actions(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
        out: &mut ActionList,
    ) {
        let blockers = self.all_occupied;
        let reach = match piece {
            Piece::Bishop => sliding_attacks(Slider::Bishop, from, blockers),
            Piece::Rook => sliding_attacks(Slider::Rook, from, blockers),
            _ => queen_attacks(from, blockers),
        };
        let targets = reach.and(self.occupancy(color).not());
        self.push_targets(color, piece, from, targets, out);
    }
}
