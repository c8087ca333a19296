use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Action, ActionList, Bitboard, Color, Piece, Square, State, PROMOTION_PIECES};

impl State {
    /// Pushes, double pushes, captures, en passant and promotions of the pawn
    /// on `from`, by ascending destination.
    pub(crate) fn pawn_actions(&self, color: Color, from: Square, out: &mut ActionList) {
        let dir = color.pawn_direction();
        let enemy = self.occupancy(color.opponent());
        let attacks = Bitboard(PAWN_ATTACKS[color.index()][from.index()]);

        let mut targets = attacks.and(enemy);
        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                targets = targets.or(Bitboard::from_square(single));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = single.offset(dir, 0) {
                        if self.is_empty(double) {
                            targets = targets.or(Bitboard::from_square(double));
                        }
                    }
                }
            }
        }
        let ep_target = self
            .en_passant
            .filter(|&ep| attacks.contains(ep) && self.is_empty(ep))
            .filter(|&ep| {
                self.piece_at(Square(from.rank(), ep.file()))
                    == Some((color.opponent(), Piece::Pawn))
            });
        if let Some(ep) = ep_target {
            targets = targets.or(Bitboard::from_square(ep));
        }

        for to in targets.iter() {
            if Some(to) == ep_target {
                out.push(Action::en_passant(color, from, to));
                continue;
            }
            let captured = self.piece_at(to).map(|(_, p)| p);
            if to.rank() == color.pawn_promotion_rank() {
                for promo in PROMOTION_PIECES {
                    out.push(Action::promotion(color, from, to, promo, captured));
                }
            } else {
                out.push(Action::new(color, Piece::Pawn, from, to, captured));
            }
        }
    }
}
