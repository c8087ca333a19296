//! Slow sliding-attack reference used to validate the lookup tables.

use super::Slider;
use crate::board::{Bitboard, Square};

const ROOK_STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_STEPS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray square by square, stopping at (and including) the first
/// occupied square. Must agree bit for bit with `sliding_attacks`.
#[must_use]
pub fn sliding_attacks_slow(kind: Slider, origin: Square, blockers: Bitboard) -> Bitboard {
    let steps = match kind {
        Slider::Rook => &ROOK_STEPS,
        Slider::Bishop => &BISHOP_STEPS,
    };
    let mut reach = Bitboard::EMPTY;
    for &(dr, df) in steps {
        let mut current = origin;
        while let Some(next) = current.offset(dr, df) {
            reach = reach.or(Bitboard::from_square(next));
            if blockers.contains(next) {
                break;
            }
            current = next;
        }
    }
    reach
}
