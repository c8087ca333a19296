//! Attack tables for move generation.
//!
//! Sliding pieces use a direct occupancy-indexed table: for every origin
//! square the relevant blocker squares (its rays minus the board edge) are
//! enumerated, and every subset of them maps to the reachable squares. The
//! lookup gathers the occupancy bits under the mask into a dense index; no
//! magic multipliers are involved. Tables are built lazily on first use and
//! are read-only afterwards.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

mod reference;
mod tables;

pub use reference::sliding_attacks_slow;
pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

use super::{Bitboard, Square};

/// Sliding piece movement pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
    Rook,
    Bishop,
}

fn pop_lsb_u64(bb: &mut u64) -> usize {
    let idx = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    idx
}

const DIR_N: usize = 0;
const DIR_S: usize = 1;
const DIR_E: usize = 2;
const DIR_W: usize = 3;
const DIR_NE: usize = 4;
const DIR_NW: usize = 5;
const DIR_SE: usize = 6;
const DIR_SW: usize = 7;

const ROOK_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
const BISHOP_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];

/// Full rays from each square in each direction, origin excluded.
static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    let dirs = [
        (1, 0),   // N
        (-1, 0),  // S
        (0, 1),   // E
        (0, -1),  // W
        (1, 1),   // NE
        (1, -1),  // NW
        (-1, 1),  // SE
        (-1, -1), // SW
    ];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for (d, (dr, df)) in dirs.iter().enumerate() {
            let mut mask = 0u64;
            let mut nr = r + dr;
            let mut nf = f + df;
            while (0..8).contains(&nr) && (0..8).contains(&nf) {
                let idx = (nr as usize) * 8 + (nf as usize);
                mask |= 1u64 << idx;
                nr += dr;
                nf += df;
            }
            rays[d][sq] = mask;
        }
    }
    rays
});

/// Relevant blocker squares: a blocker on the last square of a ray never
/// changes the reach, so edge squares are trimmed.
fn trimmed_ray(dir: usize, sq: usize) -> u64 {
    let ray = RAYS[dir][sq];
    let rank_1 = Bitboard::RANK_1.0;
    let rank_8 = Bitboard::RANK_8.0;
    let file_a = Bitboard::FILE_A.0;
    let file_h = Bitboard::FILE_H.0;
    match dir {
        DIR_N => ray & !rank_8,
        DIR_S => ray & !rank_1,
        DIR_E => ray & !file_h,
        DIR_W => ray & !file_a,
        DIR_NE => ray & !rank_8 & !file_h,
        DIR_NW => ray & !rank_8 & !file_a,
        DIR_SE => ray & !rank_1 & !file_h,
        DIR_SW => ray & !rank_1 & !file_a,
        _ => ray,
    }
}

fn relevant_masks(dirs: [usize; 4]) -> [u64; 64] {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = dirs.iter().fold(0u64, |mask, &dir| mask | trimmed_ray(dir, sq));
    }
    masks
}

static ROOK_MASKS: Lazy<[u64; 64]> = Lazy::new(|| relevant_masks(ROOK_DIRS));

static BISHOP_MASKS: Lazy<[u64; 64]> = Lazy::new(|| relevant_masks(BISHOP_DIRS));

fn build_table(masks: &[u64; 64], dirs: [usize; 4]) -> Vec<Vec<u64>> {
    let mut tables = Vec::with_capacity(64);
    for sq in 0..64 {
        let mask = masks[sq];
        let bits = mask.count_ones() as usize;
        let size = 1usize << bits;
        let mut table = vec![0u64; size];
        for (index, slot) in table.iter_mut().enumerate() {
            let occ = occupancy_from_index(index, mask);
            *slot = gen_slider_attacks(sq, occ, dirs);
        }
        tables.push(table);
    }
    tables
}

static ROOK_ATTACKS: Lazy<Vec<Vec<u64>>> = Lazy::new(|| build_table(&ROOK_MASKS, ROOK_DIRS));

static BISHOP_ATTACKS: Lazy<Vec<Vec<u64>>> =
    Lazy::new(|| build_table(&BISHOP_MASKS, BISHOP_DIRS));

fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

fn nearest_blocker_idx(dir: usize, blockers: u64) -> usize {
    if is_increasing_dir(dir) {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    }
}

fn ray_attacks(from_idx: usize, dir: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][from_idx];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let blocker_idx = nearest_blocker_idx(dir, blockers);
    ray ^ RAYS[dir][blocker_idx]
}

/// The `index`-th subset of `mask`: bit k of `index` selects the k-th lowest
/// square of the mask.
fn occupancy_from_index(mut index: usize, mask: u64) -> u64 {
    let mut result = 0u64;
    let mut m = mask;
    while m != 0 {
        let sq = pop_lsb_u64(&mut m);
        if index & 1 != 0 {
            result |= 1u64 << sq;
        }
        index >>= 1;
    }
    result
}

/// Inverse of `occupancy_from_index` restricted to the mask.
fn index_from_occupancy(occ: u64, mask: u64) -> usize {
    let mut index = 0usize;
    let mut bit = 0usize;
    let mut m = mask;
    while m != 0 {
        let sq = pop_lsb_u64(&mut m);
        if occ & (1u64 << sq) != 0 {
            index |= 1usize << bit;
        }
        bit += 1;
    }
    index
}

fn gen_slider_attacks(from_idx: usize, occupancy: u64, dirs: [usize; 4]) -> u64 {
    dirs.iter()
        .fold(0u64, |attacks, &dir| attacks | ray_attacks(from_idx, dir, occupancy))
}

/// Reachable squares of a rook or bishop on `origin` given the occupancy
/// `blockers`. The first occupied square on each ray is included whatever
/// its color; callers mask out friendly pieces.
#[inline]
#[must_use]
pub fn sliding_attacks(kind: Slider, origin: Square, blockers: Bitboard) -> Bitboard {
    let from_idx = origin.index();
    let (masks, table) = match kind {
        Slider::Rook => (&*ROOK_MASKS, &*ROOK_ATTACKS),
        Slider::Bishop => (&*BISHOP_MASKS, &*BISHOP_ATTACKS),
    };
    let index = index_from_occupancy(blockers.0, masks[from_idx]);
    Bitboard(table[from_idx][index])
}

/// Queen reach: rook reach union bishop reach from the same origin.
#[inline]
#[must_use]
pub fn queen_attacks(origin: Square, blockers: Bitboard) -> Bitboard {
    sliding_attacks(Slider::Rook, origin, blockers)
        .or(sliding_attacks(Slider::Bishop, origin, blockers))
}

/// Force construction of every table. Lookups build them lazily anyway; this
/// moves the cost to a point of the caller's choosing.
pub fn init() {
    Lazy::force(&ROOK_ATTACKS);
    Lazy::force(&BISHOP_ATTACKS);
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
    Lazy::force(&PAWN_ATTACKS);
}
