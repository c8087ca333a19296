use super::MATE_SCORE;
use crate::board::PieceValues;

/// How the root picks among actions sharing the best value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Destination closest to the board centre (squared Euclidean distance;
    /// castling counts as 10), first in generation order on equal distance
    #[default]
    CenterDistance,
    /// First in generation order
    FirstFound,
    /// Uniform among the best, reproducible from the seed
    Random { seed: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies to look ahead; 0 is treated as 1
    pub depth: u32,
    pub piece_values: PieceValues,
    pub tie_break: TieBreak,
    /// Worker threads for the root split; 1 searches on the calling thread
    pub threads: usize,
    /// Score of a side to move that is stalemated; by default as bad as mate
    pub stalemate_value: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 2,
            piece_values: PieceValues::default(),
            tie_break: TieBreak::default(),
            threads: 1,
            stalemate_value: -MATE_SCORE,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn stalemate_value(mut self, value: i32) -> Self {
        self.stalemate_value = value.clamp(-MATE_SCORE, MATE_SCORE);
        self
    }

    #[must_use]
    pub fn piece_values(mut self, piece_values: PieceValues) -> Self {
        self.piece_values = piece_values;
        self
    }
}
