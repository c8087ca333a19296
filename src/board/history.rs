use std::collections::HashMap;

use super::{Bitboard, CastlingRights, Color, Square, State};

/// Which parts of a position make two occurrences "the same" for repetition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepetitionMode {
    /// Board, side to move, castling rights and en-passant target
    #[default]
    FullPosition,
    /// Piece placement only
    BoardOnly,
}

/// Repetition identity of a position under a `RepetitionMode`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PositionKey {
    pieces: [[Bitboard; 6]; 2],
    turn: Option<Color>,
    castling_rights: Option<CastlingRights>,
    en_passant: Option<Square>,
}

impl PositionKey {
    pub(crate) fn new(state: &State, mode: RepetitionMode) -> Self {
        match mode {
            RepetitionMode::FullPosition => PositionKey {
                pieces: state.pieces,
                turn: Some(state.turn),
                castling_rights: Some(state.castling_rights),
                en_passant: state.en_passant,
            },
            RepetitionMode::BoardOnly => PositionKey {
                pieces: state.pieces,
                turn: None,
                castling_rights: None,
                en_passant: None,
            },
        }
    }
}

/// Occurrence counts of the positions reached in a game.
#[derive(Clone, Debug, Default)]
pub struct History {
    mode: RepetitionMode,
    counts: HashMap<PositionKey, u32>,
    len: usize,
}

impl History {
    #[must_use]
    pub fn new(mode: RepetitionMode) -> Self {
        History {
            mode,
            counts: HashMap::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> RepetitionMode {
        self.mode
    }

    /// Record one occurrence of `state`, returning its new count.
    pub fn push(&mut self, state: &State) -> u32 {
        let count = self
            .counts
            .entry(PositionKey::new(state, self.mode))
            .or_insert(0);
        *count = count.saturating_add(1);
        self.len += 1;
        *count
    }

    /// Occurrences of `state` recorded so far.
    #[must_use]
    pub fn count(&self, state: &State) -> u32 {
        self.counts
            .get(&PositionKey::new(state, self.mode))
            .copied()
            .unwrap_or(0)
    }

    /// `state` has been recorded at least three times.
    #[must_use]
    pub fn is_threefold(&self, state: &State) -> bool {
        self.count(state) >= 3
    }

    /// Total number of recorded positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> FromIterator<&'a State> for History {
    fn from_iter<I: IntoIterator<Item = &'a State>>(iter: I) -> Self {
        let mut history = History::default();
        for state in iter {
            history.push(state);
        }
        history
    }
}
