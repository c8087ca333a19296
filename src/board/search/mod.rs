//! Fixed-depth alpha-beta search over material evaluation.
//!
//! Negamax formulation: every node scores the position for its side to move.
//! Move ordering is generation order. Each root action is searched with a
//! full window so that root values are exact and ties can be broken
//! deliberately.

mod params;
mod smp;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Action, RulesError, State};
pub use params::{SearchParams, TieBreak};

/// Score of a checkmated side to move, negated.
pub const MATE_SCORE: i32 = 1_000_000_000;

/// Bound wider than any reachable score.
const INFINITY: i32 = MATE_SCORE + 1;

/// Castling has no single destination; it ranks as if landing at this
/// scaled centre distance.
const CASTLING_CENTER_DISTANCE_X4: u32 = 40;

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen action
    pub best: Action,
    /// Its value for the side to move
    pub value: i32,
    /// Every legal root action with its exact value, in generation order
    pub root_values: Vec<(Action, i32)>,
    /// Positions visited below the root
    pub nodes: u64,
}

/// Alpha-beta searcher configured by `SearchParams`.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaSearch {
    params: SearchParams,
}

impl AlphaBetaSearch {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        AlphaBetaSearch { params }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Pick an action for the side to move.
    ///
    /// Returns `Ok(None)` when the side to move has no legal action. The
    /// position is validated once here, never inside the tree.
    pub fn search(&self, state: &State) -> Result<Option<SearchResult>, RulesError> {
        let actions = state.legal_actions()?;
        if actions.is_empty() {
            debug!("search: {} has no legal actions", state.turn());
            return Ok(None);
        }

        let depth = self.params.depth.max(1);
        let params = &self.params;
        let (root_values, nodes) = if params.threads > 1 && actions.len() > 1 {
            smp::search_root_parallel(state, actions.as_slice(), depth, params)
        } else {
            let mut nodes = 0;
            let root_values = actions
                .iter()
                .map(|action| (*action, root_value(state, action, depth, params, &mut nodes)))
                .collect();
            (root_values, nodes)
        };

        for (action, value) in &root_values {
            trace!("root {action}: {value}");
        }
        let Some((best, value)) = select_best(&root_values, self.params.tie_break) else {
            return Ok(None);
        };
        debug!(
            "search depth {depth}: {} actions, best {best} ({value}), {nodes} nodes",
            root_values.len()
        );
        Ok(Some(SearchResult {
            best,
            value,
            root_values,
            nodes,
        }))
    }
}

/// Exact value of `action` for the mover, searched `depth - 1` plies below.
pub(crate) fn root_value(
    state: &State,
    action: &Action,
    depth: u32,
    params: &SearchParams,
    nodes: &mut u64,
) -> i32 {
    let child = state.make(action);
    -negamax(&child, depth - 1, -INFINITY, INFINITY, params, nodes)
}

fn negamax(
    state: &State,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    params: &SearchParams,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return state.evaluate(state.turn, &params.piece_values);
    }

    let actions = state.legal_actions_for(state.turn);
    if actions.is_empty() {
        return if state.is_check(state.turn) {
            -MATE_SCORE
        } else {
            params.stalemate_value
        };
    }

    let mut best = -INFINITY;
    for action in &actions {
        let child = state.make(action);
        let score = -negamax(&child, depth - 1, -beta, -alpha, params, nodes);
        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }
    best
}

fn center_distance(action: &Action) -> u32 {
    if action.castling().is_some() {
        CASTLING_CENTER_DISTANCE_X4
    } else {
        action.to().center_distance_x4()
    }
}

/// Best-valued action, ties resolved by `tie_break`.
fn select_best(root_values: &[(Action, i32)], tie_break: TieBreak) -> Option<(Action, i32)> {
    let best_value = root_values.iter().map(|(_, value)| *value).max()?;
    let candidates: Vec<Action> = root_values
        .iter()
        .filter(|(_, value)| *value == best_value)
        .map(|(action, _)| *action)
        .collect();

    let chosen = match tie_break {
        TieBreak::CenterDistance => candidates.iter().min_by_key(|a| center_distance(a)).copied(),
        TieBreak::FirstFound => candidates.first().copied(),
        TieBreak::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            candidates.choose(&mut rng).copied()
        }
    };
    chosen.map(|action| (action, best_value))
}
