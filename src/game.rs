//! Game loop between two agents.

use std::fmt;

use log::{debug, trace};

use crate::agent::{Agent, AgentError};
use crate::board::{Action, Color, History, RepetitionMode, RulesError, State};

/// Default round budget of a simulated game.
pub const MAX_ROUNDS: usize = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Plies played before the game is abandoned as unfinished
    pub max_rounds: usize,
    /// Granularity of threefold-repetition detection
    pub repetition: RepetitionMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_rounds: MAX_ROUNDS,
            repetition: RepetitionMode::default(),
        }
    }
}

/// Why a game ended in a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    BareKings,
    Stalemate,
    Repetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
    /// Round budget exhausted
    Unfinished,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins => write!(f, "White won"),
            Outcome::BlackWins => write!(f, "Black won"),
            Outcome::Draw(DrawReason::BareKings) => write!(f, "Draw (bare kings)"),
            Outcome::Draw(DrawReason::Stalemate) => write!(f, "Draw (stalemate)"),
            Outcome::Draw(DrawReason::Repetition) => write!(f, "Draw (threefold repetition)"),
            Outcome::Unfinished => write!(f, "Unfinished"),
        }
    }
}

/// Every position and action of a game. `states` holds one more entry than
/// `actions`: the start position comes first.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub states: Vec<State>,
    pub actions: Vec<Action>,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Position the game ended in
    #[must_use]
    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }
}

#[derive(Debug)]
pub enum GameError {
    Rules(RulesError),
    Agent(AgentError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Rules(err) => write!(f, "Rules error: {err}"),
            GameError::Agent(err) => write!(f, "Agent error: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Rules(err) => Some(err),
            GameError::Agent(err) => Some(err),
        }
    }
}

impl From<RulesError> for GameError {
    fn from(err: RulesError) -> Self {
        GameError::Rules(err)
    }
}

impl From<AgentError> for GameError {
    fn from(err: AgentError) -> Self {
        GameError::Agent(err)
    }
}

fn outcome_of(state: &State, history: &History) -> Option<Outcome> {
    let flags = state.flags();
    if flags.white_checkmate {
        Some(Outcome::BlackWins)
    } else if flags.black_checkmate {
        Some(Outcome::WhiteWins)
    } else if state.is_bare_kings() {
        Some(Outcome::Draw(DrawReason::BareKings))
    } else if flags.draw {
        Some(Outcome::Draw(DrawReason::Stalemate))
    } else if history.is_threefold(state) {
        Some(Outcome::Draw(DrawReason::Repetition))
    } else {
        None
    }
}

/// Play `white` against `black` from `start` until checkmate, a draw or the
/// round budget runs out.
pub fn simulate(
    start: State,
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    config: &GameConfig,
) -> Result<GameRecord, GameError> {
    start.validate_kings()?;
    let mut state = start;
    // Decoded positions carry cleared flags
    state.flags = state.compute_flags();
    let mut history = History::new(config.repetition);
    history.push(&state);

    let mut states = vec![state.clone()];
    let mut actions = Vec::new();
    let mut outcome = outcome_of(&state, &history).unwrap_or(Outcome::Unfinished);

    if outcome == Outcome::Unfinished {
        for round in 0..config.max_rounds {
            let agent: &mut dyn Agent = match state.turn() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let action = agent.policy(&state)?;
            trace!("round {}: {action}", round + 1);
            state = state.step(&action)?;
            history.push(&state);
            actions.push(action);
            states.push(state.clone());

            if let Some(end) = outcome_of(&state, &history) {
                outcome = end;
                break;
            }
        }
    }

    debug!("game over after {} plies: {outcome}", actions.len());
    Ok(GameRecord {
        states,
        actions,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AlphaBetaAgent, RandomAgent};
    use crate::board::{Piece, SearchParams, Square, StateBuilder};

    #[test]
    fn test_random_game_terminates() {
        let mut white = RandomAgent::new(1);
        let mut black = RandomAgent::new(2);
        let config = GameConfig {
            max_rounds: 300,
            ..Default::default()
        };
        let record = simulate(State::new(), &mut white, &mut black, &config).unwrap();
        assert_eq!(record.states.len(), record.actions.len() + 1);
        assert!(record.actions.len() <= 300);
        if record.outcome == Outcome::Unfinished {
            assert_eq!(record.actions.len(), 300);
        }
    }

    #[test]
    fn test_states_follow_actions() {
        let mut white = RandomAgent::new(5);
        let mut black = RandomAgent::new(6);
        let config = GameConfig {
            max_rounds: 40,
            ..Default::default()
        };
        let record = simulate(State::new(), &mut white, &mut black, &config).unwrap();
        for (i, action) in record.actions.iter().enumerate() {
            let next = record.states[i].step(action).unwrap();
            assert_eq!(next, record.states[i + 1]);
        }
    }

    #[test]
    fn test_alpha_beta_mates_in_one() {
        let start = StateBuilder::new()
            .piece(Square(0, 6), Color::White, Piece::King)
            .piece(Square(0, 0), Color::White, Piece::Rook)
            .piece(Square(7, 6), Color::Black, Piece::King)
            .piece(Square(6, 5), Color::Black, Piece::Pawn)
            .piece(Square(6, 6), Color::Black, Piece::Pawn)
            .piece(Square(6, 7), Color::Black, Piece::Pawn)
            .build()
            .unwrap();
        let mut white = AlphaBetaAgent::new(SearchParams::with_depth(2));
        let mut black = RandomAgent::new(0);
        let record = simulate(start, &mut white, &mut black, &GameConfig::default()).unwrap();
        assert_eq!(record.outcome, Outcome::WhiteWins);
        assert_eq!(record.actions.len(), 1);
    }

    #[test]
    fn test_bare_kings_start_is_draw() {
        let start = StateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .build()
            .unwrap();
        let mut white = RandomAgent::new(0);
        let mut black = RandomAgent::new(0);
        let record = simulate(start, &mut white, &mut black, &GameConfig::default()).unwrap();
        assert_eq!(record.outcome, Outcome::Draw(DrawReason::BareKings));
        assert!(record.actions.is_empty());
    }

    #[test]
    fn test_invalid_start_rejected() {
        let start = crate::board::decode(&" ".repeat(64)).unwrap();
        let mut white = RandomAgent::new(0);
        let mut black = RandomAgent::new(0);
        let result = simulate(start, &mut white, &mut black, &GameConfig::default());
        assert!(matches!(result, Err(GameError::Rules(_))));
    }

    #[test]
    fn test_zero_rounds_unfinished() {
        let mut white = RandomAgent::new(0);
        let mut black = RandomAgent::new(0);
        let config = GameConfig {
            max_rounds: 0,
            ..Default::default()
        };
        let record = simulate(State::new(), &mut white, &mut black, &config).unwrap();
        assert_eq!(record.outcome, Outcome::Unfinished);
        assert_eq!(record.states.len(), 1);
    }
}
