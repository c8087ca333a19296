//! Players that choose an action for a position.

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Action, AlphaBetaSearch, RulesError, SearchParams, State};

/// Failure to produce an action.
#[derive(Debug)]
pub enum AgentError {
    /// The side to move has no legal action
    NoLegalActions,
    /// Input did not name one of the offered actions
    InvalidSelection { input: String },
    /// Reading the selection or writing the prompt failed
    Io(io::Error),
    /// The position itself is invalid
    Rules(RulesError),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::NoLegalActions => write!(f, "No legal actions available"),
            AgentError::InvalidSelection { input } => {
                write!(f, "Invalid selection '{input}'")
            }
            AgentError::Io(err) => write!(f, "I/O error: {err}"),
            AgentError::Rules(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::Io(err) => Some(err),
            AgentError::Rules(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AgentError {
    fn from(err: io::Error) -> Self {
        AgentError::Io(err)
    }
}

impl From<RulesError> for AgentError {
    fn from(err: RulesError) -> Self {
        AgentError::Rules(err)
    }
}

/// Something that picks an action for the side to move.
pub trait Agent {
    fn policy(&mut self, state: &State) -> Result<Action, AgentError>;
}

/// Uniform choice among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    seed: u64,
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent::new(42)
    }
}

impl Agent for RandomAgent {
    fn policy(&mut self, state: &State) -> Result<Action, AgentError> {
        let actions = state.legal_actions()?;
        actions
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::NoLegalActions)
    }
}

/// Plays the action chosen by a fixed-depth alpha-beta search.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaAgent {
    search: AlphaBetaSearch,
}

impl AlphaBetaAgent {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        AlphaBetaAgent {
            search: AlphaBetaSearch::new(params),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        self.search.params()
    }
}

impl Agent for AlphaBetaAgent {
    fn policy(&mut self, state: &State) -> Result<Action, AgentError> {
        self.search
            .search(state)?
            .map(|result| result.best)
            .ok_or(AgentError::NoLegalActions)
    }
}

/// Shows the numbered legal actions on `output` and reads the chosen number
/// from `input`. A bad answer is an `InvalidSelection`; the caller may ask
/// again.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl HumanAgent<io::StdinLock<'static>, io::Stdout> {
    /// Agent reading from stdin and writing to stdout.
    #[must_use]
    pub fn stdio() -> Self {
        HumanAgent::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn policy(&mut self, state: &State) -> Result<Action, AgentError> {
        let actions = state.legal_actions()?;
        if actions.is_empty() {
            return Err(AgentError::NoLegalActions);
        }

        writeln!(self.output, "{state}")?;
        writeln!(self.output)?;
        for (idx, action) in actions.iter().enumerate() {
            writeln!(self.output, "{idx:>3}: {action}")?;
        }
        write!(self.output, "\nSelect action : ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AgentError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an action was selected",
            )));
        }
        let answer = line.trim();
        answer
            .parse::<usize>()
            .ok()
            .and_then(|idx| actions.get(idx))
            .ok_or_else(|| AgentError::InvalidSelection {
                input: answer.to_string(),
            })
    }
}
