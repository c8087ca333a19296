//! Chess rules environment with a fixed-depth alpha-beta player.
//!
//! The [`board`] module holds the position, legal action generation, result
//! flags, the text codec and the search. [`agent`] wraps policies behind one
//! trait and [`game`] plays two of them against each other.
//!
//! ```
//! use chess_env::agent::RandomAgent;
//! use chess_env::game::{simulate, GameConfig};
//! use chess_env::board::State;
//!
//! let mut white = RandomAgent::new(1);
//! let mut black = RandomAgent::new(2);
//! let config = GameConfig { max_rounds: 20, ..Default::default() };
//! let record = simulate(State::new(), &mut white, &mut black, &config).unwrap();
//! assert!(record.actions.len() <= 20);
//! ```

pub mod agent;
pub mod board;
pub mod game;

pub use agent::{Agent, AgentError, AlphaBetaAgent, HumanAgent, RandomAgent};
pub use board::{
    Action, ActionList, AlphaBetaSearch, Color, History, Piece, ResultFlags, RulesError,
    SearchParams, Square, State,
};
pub use game::{simulate, GameConfig, GameError, GameRecord, Outcome};
