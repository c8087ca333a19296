//! Error types for board, codec and rules operations.

use std::fmt;

use super::{Color, Square};

/// Malformed external input: board text, state records and action records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Board text must contain exactly 64 symbols
    InvalidLength { len: usize },
    /// Unrecognized symbol in board text or action record
    InvalidSymbol { index: usize, symbol: char },
    /// Square index outside 0..64
    OffBoardSquare { index: usize },
    /// More than one promotion flag, or a promotion to a pawn
    InvalidPromotion,
    /// More than one castling flag, or a castling flag that does not match the piece
    InvalidCastling,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidLength { len } => {
                write!(f, "Board must have 64 squares, found {len}")
            }
            CodecError::InvalidSymbol { index, symbol } => {
                write!(f, "Invalid symbol '{symbol}' at index {index}")
            }
            CodecError::OffBoardSquare { index } => {
                write!(f, "Square index {index} is off the board")
            }
            CodecError::InvalidPromotion => write!(f, "Invalid promotion flags"),
            CodecError::InvalidCastling => write!(f, "Invalid castling flags"),
        }
    }
}

impl std::error::Error for CodecError {}

/// A position or action the rules engine refuses to work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A color has no king on the board
    MissingKing { color: Color },
    /// A color has more than one king on the board
    TooManyKings { color: Color, count: u32 },
    /// The action's piece does not stand on its source square
    PieceMismatch { square: Square },
    /// The action moves a piece of the side not on move
    WrongSideToMove { expected: Color },
    /// A square given by rank and file lies outside the board
    OffBoardSquare { rank: usize, file: usize },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::MissingKing { color } => write!(f, "{color} has no king"),
            RulesError::TooManyKings { color, count } => {
                write!(f, "{color} has {count} kings, expected one")
            }
            RulesError::PieceMismatch { square } => {
                write!(f, "Action piece is not on {square}")
            }
            RulesError::WrongSideToMove { expected } => {
                write!(f, "It is {expected}'s turn")
            }
            RulesError::OffBoardSquare { rank, file } => {
                write!(f, "Square (rank {rank}, file {file}) is off the board")
            }
        }
    }
}

impl std::error::Error for RulesError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
