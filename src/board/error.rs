//! Error types for board operations.

use std::fmt;

use super::{Color, Move, Outcome, Square};

/// A move was rejected by the transition function.
///
/// Every variant is an illegal-move condition: the position is left
/// untouched and the caller decides whether to re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    EmptySource { square: Square },
    /// The source piece does not belong to the side to move
    WrongSide { square: Square, expected: Color },
    /// The move is not among the generated moves for this position
    NotLegal { mv: Move },
    /// The game has already ended
    GameOver { outcome: Outcome },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "Illegal move: no piece on {square}")
            }
            MoveError::WrongSide { square, expected } => {
                write!(f, "Illegal move: piece on {square} does not belong to {expected}")
            }
            MoveError::NotLegal { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::GameOver { outcome } => {
                write!(f, "Illegal move: the game is over ({outcome})")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Draw clock field is not a number
    InvalidClock { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid draw clock '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for parsing the "B2 B3" move input format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Input is not two whitespace-separated squares
    InvalidFormat { input: String },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { input } => {
                write!(f, "Expected a move like 'B2 B3', found '{input}'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-4)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-4)
    ColOutOfBounds { col: usize },
    /// Invalid file/rank notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-4)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-4)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
