//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minichess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! ```

pub use super::{
    best_move, search, Board, BoardBuilder, Color, FenError, Move, MoveError, MoveList,
    MoveParseError, Outcome, Piece, SearchConfig, SearchResult, Square, SquareError,
};
