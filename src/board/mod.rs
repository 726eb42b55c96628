//! MiniChess board representation and game logic.
//!
//! The 5x5 board is stored as 25-bit bitboards. There is no check
//! detection: the game ends when a king is captured, or in a draw after
//! [`DRAW_CLOCK_LIMIT`] moves without a capture.
//!
//! # Example
//! ```
//! use minichess::board::{Board, Color, Outcome};
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 13);
//!
//! let mv = "B2 B3".parse().unwrap();
//! let next = board.apply_move(mv).unwrap();
//! assert_eq!(next.board.side_to_move(), Color::Black);
//! assert_eq!(next.outcome, Outcome::InProgress);
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod outcome;
pub mod prelude;
mod search;
mod state;
mod transition;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use outcome::{Outcome, DRAW_CLOCK_LIMIT};
pub use state::{initial_position, Board, UnmakeInfo};
pub use transition::{apply_move, MoveRecord, Transition};
pub use types::{
    piece_tag, Bitboard, BitboardIter, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
    BOARD_SIZE, NUM_SQUARES,
};

// Rules and evaluation as free functions
pub use eval::evaluate;
pub use movegen::legal_moves;

// Public API - search functions and configuration
pub use search::{
    best_move, search, search_depth, SearchConfig, SearchContext, SearchInfoCallback,
    SearchIterationInfo, SearchResult, MAX_SEARCH_DEPTH, SAFETY_MARGIN_MS, SCORE_INFINITY,
};

pub(crate) use types::{bit_for_square, pop_lsb, ScoredMoveList};
