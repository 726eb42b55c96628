//! Core MiniChess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - one of the 25 board squares
//! - `Bitboard` - 25-bit board set
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{piece_tag, Color, Piece};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};

pub(crate) use bitboard::{bit_for_square, pop_lsb};
pub(crate) use moves::ScoredMoveList;
