pub mod board;
pub mod game;
pub mod notation;

pub use board::{Board, Color, Move, Outcome, Piece, Square};
pub use game::{Game, GameConfig};
