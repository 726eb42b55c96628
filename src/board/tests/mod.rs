//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation rules
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `draw.rs` - Outcome state machine and the no-capture draw clock
//! - `edge_cases.rs` - Checked transitions: validation, simulate, apply
//! - `eval.rs` - Material evaluation
//! - `fen.rs` - FEN parsing and formatting
//! - `search.rs` - Minimax, ordering and iterative deepening
//! - `perft.rs` - Move-tree node counts
//! - `proptest.rs` - Property-based tests

mod draw;
mod search;

use crate::board::{Board, Move, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn find_move(board: &Board, from: &str, to: &str) -> Move {
    let wanted = Move::new(sq(from), sq(to));
    for m in board.generate_moves().iter() {
        if *m == wanted {
            return *m;
        }
    }
    panic!("Expected move {wanted} not found");
}
