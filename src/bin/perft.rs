//! Perft binary to verify move generation.
//!
//! usage: perft [DEPTH] [FEN...]
use std::env;
use std::time::Instant;

use minichess::board::{Board, START_FEN};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let depth: usize = match args.first().map(|d| d.parse()) {
        None => 4,
        Some(Ok(d)) => d,
        Some(Err(_)) => {
            eprintln!("usage: perft [DEPTH] [FEN...]");
            return;
        }
    };
    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        START_FEN.to_string()
    };
    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("{board}");
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = board.perft(d);
        println!("perft({d}) = {nodes} ({:?})", start.elapsed());
    }

    println!("\nDivide results for depth {depth}:");
    for (mv, nodes) in board.perft_divide(depth) {
        println!("{mv}: {nodes}");
    }
}
