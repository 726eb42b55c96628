use serde::Deserialize;

use minichess::board::{search_depth, Board, Move};

#[derive(Deserialize)]
struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

#[derive(Deserialize)]
struct Puzzle {
    name: String,
    fen: String,
    depth: u32,
    #[serde(default)]
    best: Option<String>,
    #[serde(default)]
    avoid: Option<String>,
}

fn parse(mv: &str) -> Move {
    mv.parse().expect("puzzle move")
}

#[test]
fn tactical_puzzle_suite() {
    let data = include_str!("data/puzzles.json");
    let set: PuzzleSet = serde_json::from_str(data).expect("invalid puzzles.json");
    assert!(!set.puzzles.is_empty());

    for puzzle in &set.puzzles {
        let board = Board::try_from_fen(&puzzle.fen).expect("invalid puzzle fen");
        let result = search_depth(&board, board.side_to_move(), puzzle.depth);
        let found = result.best_move.expect("puzzle position has moves");

        assert!(
            board.is_legal_move(found),
            "{}: search returned illegal move {found}",
            puzzle.name
        );
        if let Some(best) = &puzzle.best {
            assert_eq!(found, parse(best), "{}: wrong move", puzzle.name);
        }
        if let Some(avoid) = &puzzle.avoid {
            assert_ne!(found, parse(avoid), "{}: fell for {avoid}", puzzle.name);
        }
    }
}
