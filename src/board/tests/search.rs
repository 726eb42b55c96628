//! Search tests: minimax, ordering, iterative deepening and deadlines.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::sq;
use crate::board::search::move_order::order_moves;
use crate::board::{
    best_move, search, search_depth, Board, BoardBuilder, Color, Move, Piece, SearchConfig,
    SearchContext, MAX_SEARCH_DEPTH, SCORE_INFINITY,
};

fn mv(s: &str) -> Move {
    s.parse().expect("valid move")
}

// ============================================================================
// Fixed-depth search
// ============================================================================

#[test]
fn search_takes_the_king() {
    let board = Board::from_fen("k4/5/5/5/q3K b 0");
    let result = search_depth(&board, Color::Black, 3);
    assert_eq!(result.best_move, Some(mv("A1 E1")));
    assert_eq!(result.score, 999 + 9);
}

#[test]
fn search_wins_hanging_queen() {
    let board = Board::from_fen("k4/5/1q3/5/N3K w 0");
    let result = search_depth(&board, Color::White, 2);
    assert_eq!(result.best_move, Some(mv("A1 B3")));
    assert_eq!(result.score, 3);
}

#[test]
fn search_promotes() {
    let board = Board::from_fen("k4/2P2/5/5/4K w 0");
    let result = search_depth(&board, Color::White, 1);
    assert_eq!(result.best_move, Some(mv("C4 C5")));
    assert_eq!(result.score, 9);
}

#[test]
fn depth_two_avoids_defended_pawn() {
    // Qxc3 wins a pawn at depth 1 but b4xc3 recaptures the queen.
    let board = Board::from_fen("k4/1p3/2p2/5/2Q1K w 0");
    assert_eq!(search_depth(&board, Color::White, 1).best_move, Some(mv("C1 C3")));
    let deeper = search_depth(&board, Color::White, 2);
    assert_ne!(deeper.best_move, Some(mv("C1 C3")));
    assert_eq!(deeper.score, 7);
}

#[test]
fn initial_position_depth_scores() {
    let board = Board::new();
    let d1 = search_depth(&board, Color::White, 1);
    assert_eq!(d1.best_move, Some(mv("D1 D4")));
    assert_eq!(d1.score, 1);
    assert_eq!(d1.depth, 1);

    let d2 = search_depth(&board, Color::White, 2);
    assert_eq!(d2.score, -1);
    assert_eq!(d2.best_move, Some(mv("B2 B3")));
}

#[test]
fn fixed_depth_is_deterministic() {
    let board = Board::new();
    let a = search_depth(&board, Color::White, 4);
    let b = search_depth(&board, Color::White, 4);
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn minimax_direct_is_deterministic() {
    let board = Board::new();
    let mut first = board.clone();
    let mut second = board.clone();
    let a = SearchContext::new(&mut first, Color::White).minimax(
        3,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        true,
    );
    let b = SearchContext::new(&mut second, Color::White).minimax(
        3,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        true,
    );
    assert_eq!(a, b);
    assert_eq!(first, board);
}

#[test]
fn search_does_not_touch_caller_board() {
    let board = Board::new();
    let before = board.clone();
    let _ = search_depth(&board, Color::White, 3);
    assert_eq!(board, before);
}

#[test]
fn search_stops_when_tree_ends() {
    // Kings side by side: every line ends in a king capture by depth 2, so
    // deeper iterations are skipped.
    let board = Board::from_fen("Kk3/5/5/5/5 w 0");
    let result = search_depth(&board, Color::White, 20);
    assert_eq!(result.depth, 2);
    assert_eq!(result.best_move, Some(mv("A5 B5")));
    assert_eq!(result.score, 999);
}

// ============================================================================
// Root edge cases
// ============================================================================

#[test]
fn no_legal_moves_returns_none() {
    let board = BoardBuilder::new()
        .piece(sq("A5"), Color::White, Piece::King)
        .piece(sq("B5"), Color::White, Piece::Pawn)
        .piece(sq("A4"), Color::White, Piece::Pawn)
        .piece(sq("B4"), Color::White, Piece::Pawn)
        .piece(sq("E1"), Color::Black, Piece::King)
        .build();
    let result = search_depth(&board, Color::White, 3);
    assert_eq!(result.best_move, None);
}

#[test]
fn decided_position_returns_none() {
    let board = BoardBuilder::new()
        .piece(sq("A5"), Color::Black, Piece::King)
        .piece(sq("C3"), Color::White, Piece::Queen)
        .build();
    assert_eq!(search_depth(&board, Color::White, 2).best_move, None);
}

#[test]
fn search_handles_saturated_clock() {
    let board = Board::try_from_fen("k4/5/5/5/4K w 4294967295").unwrap();
    let result = search_depth(&board, Color::White, 2);
    let found = result.best_move.expect("white king has moves");
    assert!(board.is_legal_move(found));
}

// ============================================================================
// Deadlines
// ============================================================================

#[test]
fn expired_deadline_still_returns_a_move() {
    let board = Board::new();
    let result = best_move(&board, Color::White, Instant::now());
    assert_eq!(result.depth, 0);
    // First move of the one-ply ordering.
    assert_eq!(result.best_move, Some(mv("D1 D4")));
}

#[test]
fn deadline_bounds_search_time() {
    let board = Board::new();
    let start = Instant::now();
    let result = best_move(&board, Color::White, start + Duration::from_millis(400));
    assert!(result.best_move.is_some());
    assert!(board.is_legal_move(result.best_move.unwrap()));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn interrupted_iteration_keeps_last_completed_depth() {
    let board = Board::new();
    let result = best_move(
        &board,
        Color::White,
        Instant::now() + Duration::from_millis(400),
    );
    assert!(result.depth > 0);
    assert!(result.depth < MAX_SEARCH_DEPTH);

    // The reported move and score are exactly those of the deepest
    // completed iteration, not of the abandoned one.
    let completed = search_depth(&board, Color::White, result.depth);
    assert_eq!(result.best_move, completed.best_move);
    assert_eq!(result.score, completed.score);
}

#[test]
fn safety_margin_stops_expansion() {
    let deadline = Instant::now() + Duration::from_secs(1);

    let mut scratch = Board::new();
    let mut ctx = SearchContext::new(&mut scratch, Color::White)
        .with_deadline(Some(deadline))
        .with_safety_margin(Duration::from_secs(5));
    let (score, best) = ctx.minimax(3, -SCORE_INFINITY, SCORE_INFINITY, true);
    assert!(ctx.aborted());
    assert_eq!(best, None);
    assert_eq!(ctx.nodes(), 1);
    assert_eq!(score, 0);

    let mut scratch = Board::new();
    let mut ctx = SearchContext::new(&mut scratch, Color::White)
        .with_deadline(Some(deadline))
        .with_safety_margin(Duration::from_secs(5));
    let result = ctx.iterative_deepening(5, None);
    assert_eq!(result.depth, 0);
    assert_eq!(result.best_move, Some(mv("D1 D4")));
}

#[test]
fn default_safety_margin_is_two_hundred_ms() {
    let mut scratch = Board::new();
    let mut ctx = SearchContext::new(&mut scratch, Color::White)
        .with_deadline(Some(Instant::now() + Duration::from_millis(100)));
    let (_, best) = ctx.minimax(2, -SCORE_INFINITY, SCORE_INFINITY, true);
    assert!(ctx.aborted());
    assert_eq!(best, None);
}

#[test]
fn info_callback_sees_each_completed_depth() {
    let board = Board::new();
    let calls = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&calls);
    let config = SearchConfig::depth(3).with_info_callback(Arc::new(move |info| {
        assert_eq!(info.depth, seen.fetch_add(1, Ordering::SeqCst) + 1);
    }));
    let result = search(&board, Color::White, config);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(result.depth, 3);
}

// ============================================================================
// Move ordering
// ============================================================================

#[test]
fn ordering_puts_captures_first_when_maximizing() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    let ordered = order_moves(&mut board, &moves, Color::White, true);
    assert_eq!(ordered.len(), moves.len());
    assert_eq!(ordered.as_slice()[0].mv, mv("D1 D4"));
    assert_eq!(ordered.as_slice()[0].score, 1);
    // Remaining moves are quiet and keep generation order.
    let rest: Vec<Move> = ordered.iter().skip(1).map(|s| s.mv).collect();
    let expected: Vec<Move> = moves.iter().copied().filter(|m| *m != mv("D1 D4")).collect();
    assert_eq!(rest, expected);
}

#[test]
fn ordering_ascends_when_minimizing() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    let ordered = order_moves(&mut board, &moves, Color::Black, false);
    // From black's view the queen capture is worst for black: -1.
    assert_eq!(ordered.as_slice()[0].mv, mv("D1 D4"));
    assert_eq!(ordered.as_slice()[0].score, -1);
    assert_eq!(board, Board::new());
}
