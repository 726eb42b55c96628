//! Outcome state machine and draw clock tests.

use super::{find_move, sq};
use crate::board::{Board, BoardBuilder, Color, MoveError, Outcome, Piece, DRAW_CLOCK_LIMIT};

fn kings_only(clock: u32) -> Board {
    BoardBuilder::new()
        .piece(sq("A1"), Color::White, Piece::King)
        .piece(sq("E5"), Color::Black, Piece::King)
        .halfmove_clock(clock)
        .build()
}

#[test]
fn test_initial_outcome_in_progress() {
    let board = Board::new();
    assert_eq!(board.outcome(), Outcome::InProgress);
    assert!(board.kings_present());
    assert!(!board.is_draw());
}

#[test]
fn test_clock_increments_on_quiet_move() {
    let board = kings_only(3);
    let next = board.apply_move(find_move(&board, "A1", "A2")).unwrap();
    assert_eq!(next.board.halfmove_clock(), 4);
    assert_eq!(next.record.halfmove_clock, 4);
}

#[test]
fn test_clock_resets_on_capture() {
    let board = BoardBuilder::new()
        .piece(sq("A1"), Color::White, Piece::King)
        .piece(sq("A2"), Color::Black, Piece::Pawn)
        .piece(sq("E5"), Color::Black, Piece::King)
        .halfmove_clock(8)
        .build();
    let next = board.apply_move(find_move(&board, "A1", "A2")).unwrap();
    assert_eq!(next.board.halfmove_clock(), 0);
    assert_eq!(next.outcome, Outcome::InProgress);
}

#[test]
fn test_clock_saturates_at_max() {
    let mut board = kings_only(u32::MAX);
    let before = board.clone();
    let mv = find_move(&board, "A1", "A2");
    let info = board.make_move(mv);
    assert_eq!(board.halfmove_clock(), u32::MAX);
    board.unmake_move(mv, info);
    assert_eq!(board, before);
}

#[test]
fn test_draw_when_clock_reaches_limit() {
    let board = kings_only(DRAW_CLOCK_LIMIT - 1);
    assert_eq!(board.outcome(), Outcome::InProgress);

    let next = board.apply_move(find_move(&board, "A1", "B1")).unwrap();
    assert_eq!(next.board.halfmove_clock(), DRAW_CLOCK_LIMIT);
    assert_eq!(next.outcome, Outcome::Draw);
}

#[test]
fn test_draw_is_terminal() {
    let board = kings_only(DRAW_CLOCK_LIMIT);
    assert_eq!(board.outcome(), Outcome::Draw);
    let mv = find_move(&board, "A1", "B1");
    assert_eq!(
        board.apply_move(mv).unwrap_err(),
        MoveError::GameOver {
            outcome: Outcome::Draw
        }
    );
}

#[test]
fn test_king_capture_ends_game() {
    // Black queen on E4 takes the white king on E1.
    let board = BoardBuilder::new()
        .piece(sq("E1"), Color::White, Piece::King)
        .piece(sq("D1"), Color::White, Piece::Queen)
        .piece(sq("E4"), Color::Black, Piece::Queen)
        .piece(sq("A5"), Color::Black, Piece::King)
        .side_to_move(Color::Black)
        .build();
    let next = board.apply_move(find_move(&board, "E4", "E1")).unwrap();
    assert_eq!(next.outcome, Outcome::BlackWins);
    assert_eq!(next.record.captured, Some((Color::White, Piece::King)));
    assert!(!next.board.has_king(Color::White));
    assert_eq!(next.record.to_string(), "Black: bQ E4 -> E1 captures wK");
}

#[test]
fn test_white_wins_by_king_capture() {
    let board = BoardBuilder::new()
        .piece(sq("E1"), Color::White, Piece::King)
        .piece(sq("B3"), Color::White, Piece::Knight)
        .piece(sq("A5"), Color::Black, Piece::King)
        .build();
    let next = board.apply_move(find_move(&board, "B3", "A5")).unwrap();
    assert_eq!(next.outcome, Outcome::WhiteWins);
}

#[test]
fn test_king_capture_beats_draw_clock() {
    // The capture resets the clock anyway, but a decided game is never a
    // draw even if the clock says so.
    let board = BoardBuilder::new()
        .piece(sq("A5"), Color::Black, Piece::King)
        .halfmove_clock(DRAW_CLOCK_LIMIT)
        .build();
    assert_eq!(board.outcome(), Outcome::BlackWins);
}
