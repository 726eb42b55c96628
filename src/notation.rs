//! Text front-end helpers: move input and board rendering.

use std::fmt::{self, Write as _};

use crate::board::{piece_tag, Board, Move, MoveParseError, Square, BOARD_SIZE};

/// Parse human input such as `"B2 B3"` (case-insensitive files).
///
/// # Errors
/// Returns `MoveParseError` if the input is not two valid squares.
pub fn parse_move(input: &str) -> Result<Move, MoveParseError> {
    input.trim().parse()
}

/// Render the board as a text grid, rank 5 at the top:
///
/// ```text
/// 5   bK  bQ  bB  bN   .
/// ...
///      A   B   C   D   E
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let tag = Square::new(row, col)
                    .and_then(|sq| board.piece_at(sq))
                    .map_or_else(|| ".".to_string(), |(c, p)| piece_tag(c, p));
                format!("{tag:>3}")
            })
            .collect();
        let _ = writeln!(out, "{}  {}", BOARD_SIZE - row, cells.join(" "));
    }
    out.push('\n');
    out.push_str("     A   B   C   D   E\n");
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
