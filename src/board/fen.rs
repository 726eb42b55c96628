use super::error::FenError;
use super::{Board, Color, Piece, Square, BOARD_SIZE};

/// FEN of the starting position.
pub const START_FEN: &str = "kqbn1/2pp1/5/1PP2/1NBQK w 0";

impl Board {
    /// Parse a position from 5x5 FEN: placement (row 0 first), side to move
    /// and an optional draw clock.
    ///
    /// # Errors
    /// Returns a `FenError` describing the first malformed field.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let Some(sq) = Square::new(row, col) else {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: col + 1,
                    });
                };
                board.set_piece(sq, color, piece);
                col += 1;
            }
            if col > BOARD_SIZE {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: col,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if let Some(clock) = parts.get(2) {
            board.halfmove_clock = clock.parse().map_err(|_| FenError::InvalidClock {
                found: (*clock).to_string(),
            })?;
        }

        Ok(board)
    }

    /// Parse a position from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            let mut line = String::new();
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                let piece = Square::new(row, col).and_then(|sq| self.piece_at(sq));
                if let Some((color, piece)) = piece {
                    if empty > 0 {
                        line.push_str(&empty.to_string());
                        empty = 0;
                    }
                    line.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                line.push_str(&empty.to_string());
            }
            rows.push(line);
        }

        format!(
            "{} {} {}",
            rows.join("/"),
            self.side_to_move.tag_char(),
            self.halfmove_clock
        )
    }
}
