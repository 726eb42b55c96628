use super::outcome::DRAW_CLOCK_LIMIT;
use super::{Bitboard, Color, Outcome, Piece, Square, BOARD_SIZE};

/// Undo record for `Board::make_move`.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) moving_piece: (Color, Piece),
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_halfmove_clock: u32,
    /// Squares whose pawn was turned into a queen by this move
    pub(crate) promoted: Bitboard,
}

impl UnmakeInfo {
    /// The piece captured by the move, if any
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured_piece_info
    }

    /// Whether the move promoted at least one pawn
    #[must_use]
    pub fn promoted(&self) -> bool {
        !self.promoted.is_empty()
    }
}

/// A MiniChess position: piece placement, side to move and the
/// moves-without-capture counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 5]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
}

impl Board {
    /// The fixed starting layout, white to move.
    ///
    /// ```text
    /// 5  bK bQ bB bN  .
    /// 4   .  . bp bp  .
    /// 3   .  .  .  .  .
    /// 2   . wp wp  .  .
    /// 1   . wN wB wQ wK
    ///     A  B  C  D  E
    /// ```
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [Piece::King, Piece::Queen, Piece::Bishop, Piece::Knight];
        for (col, piece) in back_rank.iter().enumerate() {
            let black = Square::from_index(col);
            board.set_piece(black, Color::Black, *piece);
            board.set_piece(black.rotate(), Color::White, *piece);
        }
        for col in [2, 3] {
            let black = Square::from_index(BOARD_SIZE + col);
            board.set_piece(black, Color::Black, Piece::Pawn);
            board.set_piece(black.rotate(), Color::White, Piece::Pawn);
        }
        board.side_to_move = Color::White;
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 5]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            halfmove_clock: 0,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Moves played since the last capture
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Bitboard of one color's pieces of one kind
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        !self.pieces(color, Piece::King).is_empty()
    }

    /// True when both kings are still on the board
    #[must_use]
    pub fn kings_present(&self) -> bool {
        self.has_king(Color::White) && self.has_king(Color::Black)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= DRAW_CLOCK_LIMIT
    }

    /// Evaluate the outcome state machine for this position.
    ///
    /// A missing king takes precedence over the draw clock: the capture
    /// that removes a king also resets the clock.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match (self.has_king(Color::White), self.has_king(Color::Black)) {
            (true, true) => {
                if self.is_draw() {
                    Outcome::Draw
                } else {
                    Outcome::InProgress
                }
            }
            (true, false) => Outcome::WhiteWins,
            (false, true) => Outcome::BlackWins,
            // Unreachable through legal play; treat as a dead game.
            (false, false) => Outcome::Draw,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// The starting position.
#[must_use]
pub fn initial_position() -> Board {
    Board::new()
}
