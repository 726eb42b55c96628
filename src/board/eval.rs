use super::{Board, Color, Piece};

impl Board {
    /// Sum of piece values for one side.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        Piece::ALL
            .iter()
            .map(|&piece| self.pieces(color, piece).popcount() as i32 * piece.value())
            .sum()
    }

    /// Material balance from `perspective`'s point of view; positive favors
    /// `perspective`.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.material(perspective) - self.material(perspective.opponent())
    }
}

/// Free-function form of [`Board::evaluate`].
#[must_use]
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    board.evaluate(perspective)
}
