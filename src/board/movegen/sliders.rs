use super::super::attack_tables::{slider_attacks, ALL_DIRS, DIAGONAL_DIRS};
use super::super::{Board, Color, MoveList, Square};

impl Board {
    fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        dirs: &[usize],
        moves: &mut MoveList,
    ) {
        // Rays include the first blocker; drop it when it is our own piece.
        let reach = slider_attacks(from, dirs, self.all_occupied);
        let targets = reach.and(self.occupied_by(color).not());
        Self::push_targets(from, targets, moves);
    }

    pub(crate) fn generate_bishop_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_sliding_moves(from, color, &DIAGONAL_DIRS, moves);
    }

    pub(crate) fn generate_queen_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_sliding_moves(from, color, &ALL_DIRS, moves);
    }
}
