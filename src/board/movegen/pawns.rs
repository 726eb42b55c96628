use super::super::attack_tables::PAWN_CAPTURES;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// One step forward onto an empty square, or a forward diagonal capture.
    /// No double step, no en passant.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        if let Some(to) = from.offset(color.pawn_direction(), 0) {
            if self.is_empty(to) {
                moves.push(Move::new(from, to));
            }
        }

        let captures =
            PAWN_CAPTURES[color.index()][from.as_index()].and(self.occupied_by(color.opponent()));
        Self::push_targets(from, captures, moves);
    }
}
