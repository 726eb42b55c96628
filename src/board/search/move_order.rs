//! Static one-ply move ordering.

use super::super::{Board, Color, MoveList, ScoredMoveList};

/// Score every move by the material balance one ply later, from
/// `ai_color`'s point of view, and sort: best-for-`ai_color` first when
/// maximizing, worst first otherwise. The sort is stable, so equal scores
/// keep generation order.
pub(crate) fn order_moves(
    board: &mut Board,
    moves: &MoveList,
    ai_color: Color,
    maximizing: bool,
) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        let info = board.make_move(mv);
        let score = board.evaluate(ai_color);
        board.unmake_move(mv, info);
        scored.push(mv, score);
    }
    if maximizing {
        scored.sort_by_score_desc();
    } else {
        scored.sort_by_score_asc();
    }
    scored
}
