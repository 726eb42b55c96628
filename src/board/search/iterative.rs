use std::time::Instant;

use super::constants::SCORE_INFINITY;
use super::minimax::SearchContext;
use super::move_order::order_moves;
use super::{SearchInfoCallback, SearchIterationInfo, SearchResult};

impl SearchContext<'_> {
    /// Iterative deepening from depth 1 to `max_depth`.
    ///
    /// Only fully completed iterations replace the reported result. If not
    /// even depth 1 completes, the first move of the one-ply ordering is
    /// returned so that a side with legal moves always gets one.
    pub fn iterative_deepening(
        &mut self,
        max_depth: u32,
        info_callback: Option<&SearchInfoCallback>,
    ) -> SearchResult {
        let start = Instant::now();
        let ai_color = self.ai_color();
        let board = self.board_mut();
        let maximizing = board.side_to_move() == ai_color;

        if !board.kings_present() {
            return SearchResult {
                score: board.evaluate(ai_color),
                best_move: None,
                depth: 0,
                nodes: 0,
            };
        }
        let root_moves = board.generate_moves();
        let ordered = order_moves(board, &root_moves, ai_color, maximizing);
        let Some(first) = ordered.iter().next() else {
            return SearchResult {
                score: board.evaluate(ai_color),
                best_move: None,
                depth: 0,
                nodes: 0,
            };
        };

        let mut result = SearchResult {
            score: first.score,
            best_move: Some(first.mv),
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=max_depth {
            if self.deadline_passed() {
                break;
            }
            self.reset_iteration();
            let (score, best) = self.minimax(depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing);
            if self.aborted() {
                log::trace!(
                    "depth {depth} abandoned at deadline after {} nodes",
                    self.nodes()
                );
                break;
            }
            if let Some(mv) = best {
                result.score = score;
                result.best_move = Some(mv);
            }
            result.depth = depth;

            let time_ms = start.elapsed().as_millis() as u64;
            log::debug!(
                "depth {depth} score {score} nodes {} time {time_ms}ms best {}",
                self.nodes(),
                result.best_move.map_or_else(|| "-".to_string(), |mv| mv.to_string())
            );
            if let Some(cb) = info_callback {
                cb(&SearchIterationInfo {
                    depth,
                    nodes: self.nodes(),
                    time_ms,
                    score,
                    best_move: result.best_move,
                });
            }

            // Every line ended in a king capture or a dead end; deeper
            // iterations would see the same tree.
            if !self.depth_limited() {
                break;
            }
        }

        result.nodes = self.nodes();
        result
    }
}
