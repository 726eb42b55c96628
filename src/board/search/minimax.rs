use std::time::{Duration, Instant};

use super::constants::{SAFETY_MARGIN_MS, SCORE_INFINITY};
use super::move_order::order_moves;
use crate::board::{Board, Color, Move};

/// State for one search invocation.
///
/// Owns nothing persistent: the board is the caller's scratch copy, and
/// every move made during the search is unmade before returning.
pub struct SearchContext<'a> {
    board: &'a mut Board,
    ai_color: Color,
    deadline: Option<Instant>,
    safety_margin: Duration,
    nodes: u64,
    /// Set when the deadline cut the current iteration short
    aborted: bool,
    /// Set when some line was cut by the depth limit rather than by the
    /// end of the game
    depth_limited: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(board: &'a mut Board, ai_color: Color) -> Self {
        SearchContext {
            board,
            ai_color,
            deadline: None,
            safety_margin: Duration::from_millis(SAFETY_MARGIN_MS),
            nodes: 0,
            aborted: false,
            depth_limited: false,
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    #[must_use]
    pub fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[must_use]
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    pub(crate) fn depth_limited(&self) -> bool {
        self.depth_limited
    }

    pub(crate) fn ai_color(&self) -> Color {
        self.ai_color
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }

    pub(crate) fn reset_iteration(&mut self) {
        self.aborted = false;
        self.depth_limited = false;
    }

    pub(crate) fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    fn near_deadline(&self) -> bool {
        self.deadline
            .is_some_and(|d| d.saturating_duration_since(Instant::now()) < self.safety_margin)
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Scores are always from `ai_color`'s point of view; `maximizing` says
    /// whether the side to move at this node is trying to raise or lower
    /// that score. Returns the node value and the move that achieves it,
    /// or `None` at a leaf.
    pub fn minimax(
        &mut self,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 || !self.board.kings_present() || self.deadline_passed() {
            if self.deadline_passed() {
                self.aborted = true;
            } else if depth == 0 && self.board.kings_present() {
                self.depth_limited = true;
            }
            return (self.board.evaluate(self.ai_color), None);
        }

        let moves = self.board.generate_moves();
        if moves.is_empty() {
            return (self.board.evaluate(self.ai_color), None);
        }
        let ordered = order_moves(self.board, &moves, self.ai_color, maximizing);

        let mut best_score = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
        let mut best_move = None;

        for scored in ordered.iter() {
            if self.near_deadline() {
                self.aborted = true;
                break;
            }

            let mv = scored.mv;
            let info = self.board.make_move(mv);
            let (score, _) = self.minimax(depth - 1, alpha, beta, !maximizing);
            self.board.unmake_move(mv, info);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        if best_move.is_none() {
            return (self.board.evaluate(self.ai_color), None);
        }
        (best_score, best_move)
    }
}
