//! Time-bounded game-tree search.
//!
//! Iterative deepening over a minimax search with alpha-beta pruning and a
//! static one-ply move ordering. The evaluation is pure material, scored
//! from the searching side's point of view.
//!
//! The search never touches the caller's board: it works on a private
//! clone with make/unmake.
//!
//! # Determinism
//! For a fixed depth the result is fully determined by the position. Under
//! a deadline, the depth reached depends on wall-clock time, so two runs on
//! the same position may stop at different depths and return different
//! moves. That is expected.

mod constants;
mod iterative;
mod minimax;
pub(crate) mod move_order;

use std::sync::Arc;
use std::time::{Duration, Instant};

pub use constants::{MAX_SEARCH_DEPTH, SAFETY_MARGIN_MS, SCORE_INFINITY};
pub use minimax::SearchContext;

use super::{Board, Color, Move};

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the position for the searching side
    pub score: i32,
    /// `None` only when the side to move has no legal move (or the game
    /// is already decided)
    pub best_move: Option<Move>,
    /// Deepest fully completed iteration; 0 means the one-ply fallback
    pub depth: u32,
    pub nodes: u64,
}

/// Configuration for a search operation.
#[derive(Clone)]
pub struct SearchConfig {
    /// Maximum iterative-deepening depth
    pub max_depth: u32,
    /// Wall-clock deadline (None = search to `max_depth`)
    pub deadline: Option<Instant>,
    /// Stop expanding moves once less than this remains
    pub safety_margin: Duration,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: MAX_SEARCH_DEPTH,
            deadline: None,
            safety_margin: Duration::from_millis(SAFETY_MARGIN_MS),
            info_callback: None,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Default::default()
        }
    }

    /// Create a config that searches until `deadline`
    #[must_use]
    pub fn until(deadline: Instant) -> Self {
        SearchConfig {
            deadline: Some(deadline),
            ..Default::default()
        }
    }

    /// Create a config that searches for `limit` from now
    #[must_use]
    pub fn time(limit: Duration) -> Self {
        Self::until(Instant::now() + limit)
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub nodes: u64,
    pub time_ms: u64,
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Unified search entry point.
///
/// # Example
/// ```
/// use minichess::board::{search, Board, Color, SearchConfig};
///
/// let board = Board::new();
/// let result = search(&board, Color::White, SearchConfig::depth(3));
/// assert!(result.best_move.is_some());
/// ```
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn search(board: &Board, ai_color: Color, config: SearchConfig) -> SearchResult {
    let mut scratch = board.clone();
    let mut ctx = SearchContext::new(&mut scratch, ai_color)
        .with_deadline(config.deadline)
        .with_safety_margin(config.safety_margin);
    ctx.iterative_deepening(config.max_depth, config.info_callback.as_ref())
}

/// Best move for `ai_color` found before `deadline`.
#[must_use]
pub fn best_move(board: &Board, ai_color: Color, deadline: Instant) -> SearchResult {
    search(board, ai_color, SearchConfig::until(deadline))
}

/// Search to exactly `depth` (unless the game tree ends sooner), with no
/// deadline.
#[must_use]
pub fn search_depth(board: &Board, ai_color: Color, depth: u32) -> SearchResult {
    search(board, ai_color, SearchConfig::depth(depth))
}
