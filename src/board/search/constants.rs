//! Search limits.

/// Hard cap on the iterative-deepening depth.
pub const MAX_SEARCH_DEPTH: u32 = 50;

/// Stop expanding a node's moves once less than this remains before the
/// deadline.
pub const SAFETY_MARGIN_MS: u64 = 200;

/// Larger than any reachable evaluation (seven pieces plus a king a side).
pub const SCORE_INFINITY: i32 = 1_000_000;
