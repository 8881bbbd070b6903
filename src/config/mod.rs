// src/config/mod.rs
// Configuration and shared constants

pub mod ignore;

/// Search results reported to the caller are truncated to this budget.
/// Collection itself is unbounded; truncation happens after the walk.
pub const SEARCH_RESULT_CAP: usize = 50;

/// Default recursion depth for recursive directory listing.
pub const DEFAULT_MAX_DEPTH: i64 = 3;
