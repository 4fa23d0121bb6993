//! Error types for the route engine.
//!
//! Most boundary conditions here are filtered rather than raised: invalid
//! positions are dropped, missing shelf rows come back as `None`, empty pick
//! lists produce a direct start-to-end route, and an exhausted time budget
//! returns the best route found so far. The variants below cover the
//! remaining cases where the caller asked for something the engine cannot do.

use thiserror::Error;

/// Errors raised by the route engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pick list is larger than the exact solver's configured bound.
    ///
    /// Exhaustive search over `n` items evaluates `n!` orders; the bound
    /// keeps callers from launching a search that cannot finish. Use the
    /// sweep solver (or raise `max_items` deliberately) for larger lists.
    #[error("pick list has {count} items, exceeding the exact-search bound of {limit}")]
    TooManyItems {
        /// Number of items in the offending pick list.
        count: usize,
        /// The configured `max_items` bound.
        limit: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
