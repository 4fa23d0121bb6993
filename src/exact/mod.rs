//! Exact route solving by exhaustive permutation search.
//!
//! Enumerates every ordering of the pick items and keeps the shortest
//! start-to-end tour. Guaranteed optimal, but `O(n!)`: ten items already
//! mean 3.6 million candidate orders, so the config bounds both the item
//! count and the wall-clock budget, and an exhausted budget returns the best
//! order found so far.
//!
//! Enumeration is lexicographic over item identifiers and only a strictly
//! shorter candidate replaces the incumbent, so equal-length optima resolve
//! deterministically to the earliest order.

mod config;
mod runner;

pub use config::ExactConfig;
pub use runner::{ExactResult, ExactRunner, SolveStatus};
