//! Exact-search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the exact route solver.
///
/// # Examples
///
/// ```
/// use u_pickroute::exact::ExactConfig;
///
/// let config = ExactConfig::default()
///     .with_time_limit_ms(5_000)
///     .with_max_items(8);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactConfig {
    /// Wall-clock budget in milliseconds. 0 = no limit.
    ///
    /// When the budget runs out mid-search, the solver stops and returns
    /// the best order found so far, tagged as a timeout.
    pub time_limit_ms: u64,

    /// Largest pick list the solver accepts.
    ///
    /// Exhaustive search evaluates `n!` orders. Lists over the bound are an
    /// error; route them with the sweep solver instead, or raise the bound
    /// deliberately together with the time budget.
    pub max_items: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            max_items: 10,
        }
    }
}

impl ExactConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n.max(1);
        self
    }

    /// Whether a pick list of `n` items fits within `max_items`.
    pub fn is_within_limit(&self, n: usize) -> bool {
        n <= self.max_items
    }
}
