//! Exhaustive search loop.

use super::config::ExactConfig;
use crate::error::{Error, Result};
use crate::geometry::{euclidean, Position};
use crate::picklist::PickList;
use crate::route::{Route, Waypoint};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveStatus {
    /// The search space was fully enumerated; the route is optimal.
    Optimal,
    /// The route comes from a heuristic; optimality is not claimed.
    Feasible,
    /// The time budget ran out; the route is the best found so far.
    Timeout,
    /// The cancellation flag was raised; the route is the best found so far.
    Cancelled,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Feasible => write!(f, "feasible"),
            SolveStatus::Timeout => write!(f, "timeout"),
            SolveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of one exact solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactResult {
    /// The best route found.
    pub route: Route,

    /// Number of candidate orders evaluated.
    pub permutations_evaluated: u64,

    /// Whether the search completed, timed out, or was cancelled.
    pub status: SolveStatus,
}

// Clock and cancel-flag checks happen every 1024 evaluated orders; a single
// order is far too cheap to pay for Instant::now() each time.
const CLOCK_CHECK_MASK: u64 = 0x3FF;

/// Executes the exhaustive route search.
pub struct ExactRunner;

impl ExactRunner {
    /// Solves a pick list to optimality (subject to the configured budget).
    pub fn run(list: &PickList, config: &ExactConfig) -> Result<ExactResult> {
        Self::run_with_cancel(list, config, None)
    }

    /// Runs the search with an optional cancellation token.
    pub fn run_with_cancel(
        list: &PickList,
        config: &ExactConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ExactResult> {
        let items: Vec<(&str, Position)> = list.items().collect();
        let n = items.len();
        if !config.is_within_limit(n) {
            return Err(Error::TooManyItems {
                count: n,
                limit: config.max_items,
            });
        }

        // Zero or one item: a single possible order, no search.
        if n <= 1 {
            let order: Vec<usize> = (0..n).collect();
            return Ok(ExactResult {
                route: build_route(list, &items, &order),
                permutations_evaluated: 1,
                status: SolveStatus::Optimal,
            });
        }

        // Identifier order is the first candidate; identifiers are unique,
        // so index order and lexicographic identifier order coincide.
        let mut order: Vec<usize> = (0..n).collect();
        let mut best_order = order.clone();
        let mut best_length = f64::INFINITY;
        let mut evaluated = 0u64;
        let mut status = SolveStatus::Optimal;

        let started = Instant::now();
        let time_limit = match config.time_limit_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };

        loop {
            let length = tour_length(list.start(), list.end(), &items, &order);
            evaluated += 1;

            // Strictly shorter only: equal-length candidates keep the
            // earlier (lexicographically smaller) incumbent.
            if length < best_length {
                best_length = length;
                best_order.copy_from_slice(&order);
            }

            if !next_permutation(&mut order) {
                break;
            }

            if (evaluated & CLOCK_CHECK_MASK) == 0 {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        status = SolveStatus::Cancelled;
                        break;
                    }
                }
                if let Some(limit) = time_limit {
                    if started.elapsed() >= limit {
                        log::warn!(
                            "time budget of {} ms exhausted after {} orders; returning best found",
                            config.time_limit_ms,
                            evaluated
                        );
                        status = SolveStatus::Timeout;
                        break;
                    }
                }
            }
        }

        log::debug!("exact search evaluated {evaluated} orders over {n} items");
        Ok(ExactResult {
            route: build_route(list, &items, &best_order),
            permutations_evaluated: evaluated,
            status,
        })
    }
}

/// Length of the tour `start -> items[order[0]] -> ... -> end`.
fn tour_length(start: Position, end: Position, items: &[(&str, Position)], order: &[usize]) -> f64 {
    let mut length = 0.0;
    let mut at = start;
    for &i in order {
        length += euclidean(at, items[i].1);
        at = items[i].1;
    }
    length + euclidean(at, end)
}

fn build_route(list: &PickList, items: &[(&str, Position)], order: &[usize]) -> Route {
    let mut waypoints = Vec::with_capacity(order.len() + 2);
    waypoints.push(Waypoint::transit(list.start()));
    for &i in order {
        let (id, position) = items[i];
        waypoints.push(Waypoint::pick(id, position));
    }
    waypoints.push(Waypoint::transit(list.end()));
    Route::from_waypoints(waypoints)
}

/// Advances `order` to its next lexicographic permutation in place.
///
/// Returns `false` (and restores ascending order) once the last permutation
/// has been reached, mirroring the classic wrap-around contract.
fn next_permutation(order: &mut [usize]) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && order[i - 1] >= order[i] {
        i -= 1;
    }
    if i == 0 {
        order.reverse();
        return false;
    }
    let mut j = n - 1;
    while order[j] <= order[i - 1] {
        j -= 1;
    }
    order.swap(i - 1, j);
    order[i..].reverse();
    true
}
