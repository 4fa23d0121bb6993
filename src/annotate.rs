//! Human-readable route rendering.
//!
//! Two renderings: [`annotate`] describes each waypoint (what to do there),
//! [`directions`] describes each leg between waypoints (how to move).
//! Coordinates print with two decimals in both.

use crate::geometry::{taxicab, AxisSign};
use crate::route::Route;

/// One instruction per waypoint; output length equals the waypoint count.
///
/// The first waypoint reads as the start, the last as the drop-off, pick
/// stops name their item, and plain corner/transition stops render as
/// points.
pub fn annotate(route: &Route) -> Vec<String> {
    let last = route.len().saturating_sub(1);
    route
        .waypoints
        .iter()
        .enumerate()
        .map(|(i, wp)| {
            let (x, y) = (wp.position.x, wp.position.y);
            if i == 0 {
                format!("Start at start location present in ({x:.2},{y:.2})")
            } else if i == last {
                format!("Drop the products off at end location in ({x:.2},{y:.2})")
            } else if let Some(id) = &wp.item {
                format!("Go to product {id} at ({x:.2},{y:.2})")
            } else {
                format!("Go to point ({x:.2},{y:.2})")
            }
        })
        .collect()
}

/// Relative movement instructions, one per leg (waypoint count minus one).
///
/// Direction words come from the taxicab metric's axis signs: a zero delta
/// still reads "right"/"down".
pub fn directions(route: &Route) -> Vec<String> {
    route
        .waypoints
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].position, pair[1].position);
            let step = taxicab(from, to);
            let horizontal = match step.x_sign {
                AxisSign::Negative => "left",
                AxisSign::Positive => "right",
            };
            let vertical = match step.y_sign {
                AxisSign::Negative => "up",
                AxisSign::Positive => "down",
            };
            format!(
                "Go {:.2} {horizontal}, then go {:.2} {vertical}.",
                (to.x - from.x).abs(),
                (to.y - from.y).abs()
            )
        })
        .collect()
}
