//! Sweep traversal loop.

use crate::geometry::Position;
use crate::layout::WarehouseLayout;
use crate::picklist::PickList;
use crate::route::{Route, Waypoint};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sweep direction inside an aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Result of one sweep solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepResult {
    /// The serpentine route.
    pub route: Route,

    /// Aisles the route walks, ascending.
    pub aisles: Vec<u32>,
}

/// Executes the serpentine sweep.
pub struct SweepRunner;

impl SweepRunner {
    /// Routes a pick list through the layout with an S-shaped sweep.
    ///
    /// Items on shelf rows the layout does not contain cannot be placed in
    /// an aisle and are left out of the route; if no item lands in a usable
    /// aisle the result is the direct start-to-end route.
    pub fn run(list: &PickList, layout: &WarehouseLayout) -> SweepResult {
        // Group picks by shelf row, keeping only rows the layout knows.
        let mut by_row: BTreeMap<u32, Vec<(&str, Position)>> = BTreeMap::new();
        for (id, position) in list.items() {
            let row = position.y.floor() as u32;
            if layout.row(row).is_none() {
                log::debug!("pick item {id} sits on row {row}, which the layout does not contain");
                continue;
            }
            by_row.entry(row).or_default().push((id, position));
        }

        // One aisle per occupied row; BTreeMap keys make the list sorted
        // and unique.
        let aisles: Vec<u32> = by_row
            .keys()
            .map(|&row| WarehouseLayout::aisle_for_row(row))
            .collect();
        if aisles.is_empty() {
            return SweepResult {
                route: Route::direct(list.start(), list.end()),
                aisles,
            };
        }
        log::debug!("aisles to be visited: {aisles:?}");

        let ceiling = layout.row_ceiling();
        let mut direction = Direction::LeftToRight;
        let mut waypoints = vec![Waypoint::transit(list.start())];

        for pair in aisles.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            // Boundary policy: aisles at or past the ceiling have nothing
            // below them to clear, so they get no corner processing.
            if current >= ceiling {
                continue;
            }
            let row = current - 1;
            let Some(shelf) = layout.row(row) else {
                continue;
            };
            let picks = by_row.get(&row).map(Vec::as_slice).unwrap_or(&[]);

            match direction {
                Direction::LeftToRight => {
                    waypoints.push(corner(shelf.begin, current));
                    push_picks(&mut waypoints, picks, direction);
                    // Clear every shelf row between this aisle and the
                    // next before turning down into it.
                    let exit = max_end_between(layout, current, next).unwrap_or(shelf.end);
                    waypoints.push(corner(exit, current));
                    waypoints.push(corner(exit, next));
                    direction = Direction::RightToLeft;
                }
                Direction::RightToLeft => {
                    waypoints.push(corner(shelf.end, current));
                    push_picks(&mut waypoints, picks, direction);
                    let exit = min_begin_between(layout, current, next).unwrap_or(shelf.begin);
                    waypoints.push(corner(exit, current));
                    waypoints.push(corner(exit, next));
                    direction = Direction::LeftToRight;
                }
            }
        }

        // Final aisle: picks in the direction active at exit, then out to
        // the left edge and on to the drop-off.
        let last = aisles[aisles.len() - 1];
        if let Some(shelf) = layout.row(last - 1) {
            if aisles.len() == 1 {
                let entry = match direction {
                    Direction::LeftToRight => shelf.begin,
                    Direction::RightToLeft => shelf.end,
                };
                waypoints.push(corner(entry, last));
            }
            let picks = by_row.get(&(last - 1)).map(Vec::as_slice).unwrap_or(&[]);
            push_picks(&mut waypoints, picks, direction);
        }
        waypoints.push(Waypoint::transit(Position::new(0.0, f64::from(last))));
        waypoints.push(Waypoint::transit(list.end()));

        SweepResult {
            route: Route::from_waypoints(waypoints),
            aisles,
        }
    }
}

fn corner(slot: u32, aisle: u32) -> Waypoint {
    Waypoint::transit(Position::new(f64::from(slot), f64::from(aisle)))
}

/// Appends one row's picks sorted along the sweep direction.
///
/// Ties on x keep ascending identifier order (the pick list iterates by
/// identifier and the sort is stable).
fn push_picks(waypoints: &mut Vec<Waypoint>, picks: &[(&str, Position)], direction: Direction) {
    let mut sorted = picks.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.1.x.partial_cmp(&b.1.x).unwrap_or(Ordering::Equal);
        match direction {
            Direction::LeftToRight => ordering,
            Direction::RightToLeft => ordering.reverse(),
        }
    });
    for (id, position) in sorted {
        waypoints.push(Waypoint::pick(id, position));
    }
}

/// Largest `end` among shelf rows strictly between two aisles, stepping by
/// two to hit the even row indices; `None` when the scan finds no row.
fn max_end_between(layout: &WarehouseLayout, current: u32, next: u32) -> Option<u32> {
    ((current + 1)..next)
        .step_by(2)
        .filter_map(|row| layout.row(row))
        .map(|shelf| shelf.end)
        .max()
}

/// Smallest `begin` among the same intervening rows.
fn min_begin_between(layout: &WarehouseLayout, current: u32, next: u32) -> Option<u32> {
    ((current + 1)..next)
        .step_by(2)
        .filter_map(|row| layout.row(row))
        .map(|shelf| shelf.begin)
        .min()
}
