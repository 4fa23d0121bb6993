//! Waypoints and routes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{euclidean, Position};

/// One stop on a route.
///
/// Pick stops carry the identifier of the item collected there; corner,
/// transition, and endpoint waypoints are untagged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub position: Position,
    /// Identifier of the item picked at this stop, if any.
    pub item: Option<String>,
}

impl Waypoint {
    /// A waypoint that is walked through, not picked at.
    pub fn transit(position: Position) -> Self {
        Self {
            position,
            item: None,
        }
    }

    /// A pick stop for the given item.
    pub fn pick(id: impl Into<String>, position: Position) -> Self {
        Self {
            position,
            item: Some(id.into()),
        }
    }

    pub fn is_pick(&self) -> bool {
        self.item.is_some()
    }
}

/// An ordered walk from a start location to an end location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    pub waypoints: Vec<Waypoint>,
    /// Sum of consecutive pairwise euclidean distances along `waypoints`.
    pub length: f64,
}

impl Route {
    /// Builds a route and computes its total length.
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        let length = waypoints
            .windows(2)
            .map(|pair| euclidean(pair[0].position, pair[1].position))
            .sum();
        Self { waypoints, length }
    }

    /// The two-waypoint route that goes straight from `start` to `end`.
    pub fn direct(start: Position, end: Position) -> Self {
        Self::from_waypoints(vec![Waypoint::transit(start), Waypoint::transit(end)])
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Identifiers of the items picked along the route, in visit order.
    pub fn picked_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.waypoints.iter().filter_map(|wp| wp.item.as_deref())
    }
}
