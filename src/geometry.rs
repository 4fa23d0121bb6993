//! Positions and distance metrics.
//!
//! The warehouse uses screen-style coordinates: `x` grows to the right and
//! `y` grows downward, so shelf row 0 is the top of the map. Two metrics are
//! provided: [`euclidean`] drives both route solvers, while [`taxicab`] also
//! reports per-axis directions and backs turn-by-turn instruction text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the warehouse floor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when either coordinate is negative.
    ///
    /// Product catalogs mark "no known location" with negative coordinates;
    /// such positions are filtered at the engine boundary and never reach a
    /// solver.
    pub fn is_unplaced(&self) -> bool {
        self.x < 0.0 || self.y < 0.0
    }
}

/// Direction of movement along one axis.
///
/// A zero delta counts as `Positive`: an instruction for a degenerate move
/// still needs a direction word, and "0 right" / "0 down" reads better than
/// an arbitrary flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisSign {
    /// Toward smaller coordinates: left on x, up on y.
    Negative,
    /// Toward larger coordinates: right on x, down on y. Includes zero.
    Positive,
}

impl AxisSign {
    fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            AxisSign::Negative
        } else {
            AxisSign::Positive
        }
    }
}

/// Taxicab distance between two positions, with per-axis directions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taxicab {
    /// `|dx| + |dy|`.
    pub distance: f64,
    /// Direction of the x component (`from` to `to`).
    pub x_sign: AxisSign,
    /// Direction of the y component (`from` to `to`).
    pub y_sign: AxisSign,
}

/// Straight-line distance between two positions.
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Taxicab (Manhattan) distance from `from` to `to`, plus the direction of
/// travel on each axis.
pub fn taxicab(from: Position, to: Position) -> Taxicab {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    Taxicab {
        distance: dx.abs() + dy.abs(),
        x_sign: AxisSign::from_delta(dx),
        y_sign: AxisSign::from_delta(dy),
    }
}
