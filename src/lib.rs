//! Warehouse order-picking route engine.
//!
//! Builds a typed warehouse model from observed product positions, routes
//! pick lists through it, and renders routes as picker instructions:
//!
//! - **Layout**: shelf rows on even indices with walkable aisles between
//!   them, derived from catalog positions — occupied slots, `begin`/`end`
//!   extremes, open slots, and overall dimensions.
//! - **Exact search**: exhaustive lexicographic permutation enumeration.
//!   Optimal with a deterministic tie-break, `O(n!)`, bounded by item count
//!   and wall-clock budget, cancellable.
//! - **Serpentine sweep**: S-shape traversal visiting aisles in ascending
//!   order with alternating direction. Linear, no optimality claim, scales
//!   to any pick list.
//! - **Annotation**: per-waypoint instructions and turn-by-turn directions.
//!
//! # Architecture
//!
//! The layout is built once from the catalog and passed by reference; the
//! solvers are pure functions of their inputs and keep no state between
//! calls. Presentation layers, product databases, and picker assignment sit
//! outside this crate.
//!
//! # References
//!
//! - Ratliff & Rosenthal (1983), "Order-Picking in a Rectangular Warehouse:
//!   A Solvable Case of the Traveling Salesman Problem"
//! - De Koster, Le-Duc & Roodbergen (2007), "Design and control of
//!   warehouse order picking: a literature review"

pub mod annotate;
pub mod error;
pub mod exact;
pub mod geometry;
pub mod layout;
pub mod picklist;
pub mod route;
pub mod solver;
pub mod sweep;

pub use annotate::{annotate, directions};
pub use error::{Error, Result};
pub use exact::{ExactConfig, ExactResult, ExactRunner, SolveStatus};
pub use geometry::{euclidean, taxicab, AxisSign, Position, Taxicab};
pub use layout::{ShelfRow, WarehouseLayout};
pub use picklist::{PickItem, PickList};
pub use route::{Route, Waypoint};
pub use solver::{solve, RoutePlan, SolveConfig, Strategy};
pub use sweep::{SweepResult, SweepRunner};
