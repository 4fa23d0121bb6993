//! Serpentine (S-shape) sweep routing.
//!
//! Walks the aisles that hold picks in ascending order, alternating the
//! sweep direction left-to-right and right-to-left so the route snakes
//! through the warehouse without doubling back inside an aisle. Linear in
//! the number of items and rows, and close to optimal for dense pick lists
//! in single-block layouts; it makes no optimality claim.
//!
//! # References
//!
//! - Ratliff & Rosenthal (1983), "Order-Picking in a Rectangular Warehouse:
//!   A Solvable Case of the Traveling Salesman Problem"
//! - Roodbergen & De Koster (2001), "Routing methods for warehouses with
//!   multiple cross aisles"

mod runner;

pub use runner::{SweepResult, SweepRunner};
