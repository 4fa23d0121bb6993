//! Strategy selection facade.
//!
//! Callers that do not want to drive [`ExactRunner`](crate::exact::ExactRunner)
//! or [`SweepRunner`](crate::sweep::SweepRunner) directly pick a [`Strategy`]
//! and call [`solve`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exact::{ExactConfig, ExactRunner, SolveStatus};
use crate::layout::WarehouseLayout;
use crate::picklist::PickList;
use crate::route::Route;
use crate::sweep::SweepRunner;

/// Route-solving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Serpentine aisle sweep. Scales to any pick-list size.
    #[default]
    Sweep,

    /// Exhaustive permutation search. Optimal, bounded to small lists.
    Exact,

    /// Exact search when the list fits its `max_items` bound, sweep
    /// otherwise.
    Auto,
}

/// Configuration for [`solve`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveConfig {
    pub strategy: Strategy,

    /// Exact-solver settings, used by `Exact` and `Auto`.
    pub exact: ExactConfig,
}

impl SolveConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_exact(mut self, exact: ExactConfig) -> Self {
        self.exact = exact;
        self
    }
}

/// A solved route plus how it was produced.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutePlan {
    pub route: Route,

    /// The strategy that actually produced the route (`Auto` resolves to
    /// one of the two concrete strategies).
    pub strategy: Strategy,

    pub status: SolveStatus,

    /// Candidate orders evaluated; zero when the sweep produced the route.
    pub permutations_evaluated: u64,
}

/// Solves a pick list against a layout with the configured strategy.
pub fn solve(list: &PickList, layout: &WarehouseLayout, config: &SolveConfig) -> Result<RoutePlan> {
    let use_exact = match config.strategy {
        Strategy::Exact => true,
        Strategy::Sweep => false,
        Strategy::Auto => config.exact.is_within_limit(list.len()),
    };

    if use_exact {
        let result = ExactRunner::run(list, &config.exact)?;
        Ok(RoutePlan {
            route: result.route,
            strategy: Strategy::Exact,
            status: result.status,
            permutations_evaluated: result.permutations_evaluated,
        })
    } else {
        let result = SweepRunner::run(list, layout);
        Ok(RoutePlan {
            route: result.route,
            strategy: Strategy::Sweep,
            status: SolveStatus::Feasible,
            permutations_evaluated: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::picklist::PickItem;

    fn small_setup() -> (PickList, WarehouseLayout) {
        let catalog = vec![Position::new(2.0, 0.0), Position::new(5.0, 2.0)];
        let layout = WarehouseLayout::build(catalog.clone());
        let origin = Position::new(0.0, 0.0);
        let mut list = PickList::new(origin, origin);
        list.insert(PickItem::new("A", catalog[0]));
        list.insert(PickItem::new("B", catalog[1]));
        (list, layout)
    }

    #[test]
    fn test_default_strategy_is_sweep() {
        let (list, layout) = small_setup();
        let plan = solve(&list, &layout, &SolveConfig::default()).unwrap();
        assert_eq!(plan.strategy, Strategy::Sweep);
        assert_eq!(plan.status, SolveStatus::Feasible);
        assert_eq!(plan.permutations_evaluated, 0);
    }

    #[test]
    fn test_exact_strategy_reports_search_stats() {
        let (list, layout) = small_setup();
        let config = SolveConfig::default().with_strategy(Strategy::Exact);
        let plan = solve(&list, &layout, &config).unwrap();
        assert_eq!(plan.strategy, Strategy::Exact);
        assert_eq!(plan.status, SolveStatus::Optimal);
        assert_eq!(plan.permutations_evaluated, 2);
    }

    #[test]
    fn test_auto_picks_exact_for_small_lists() {
        let (list, layout) = small_setup();
        let config = SolveConfig::default().with_strategy(Strategy::Auto);
        let plan = solve(&list, &layout, &config).unwrap();
        assert_eq!(plan.strategy, Strategy::Exact);
    }

    #[test]
    fn test_auto_falls_back_to_sweep_for_large_lists() {
        let catalog: Vec<Position> = (0..12).map(|i| Position::new(f64::from(i), 0.0)).collect();
        let layout = WarehouseLayout::build(catalog.clone());
        let origin = Position::new(0.0, 0.0);
        let mut list = PickList::new(origin, origin);
        for (i, position) in catalog.iter().enumerate() {
            list.insert(PickItem::new(format!("P{i:02}"), *position));
        }

        let config = SolveConfig::default()
            .with_strategy(Strategy::Auto)
            .with_exact(ExactConfig::default().with_max_items(10));
        let plan = solve(&list, &layout, &config).unwrap();
        assert_eq!(plan.strategy, Strategy::Sweep);
        assert_eq!(plan.route.picked_ids().count(), 12);
    }

    #[test]
    fn test_exact_strategy_propagates_the_bound_error() {
        let (list, layout) = small_setup();
        let config = SolveConfig::default()
            .with_strategy(Strategy::Exact)
            .with_exact(ExactConfig::default().with_max_items(1));
        assert!(solve(&list, &layout, &config).is_err());
    }
}
