//! Run configuration.

use crate::error::SearchError;
use crate::strategy::Strategy;

/// Configuration for one search run: the ordering strategy, the root node's
/// initial cost, and an optional expansion budget.
///
/// The budget is the caller's way to bound work: the driver checks it
/// between selection and expansion, so a run never expands more than
/// `expansion_budget` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPolicy {
    /// Frontier ordering strategy.
    pub strategy: Strategy,
    /// `g` of the root node. Normally zero.
    pub root_cost: f64,
    /// Hard cap on node expansions; `None` means unbounded.
    pub expansion_budget: Option<u64>,
}

impl SearchPolicy {
    /// A policy with the given strategy, zero root cost, and no budget.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            root_cost: 0.0,
            expansion_budget: None,
        }
    }

    /// Set the expansion budget.
    #[must_use]
    pub fn with_expansion_budget(mut self, budget: u64) -> Self {
        self.expansion_budget = Some(budget);
        self
    }

    /// Set the root node's initial cost.
    #[must_use]
    pub fn with_root_cost(mut self, cost: f64) -> Self {
        self.root_cost = cost;
        self
    }

    /// Pre-flight validation: a heuristic-dependent strategy without a
    /// heuristic is a configuration error, reported before any node exists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MisconfiguredHeuristic`] if `strategy` orders
    /// by `h` or `f` and `has_heuristic` is false.
    pub fn validate<E>(&self, has_heuristic: bool) -> Result<(), SearchError<E>> {
        if self.strategy.requires_heuristic() && !has_heuristic {
            return Err(SearchError::MisconfiguredHeuristic {
                strategy: self.strategy,
                key: self.strategy.key_name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn default_construction_is_unbounded_with_zero_root_cost() {
        let policy = SearchPolicy::new(Strategy::UniformCost);
        assert_eq!(policy.expansion_budget, None);
        assert!(policy.root_cost.abs() < f64::EPSILON);
    }

    #[test]
    fn heuristic_free_strategies_validate_without_heuristic() {
        for strategy in [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::UniformCost,
        ] {
            let policy = SearchPolicy::new(strategy);
            assert!(policy.validate::<Infallible>(false).is_ok());
        }
    }

    #[test]
    fn heuristic_strategies_fail_fast_without_heuristic() {
        for strategy in [Strategy::GreedyBestFirst, Strategy::AStar] {
            let policy = SearchPolicy::new(strategy);
            let err = policy.validate::<Infallible>(false).unwrap_err();
            assert!(
                matches!(
                    err,
                    SearchError::MisconfiguredHeuristic { strategy: s, .. } if s == strategy
                ),
                "expected MisconfiguredHeuristic, got {err:?}"
            );
            assert!(policy.validate::<Infallible>(true).is_ok());
        }
    }

    #[test]
    fn builder_methods_set_budget_and_root_cost() {
        let policy = SearchPolicy::new(Strategy::AStar)
            .with_expansion_budget(50)
            .with_root_cost(1.5);
        assert_eq!(policy.expansion_budget, Some(50));
        assert!((policy.root_cost - 1.5).abs() < f64::EPSILON);
    }
}
