//! Domain collaborator contracts.

use std::fmt;
use std::hash::Hash;

/// A search domain: successor generation plus goal detection.
///
/// The engine treats states as opaque. It requires equality and hashing for
/// dominance pruning (live nodes are indexed by state), cloning to hand the
/// solution path back, and `Debug` for diagnostics.
///
/// # Contract
///
/// - `successors` must terminate, must not mutate the input state, and must
///   report non-negative transition costs.
/// - Both callbacks are called synchronously on the searching thread; a
///   heuristic that itself runs a nested search runs to completion before
///   the expansion proceeds.
/// - Callback failures are propagated to the `search` caller unchanged.
pub trait SearchDomain {
    /// The state type explored by the search.
    type State: Clone + Eq + Hash + fmt::Debug;
    /// The domain's failure type.
    type Error: std::error::Error;

    /// All `(successor_state, transition_cost)` pairs reachable from `state`.
    ///
    /// # Errors
    ///
    /// Any domain failure; the engine does not interpret it.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<(Self::State, f64)>, Self::Error>;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// An optional heuristic collaborator for a domain.
///
/// Estimates share the domain's error type: a heuristic is domain code (one
/// variant in the original problem family runs a nested search of its own),
/// and its failures propagate the same way. Estimates are recorded on the
/// node at creation and never recomputed.
pub trait Heuristic<D: SearchDomain + ?Sized> {
    /// Estimate the remaining cost from `state` to a goal.
    ///
    /// # Errors
    ///
    /// Any domain failure; the engine does not interpret it.
    fn estimate(&self, state: &D::State) -> Result<f64, D::Error>;
}

/// Plain closures work as heuristics.
impl<D, F> Heuristic<D> for F
where
    D: SearchDomain,
    F: Fn(&D::State) -> Result<f64, D::Error>,
{
    fn estimate(&self, state: &D::State) -> Result<f64, D::Error> {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Countdown;

    impl SearchDomain for Countdown {
        type State = i32;
        type Error = Infallible;

        fn successors(&self, state: &i32) -> Result<Vec<(i32, f64)>, Infallible> {
            if *state > 0 {
                Ok(vec![(state - 1, 1.0)])
            } else {
                Ok(Vec::new())
            }
        }

        fn is_goal(&self, state: &i32) -> bool {
            *state == 0
        }
    }

    #[test]
    fn closure_satisfies_the_heuristic_contract() {
        let h = |state: &i32| Ok(f64::from(*state));
        let value = Heuristic::<Countdown>::estimate(&h, &4).unwrap();
        assert!((value - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn countdown_domain_reaches_goal_state() {
        let domain = Countdown;
        assert!(domain.is_goal(&0));
        assert!(!domain.is_goal(&2));
        assert_eq!(domain.successors(&2).unwrap(), vec![(1, 1.0)]);
        assert!(domain.successors(&0).unwrap().is_empty());
    }
}
