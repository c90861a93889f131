//! Typed search errors.
//!
//! `SearchError` covers configuration failures and domain-callback failures
//! only. Frontier exhaustion without a goal is a normal outcome
//! ([`crate::search::SearchOutcome::Exhausted`]), never an error, and no
//! internal failure is ever downgraded to it.

use thiserror::Error;

use crate::strategy::Strategy;

/// Unknown strategy identifier at the parse boundary.
///
/// Past this boundary strategies are the closed [`Strategy`] enum, so this
/// is the only place an invalid strategy can exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search strategy `{name}` (expected breadth-first, depth-first, uniform-cost, greedy-best-first, or a*)")]
pub struct InvalidStrategy {
    /// The rejected identifier.
    pub name: String,
}

/// Failure of a search run, generic over the domain's error type.
#[derive(Debug, Error)]
pub enum SearchError<E> {
    /// A heuristic-dependent strategy was selected without a heuristic.
    /// Reported before any node is created.
    #[error("strategy `{strategy}` orders by `{key}` but no heuristic was supplied")]
    MisconfiguredHeuristic {
        /// The offending strategy.
        strategy: Strategy,
        /// The strategy's ordering quantity (`h` or `f`).
        key: &'static str,
    },
    /// A successor-generator or heuristic callback failed. Propagated to the
    /// caller unchanged; the engine cannot assess partial-state corruption
    /// from a failed domain callback, so it neither retries nor suppresses.
    #[error(transparent)]
    Callback(E),
}
