//! Search entry point, outcomes, and path reconstruction.

use tracing::{debug, info, trace};

use crate::contract::{Heuristic, SearchDomain};
use crate::error::SearchError;
use crate::expand::expand;
use crate::frontier::Frontier;
use crate::node::NodeArena;
use crate::observer::{ExpansionEvent, NodeView, SearchObserver};
use crate::policy::SearchPolicy;

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Total nodes created, root included.
    pub generated: u64,
    /// Total nodes discarded by dominance pruning, all three groups summed.
    pub pruned: u64,
    /// Explored-set size at termination. The goal node, when found, is
    /// counted here: it was selected before the goal test.
    pub explored: usize,
    /// Frontier size at termination.
    pub frontier: usize,
}

/// A successful search: the root-to-goal state sequence and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// States from the initial state to the goal state, inclusive.
    pub path: Vec<S>,
    /// Accumulated path cost (`g` of the goal node).
    pub cost: f64,
    /// Run counters at termination.
    pub stats: SearchStats,
}

/// How a run ended. Exhaustion is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<S> {
    /// A goal state was reached.
    Solved(Solution<S>),
    /// The frontier emptied without satisfying the goal predicate.
    Exhausted {
        /// Run counters at termination.
        stats: SearchStats,
    },
    /// The expansion budget ran out before the frontier did.
    BudgetExceeded {
        /// Run counters at termination.
        stats: SearchStats,
    },
}

impl<S> SearchOutcome<S> {
    /// Whether a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Run counters, whatever the outcome.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Solved(solution) => &solution.stats,
            Self::Exhausted { stats } | Self::BudgetExceeded { stats } => stats,
        }
    }
}

/// Run a graph-search-redo search from `initial_state`.
///
/// The loop selects the best frontier node under the policy's strategy,
/// moves it to the explored set, tests the goal, and otherwise expands it —
/// with dominance pruning re-admitting explored states whenever a cheaper
/// path to them appears. Each call owns its entire node registry; nothing
/// is shared with or survives into other calls.
///
/// `observer`, when supplied, is notified after every expansion with the
/// expanded node and the four pruning groups.
///
/// # Errors
///
/// - [`SearchError::MisconfiguredHeuristic`] if the strategy orders by `h`
///   and `heuristic` is `None`; no node is created.
/// - [`SearchError::Callback`] wrapping any successor-generator or
///   heuristic failure, unchanged.
pub fn search<D: SearchDomain>(
    domain: &D,
    initial_state: D::State,
    policy: &SearchPolicy,
    heuristic: Option<&dyn Heuristic<D>>,
    mut observer: Option<&mut dyn SearchObserver<D::State>>,
) -> Result<SearchOutcome<D::State>, SearchError<D::Error>> {
    policy.validate(heuristic.is_some())?;
    let strategy = policy.strategy;

    let mut arena = NodeArena::new();
    let root_h = match heuristic {
        Some(h) => Some(h.estimate(&initial_state).map_err(SearchError::Callback)?),
        None => None,
    };
    let root = arena.create(initial_state, None, policy.root_cost, root_h);

    let mut frontier = Frontier::new();
    frontier.merge(&[root]);
    frontier.sort(&arena, strategy);
    let mut explored: Vec<u64> = Vec::new();
    let mut prunes: u64 = 0;
    let mut expansions: u64 = 0;

    debug!(%strategy, key = strategy.key_name(), "frontier ordered by key");

    while let Some(x) = frontier.pop_best() {
        explored.push(x);
        debug!(expansion = expansions, "expand {}", strategy.describe(arena.get(x)));

        if domain.is_goal(arena.get(x).state()) {
            let goal = arena.get(x);
            let stats = SearchStats {
                generated: arena.len() as u64,
                pruned: prunes,
                explored: explored.len(),
                frontier: frontier.len(),
            };
            info!(
                path_length = goal.depth(),
                cost = goal.g(),
                generated = stats.generated,
                pruned = stats.pruned,
                explored = stats.explored,
                frontier = stats.frontier,
                "goal reached"
            );
            return Ok(SearchOutcome::Solved(Solution {
                path: reconstruct_path(&arena, x),
                cost: goal.g(),
                stats,
            }));
        }

        if let Some(budget) = policy.expansion_budget {
            if expansions >= budget {
                let stats = SearchStats {
                    generated: arena.len() as u64,
                    pruned: prunes,
                    explored: explored.len(),
                    frontier: frontier.len(),
                };
                info!(budget, "expansion budget exhausted");
                return Ok(SearchOutcome::BudgetExceeded { stats });
            }
        }

        let expansion = expansions;
        let outcome = expand(
            &mut arena,
            domain,
            heuristic,
            strategy,
            x,
            &mut frontier,
            &mut explored,
        )
        .map_err(SearchError::Callback)?;
        prunes += outcome.pruned_count();
        expansions += 1;

        trace!(
            added = outcome.added.len(),
            new_pruned = outcome.new_pruned.len(),
            frontier_pruned = outcome.frontier_pruned.len(),
            explored_pruned = outcome.explored_pruned.len(),
            frontier = frontier.len(),
            "pruning groups"
        );

        if let Some(obs) = observer.as_deref_mut() {
            let event = ExpansionEvent {
                expansion,
                expanded: NodeView::of(arena.get(x), strategy),
                added: ExpansionEvent::views(&arena, strategy, &outcome.added),
                new_pruned: ExpansionEvent::views(&arena, strategy, &outcome.new_pruned),
                frontier_pruned: ExpansionEvent::views(&arena, strategy, &outcome.frontier_pruned),
                explored_pruned: ExpansionEvent::views(&arena, strategy, &outcome.explored_pruned),
                frontier_len: frontier.len(),
                explored_len: explored.len(),
            };
            obs.on_expansion(&event);
        }
    }

    let stats = SearchStats {
        generated: arena.len() as u64,
        pruned: prunes,
        explored: explored.len(),
        frontier: 0,
    };
    info!(
        generated = stats.generated,
        explored = stats.explored,
        "frontier exhausted without a solution"
    );
    Ok(SearchOutcome::Exhausted { stats })
}

/// Walk parent links from `goal` to the root and return the state sequence
/// in root-to-goal order. The result has length `depth + 1`.
#[must_use]
pub fn reconstruct_path<S: Clone>(arena: &NodeArena<S>, goal: u64) -> Vec<S> {
    let mut states = Vec::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        let node = arena.get(id);
        states.push(node.state().clone());
        current = node.parent();
    }
    states.reverse();
    states
}
