//! Instrumentation seam: post-expansion observer.
//!
//! The observer is notify-only. The driver reports each expansion and the
//! four pruning groups as read-only views and then moves on; nothing the
//! observer does can alter the search.

use crate::node::{Node, NodeArena};
use crate::strategy::Strategy;

/// Read-only view of one node, as handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a, S> {
    /// Node id.
    pub id: u64,
    /// Parent id, `None` for the root.
    pub parent: Option<u64>,
    /// The node's state.
    pub state: &'a S,
    /// Tree depth.
    pub depth: u32,
    /// Accumulated path cost.
    pub g: f64,
    /// Heuristic estimate, if one was recorded.
    pub h: Option<f64>,
    /// Priority key under the run's strategy.
    pub key: f64,
}

impl<'a, S> NodeView<'a, S> {
    pub(crate) fn of(node: &'a Node<S>, strategy: Strategy) -> Self {
        Self {
            id: node.id(),
            parent: node.parent(),
            state: node.state(),
            depth: node.depth(),
            g: node.g(),
            h: node.h(),
            key: strategy.key(node),
        }
    }
}

/// Everything reported about one expansion.
#[derive(Debug)]
pub struct ExpansionEvent<'a, S> {
    /// Zero-based expansion counter.
    pub expansion: u64,
    /// The node that was just expanded.
    pub expanded: NodeView<'a, S>,
    /// Surviving new candidates, now on the frontier.
    pub added: Vec<NodeView<'a, S>>,
    /// New candidates discarded as dominated.
    pub new_pruned: Vec<NodeView<'a, S>>,
    /// Frontier nodes superseded by a new candidate.
    pub frontier_pruned: Vec<NodeView<'a, S>>,
    /// Explored nodes superseded by a new candidate (reopened states).
    pub explored_pruned: Vec<NodeView<'a, S>>,
    /// Frontier size after the expansion.
    pub frontier_len: usize,
    /// Explored size after the expansion.
    pub explored_len: usize,
}

impl<S> ExpansionEvent<'_, S> {
    pub(crate) fn views<'a>(
        arena: &'a NodeArena<S>,
        strategy: Strategy,
        ids: &[u64],
    ) -> Vec<NodeView<'a, S>> {
        ids.iter()
            .map(|&id| NodeView::of(arena.get(id), strategy))
            .collect()
    }
}

/// Receiver for per-expansion reports.
///
/// Implementations must return promptly; the engine calls them synchronously
/// between expansions and neither blocks on nor branches on their behavior.
pub trait SearchObserver<S> {
    /// Called once after each expansion, with the pruning groups of that
    /// expansion.
    fn on_expansion(&mut self, event: &ExpansionEvent<'_, S>);
}
