//! The expansion step: successor generation, node creation, pruning.

use crate::contract::{Heuristic, SearchDomain};
use crate::frontier::Frontier;
use crate::node::NodeArena;
use crate::prune::{prune, PruneOutcome};
use crate::strategy::Strategy;

/// Expand `node_id`: generate successors, create their nodes, run dominance
/// pruning, and leave the frontier re-sorted by the strategy key.
///
/// The heuristic, when supplied, is evaluated once per successor at node
/// creation; the estimate is recorded on the node and never recomputed.
///
/// # Errors
///
/// Propagates successor-generator and heuristic failures unchanged. Nodes
/// already created in this step stay in the arena (the arena lives only for
/// the failing run), but none of them reach the frontier.
pub fn expand<D: SearchDomain>(
    arena: &mut NodeArena<D::State>,
    domain: &D,
    heuristic: Option<&dyn Heuristic<D>>,
    strategy: Strategy,
    node_id: u64,
    frontier: &mut Frontier,
    explored: &mut Vec<u64>,
) -> Result<PruneOutcome, D::Error> {
    let successors = domain.successors(arena.get(node_id).state())?;

    let mut new = Vec::with_capacity(successors.len());
    for (state, cost) in successors {
        let h = match heuristic {
            Some(h) => Some(h.estimate(&state)?),
            None => None,
        };
        new.push(arena.create(state, Some(node_id), cost, h));
    }

    let outcome = prune(arena, strategy, &new, frontier, explored);
    frontier.sort(arena, strategy);
    Ok(outcome)
}
