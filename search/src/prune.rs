//! Dominance pruning over the new / frontier / explored sets.
//!
//! This is the "redo" in graph-search-redo: an explored state is not final.
//! If a new candidate reaches the same state with a strictly better key, the
//! explored node is discarded and the state becomes eligible for
//! re-expansion. Live nodes are indexed by state, so each expansion costs
//! O(new + frontier + explored) rather than the pairwise-scan quadratic.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::frontier::Frontier;
use crate::node::{NodeArena, OrderKey};
use crate::strategy::Strategy;

/// The four node groups produced by one pruning pass.
///
/// Reported to the observer after every expansion; the engine itself only
/// consumes `added` (already merged into the frontier) and the pruned-group
/// sizes (the run's prune counter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Surviving new candidates, merged into the frontier.
    pub added: Vec<u64>,
    /// New candidates discarded as dominated.
    pub new_pruned: Vec<u64>,
    /// Frontier nodes superseded by a retained new candidate.
    pub frontier_pruned: Vec<u64>,
    /// Explored nodes superseded by a retained new candidate (reopening).
    pub explored_pruned: Vec<u64>,
}

impl PruneOutcome {
    /// Total number of nodes discarded by this pass.
    #[must_use]
    pub fn pruned_count(&self) -> u64 {
        (self.new_pruned.len() + self.frontier_pruned.len() + self.explored_pruned.len()) as u64
    }
}

/// Filter `new` against the current frontier and explored sets.
///
/// Retained-set rules, per state value, lowest key wins:
///
/// - a new candidate is discarded if an explored or frontier node with the
///   same state has key less than or equal to the candidate's key, or if
///   another new candidate with the same state has a strictly lower key, or
///   an equal key and a lower id (stable tie-break);
/// - a frontier or explored node is discarded if a retained new candidate
///   with the same state has a strictly lower key.
///
/// Survivors of `new` are merged into `frontier` (unsorted; the expansion
/// step re-sorts). After this pass, no two live nodes for the same state
/// dominate one another.
pub fn prune<S>(
    arena: &NodeArena<S>,
    strategy: Strategy,
    new: &[u64],
    frontier: &mut Frontier,
    explored: &mut Vec<u64>,
) -> PruneOutcome
where
    S: Clone + Eq + Hash + std::fmt::Debug,
{
    let key_of = |id: u64| strategy.key(arena.get(id));
    let order_of = |id: u64| strategy.order_key(arena.get(id));

    // Best live key per state across frontier ∪ explored.
    let mut best_live: HashMap<&S, f64> = HashMap::new();
    for &id in frontier.ids().iter().chain(explored.iter()) {
        let k = key_of(id);
        best_live
            .entry(arena.get(id).state())
            .and_modify(|best| {
                if k.total_cmp(best) == Ordering::Less {
                    *best = k;
                }
            })
            .or_insert(k);
    }

    // Best new candidate per state, by (key, id): encodes both the
    // strictly-lower-key rule and the equal-key smaller-id tie-break.
    let mut best_new: HashMap<&S, OrderKey> = HashMap::new();
    for &id in new {
        let ord = order_of(id);
        best_new
            .entry(arena.get(id).state())
            .and_modify(|best| {
                if ord < *best {
                    *best = ord;
                }
            })
            .or_insert(ord);
    }

    let mut outcome = PruneOutcome::default();
    // Key of the retained new candidate per state, for supersession checks.
    let mut retained: HashMap<&S, f64> = HashMap::new();

    for &id in new {
        let state = arena.get(id).state();
        let k = key_of(id);
        let dominated_by_live = best_live
            .get(state)
            .is_some_and(|live| live.total_cmp(&k) != Ordering::Greater);
        let dominated_by_new = best_new[state] < order_of(id);
        if dominated_by_live || dominated_by_new {
            outcome.new_pruned.push(id);
        } else {
            retained.insert(state, k);
            outcome.added.push(id);
        }
    }

    // A retained candidate supersedes live nodes for its state with a
    // strictly greater key.
    let superseded = |id: u64| {
        retained
            .get(arena.get(id).state())
            .is_some_and(|new_key| new_key.total_cmp(&key_of(id)) == Ordering::Less)
    };

    outcome.frontier_pruned = frontier.ids().iter().copied().filter(|&id| superseded(id)).collect();
    outcome.explored_pruned = explored.iter().copied().filter(|&id| superseded(id)).collect();

    frontier.remove_ids(&outcome.frontier_pruned);
    explored.retain(|id| !outcome.explored_pruned.contains(id));
    frontier.merge(&outcome.added);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a run snapshot directly: each entry is (state, g), frontier and
    // explored are index lists into the created nodes.
    struct Setup {
        arena: NodeArena<&'static str>,
        frontier: Frontier,
        explored: Vec<u64>,
    }

    fn setup(nodes: &[(&'static str, f64)], frontier: &[u64], explored: &[u64]) -> Setup {
        let mut arena = NodeArena::new();
        for &(state, g) in nodes {
            arena.create(state, None, g, None);
        }
        let mut f = Frontier::new();
        f.merge(frontier);
        f.sort(&arena, Strategy::UniformCost);
        Setup {
            arena,
            frontier: f,
            explored: explored.to_vec(),
        }
    }

    #[test]
    fn candidate_dominated_by_explored_is_new_pruned() {
        // Node 0 explored at g=1; node 1 is a new candidate for the same
        // state at g=2.
        let mut s = setup(&[("a", 1.0), ("a", 2.0)], &[], &[0]);
        let out = prune(&s.arena, Strategy::UniformCost, &[1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.new_pruned, vec![1]);
        assert!(out.added.is_empty());
        assert_eq!(s.explored, vec![0]);
    }

    #[test]
    fn equal_key_against_live_node_prunes_the_candidate() {
        // Dominance is <=: a tie with an existing node discards the newcomer.
        let mut s = setup(&[("a", 2.0), ("a", 2.0)], &[0], &[]);
        let out = prune(&s.arena, Strategy::UniformCost, &[1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.new_pruned, vec![1]);
        assert_eq!(s.frontier.ids(), &[0]);
    }

    #[test]
    fn cheaper_candidate_supersedes_frontier_node() {
        let mut s = setup(&[("b", 5.0), ("b", 2.0)], &[0], &[]);
        let out = prune(&s.arena, Strategy::UniformCost, &[1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.added, vec![1]);
        assert_eq!(out.frontier_pruned, vec![0]);
        assert_eq!(s.frontier.ids(), &[1]);
    }

    #[test]
    fn cheaper_candidate_reopens_explored_state() {
        let mut s = setup(&[("b", 5.0), ("b", 2.0)], &[], &[0]);
        let out = prune(&s.arena, Strategy::UniformCost, &[1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.explored_pruned, vec![0], "explored node must be removed");
        assert!(s.explored.is_empty());
        assert_eq!(s.frontier.ids(), &[1], "state must be back on the frontier");
    }

    #[test]
    fn among_new_duplicates_the_strictly_cheaper_wins() {
        let mut s = setup(&[("c", 3.0), ("c", 1.0)], &[], &[]);
        let out = prune(&s.arena, Strategy::UniformCost, &[0, 1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.added, vec![1]);
        assert_eq!(out.new_pruned, vec![0]);
    }

    #[test]
    fn among_equal_new_duplicates_the_lower_id_wins() {
        let mut s = setup(&[("c", 3.0), ("c", 3.0)], &[], &[]);
        let out = prune(&s.arena, Strategy::UniformCost, &[0, 1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.added, vec![0]);
        assert_eq!(out.new_pruned, vec![1]);
    }

    #[test]
    fn no_two_survivors_share_a_state() {
        // Mixed bag: duplicates inside new, against frontier, and against
        // explored, across three states.
        let mut s = setup(
            &[
                ("a", 4.0), // 0: frontier
                ("b", 1.0), // 1: explored
                ("a", 2.0), // 2: new, supersedes 0
                ("a", 3.0), // 3: new, loses to 2
                ("b", 6.0), // 4: new, loses to 1
                ("c", 9.0), // 5: new, unique
            ],
            &[0],
            &[1],
        );
        let out = prune(
            &s.arena,
            Strategy::UniformCost,
            &[2, 3, 4, 5],
            &mut s.frontier,
            &mut s.explored,
        );

        assert_eq!(out.added, vec![2, 5]);
        assert_eq!(out.new_pruned, vec![3, 4]);
        assert_eq!(out.frontier_pruned, vec![0]);
        assert!(out.explored_pruned.is_empty());

        let mut seen = std::collections::HashSet::new();
        for &id in s.frontier.ids().iter().chain(s.explored.iter()) {
            assert!(
                seen.insert(*s.arena.get(id).state()),
                "state {:?} survived twice",
                s.arena.get(id).state()
            );
        }
    }

    #[test]
    fn unrelated_states_are_untouched() {
        let mut s = setup(&[("a", 1.0), ("b", 9.0)], &[0], &[]);
        let out = prune(&s.arena, Strategy::UniformCost, &[1], &mut s.frontier, &mut s.explored);

        assert_eq!(out.added, vec![1]);
        assert_eq!(out.pruned_count(), 0);
        assert_eq!(s.frontier.len(), 2);
    }

    #[test]
    fn pruned_count_sums_all_three_groups() {
        let out = PruneOutcome {
            added: vec![1],
            new_pruned: vec![2, 3],
            frontier_pruned: vec![4],
            explored_pruned: vec![5, 6, 7],
        };
        assert_eq!(out.pruned_count(), 6);
    }
}
