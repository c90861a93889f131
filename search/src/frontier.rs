//! The frontier: generated-but-not-yet-expanded nodes, ordered by key.
//!
//! Kept as an explicitly sorted list rather than a heap: dominance pruning
//! removes arbitrary ids after every expansion, and selection must follow
//! the order established by the last stable sort (ascending id among equal
//! keys).

use crate::node::NodeArena;
use crate::strategy::Strategy;

/// Ordered collection of frontier node ids.
#[derive(Debug, Default)]
pub struct Frontier {
    order: Vec<u64>,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append surviving new nodes. Call [`Frontier::sort`] before the next
    /// [`Frontier::pop_best`].
    pub fn merge(&mut self, added: &[u64]) {
        self.order.extend_from_slice(added);
        if self.order.len() > self.high_water {
            self.high_water = self.order.len();
        }
    }

    /// Re-sort by the strategy's ordering key. The sort is stable and the
    /// key ties on id, so equal-key nodes stay in ascending id order.
    pub fn sort<S>(&mut self, arena: &NodeArena<S>, strategy: Strategy) {
        self.order
            .sort_by_key(|&id| strategy.order_key(arena.get(id)));
    }

    /// Remove and return the best node (front of the last sort order).
    pub fn pop_best(&mut self) -> Option<u64> {
        if self.order.is_empty() {
            None
        } else {
            Some(self.order.remove(0))
        }
    }

    /// Drop every id in `pruned` from the frontier, preserving order.
    pub fn remove_ids(&mut self, pruned: &[u64]) {
        if pruned.is_empty() {
            return;
        }
        self.order.retain(|id| !pruned.contains(id));
    }

    /// Current frontier ids in selection order.
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.order
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_of_costs(costs: &[f64]) -> NodeArena<u32> {
        let mut arena = NodeArena::new();
        for (i, &g) in costs.iter().enumerate() {
            arena.create(u32::try_from(i).unwrap(), None, g, None);
        }
        arena
    }

    #[test]
    fn pop_best_returns_lowest_key_first() {
        let arena = arena_of_costs(&[10.0, 5.0, 15.0]);
        let mut frontier = Frontier::new();
        frontier.merge(&[0, 1, 2]);
        frontier.sort(&arena, Strategy::UniformCost);

        assert_eq!(frontier.pop_best(), Some(1));
        assert_eq!(frontier.pop_best(), Some(0));
        assert_eq!(frontier.pop_best(), Some(2));
        assert_eq!(frontier.pop_best(), None);
    }

    #[test]
    fn equal_keys_pop_in_ascending_id_order() {
        let arena = arena_of_costs(&[3.0, 3.0, 3.0]);
        let mut frontier = Frontier::new();
        frontier.merge(&[2, 0, 1]);
        frontier.sort(&arena, Strategy::UniformCost);

        assert_eq!(frontier.ids(), &[0, 1, 2]);
    }

    #[test]
    fn depth_first_pops_newest_id_first() {
        let arena = arena_of_costs(&[1.0, 1.0, 1.0]);
        let mut frontier = Frontier::new();
        frontier.merge(&[0, 1, 2]);
        frontier.sort(&arena, Strategy::DepthFirst);

        assert_eq!(frontier.pop_best(), Some(2));
    }

    #[test]
    fn remove_ids_drops_superseded_nodes() {
        let arena = arena_of_costs(&[1.0, 2.0, 3.0]);
        let mut frontier = Frontier::new();
        frontier.merge(&[0, 1, 2]);
        frontier.sort(&arena, Strategy::UniformCost);
        frontier.remove_ids(&[1]);

        assert_eq!(frontier.ids(), &[0, 2]);
    }

    #[test]
    fn high_water_tracks_max_size() {
        let arena = arena_of_costs(&[1.0, 2.0, 3.0]);
        let mut frontier = Frontier::new();
        frontier.merge(&[0, 1, 2]);
        frontier.sort(&arena, Strategy::UniformCost);
        let _ = frontier.pop_best();
        assert_eq!(frontier.high_water(), 3, "high water must not drop on pop");
    }
}
