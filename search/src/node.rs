//! Search nodes and the run-scoped node arena.

use std::fmt;

/// An immutable node in the search tree.
///
/// Nodes are created exclusively through [`NodeArena::create`] and never
/// mutated afterwards (a superseded node is discarded, not repaired). The
/// `children` list is a back-reference index maintained by the arena; the
/// engine never traverses it.
#[derive(Debug, Clone)]
pub struct Node<S> {
    id: u64,
    parent: Option<u64>,
    children: Vec<u64>,
    state: S,
    depth: u32,
    g: f64,
    h: Option<f64>,
}

impl<S> Node<S> {
    /// Monotonic node identifier, unique within one run.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Parent node id (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<u64> {
        self.parent
    }

    /// Ids of the nodes created from this node, in creation order.
    #[must_use]
    pub fn children(&self) -> &[u64] {
        &self.children
    }

    /// The domain state at this node.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Accumulated path cost from the root.
    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate recorded at creation, if a heuristic was supplied.
    #[must_use]
    pub fn h(&self) -> Option<f64> {
        self.h
    }

    /// `g + h`, the A* ordering value. Absent `h` counts as infinite.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.g + self.h.unwrap_or(f64::INFINITY)
    }
}

/// Owner of every node created during one search run.
///
/// The arena is the run's node registry: ids are indices into it, assigned
/// in a single strictly increasing sequence, and the whole tree is dropped
/// with the arena when the run ends. Parent/child links are ids rather than
/// references, so the tree has no ownership cycles.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a node. This is the only constructor for [`Node`].
    ///
    /// `depth` and `g` are derived from `parent`: the root (no parent) gets
    /// depth 0 and `g = cost`, a child gets `parent.depth + 1` and
    /// `parent.g + cost`. The new node is registered in the parent's
    /// `children` list. Returns the fresh id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an id previously returned by this arena.
    pub fn create(&mut self, state: S, parent: Option<u64>, cost: f64, h: Option<f64>) -> u64 {
        let id = self.nodes.len() as u64;
        let (depth, g) = match parent {
            Some(pid) => {
                let p = &self.nodes[usize::try_from(pid).expect("parent id out of range")];
                (p.depth + 1, p.g + cost)
            }
            None => (0, cost),
        };
        self.nodes.push(Node {
            id,
            parent,
            children: Vec::new(),
            state,
            depth,
            g,
            h,
        });
        if let Some(pid) = parent {
            self.nodes[usize::try_from(pid).expect("parent id out of range")]
                .children
                .push(id);
        }
        id
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this arena's [`NodeArena::create`].
    #[must_use]
    pub fn get(&self, id: u64) -> &Node<S> {
        &self.nodes[usize::try_from(id).expect("node id out of range")]
    }

    /// Total number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether any node has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<S>> {
        self.nodes.iter()
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The frontier ordering key: `(key, id)`.
///
/// Lower strategy key first; ties broken by older id, so selection order is
/// stable under re-sorts. `f64` keys are ordered with `total_cmp`, which
/// gives a total order even for non-finite values.
#[derive(Debug, Clone, Copy)]
pub struct OrderKey {
    pub key: f64,
    pub id: u64,
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key
            .total_cmp(&other.key)
            .then(self.id.cmp(&other.id))
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {:.2}", self.id, self.key)
    }
}
