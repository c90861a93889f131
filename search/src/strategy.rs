//! The strategy table: a closed set of frontier orderings.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidStrategy;
use crate::node::{Node, OrderKey};

/// A node-priority strategy. Lower key value means expanded sooner.
///
/// The set is closed: every strategy carries its key extraction here, so an
/// unknown strategy is unrepresentable past the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Key `id` ascending — approximates FIFO generation order.
    BreadthFirst,
    /// Key `id` descending — approximates LIFO generation order.
    DepthFirst,
    /// Key `g` ascending — Dijkstra-style cost ordering.
    UniformCost,
    /// Key `h` ascending — pure heuristic ordering.
    GreedyBestFirst,
    /// Key `g + h` ascending.
    AStar,
}

impl Strategy {
    /// All strategies, in table order.
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    /// The priority key of `node` under this strategy.
    ///
    /// A missing `h` maps to infinity (sorts last). Policy validation
    /// rejects heuristic-dependent strategies without a heuristic before any
    /// node exists, so the infinite branch is unreachable in a validated run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn key<S>(self, node: &Node<S>) -> f64 {
        match self {
            Self::BreadthFirst => node.id() as f64,
            Self::DepthFirst => -(node.id() as f64),
            Self::UniformCost => node.g(),
            Self::GreedyBestFirst => node.h().unwrap_or(f64::INFINITY),
            Self::AStar => node.f(),
        }
    }

    /// The full ordering key `(key, id)` used for frontier sorting.
    #[must_use]
    pub fn order_key<S>(self, node: &Node<S>) -> OrderKey {
        OrderKey {
            key: self.key(node),
            id: node.id(),
        }
    }

    /// Whether the key depends on the heuristic estimate.
    #[must_use]
    pub fn requires_heuristic(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Short name of the ordering quantity, for diagnostics.
    #[must_use]
    pub fn key_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "id",
            Self::DepthFirst => "-id",
            Self::UniformCost => "g",
            Self::GreedyBestFirst => "h",
            Self::AStar => "f",
        }
    }

    /// One-line description of a node under this strategy, leading with the
    /// quantity the strategy orders by.
    #[must_use]
    pub fn describe<S: fmt::Debug>(self, node: &Node<S>) -> String {
        let id = node.id();
        let d = node.depth();
        let g = node.g();
        match self {
            Self::BreadthFirst | Self::DepthFirst => {
                format!("#{id}: d {d}, g {g:.2}, state {:?}", node.state())
            }
            Self::UniformCost => {
                format!("#{id}: g {g:.2}, d {d}, state {:?}", node.state())
            }
            Self::GreedyBestFirst => {
                let h = node.h().unwrap_or(f64::INFINITY);
                format!("#{id}: h {h:.2}, d {d}, g {g:.2}, state {:?}", node.state())
            }
            Self::AStar => {
                let h = node.h().unwrap_or(f64::INFINITY);
                let f = node.f();
                format!(
                    "#{id}: f {f:.2}, g {g:.2}, h {h:.2}, d {d}, state {:?}",
                    node.state()
                )
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::UniformCost => "uniform-cost",
            Self::GreedyBestFirst => "greedy-best-first",
            Self::AStar => "a*",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = InvalidStrategy;

    /// Accepts both the long identifiers (`breadth-first`, …, `a*`) and the
    /// traditional short ones (`bf`, `df`, `uc`, `gbf`, `astar`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth-first" | "bf" => Ok(Self::BreadthFirst),
            "depth-first" | "df" => Ok(Self::DepthFirst),
            "uniform-cost" | "uc" => Ok(Self::UniformCost),
            "greedy-best-first" | "gbf" => Ok(Self::GreedyBestFirst),
            "a*" | "astar" => Ok(Self::AStar),
            other => Err(InvalidStrategy {
                name: other.to_string(),
            }),
        }
    }
}
