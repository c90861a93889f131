//! `TraceLog`: a recording observer with deterministic JSON rendering.
//!
//! The log is the run's instrumentation artifact: one entry per expansion,
//! holding owned snapshots of the expanded node and the four pruning
//! groups. States are captured via their `Debug` rendering, so the log has
//! no generic parameter and outlives the run's arena.

use std::fmt;

use serde_json::{json, Value};

use crate::observer::{ExpansionEvent, NodeView, SearchObserver};

/// Owned snapshot of one node at the moment it was reported.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceNode {
    pub id: u64,
    pub parent: Option<u64>,
    /// `Debug` rendering of the state.
    pub state: String,
    pub depth: u32,
    pub g: f64,
    pub h: Option<f64>,
    pub key: f64,
}

impl TraceNode {
    fn of<S: fmt::Debug>(view: &NodeView<'_, S>) -> Self {
        Self {
            id: view.id,
            parent: view.parent,
            state: format!("{:?}", view.state),
            depth: view.depth,
            g: view.g,
            h: view.h,
            key: view.key,
        }
    }
}

/// One recorded expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub expansion: u64,
    pub expanded: TraceNode,
    pub added: Vec<TraceNode>,
    pub new_pruned: Vec<TraceNode>,
    pub frontier_pruned: Vec<TraceNode>,
    pub explored_pruned: Vec<TraceNode>,
    pub frontier_len: usize,
    pub explored_len: usize,
}

/// Recording observer accumulating events and running prune totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
    added_total: u64,
    new_pruned_total: u64,
    frontier_pruned_total: u64,
    explored_pruned_total: u64,
}

impl TraceLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, in expansion order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of expansions recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether anything was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Running total of discarded nodes across all three pruned groups.
    #[must_use]
    pub fn pruned_total(&self) -> u64 {
        self.new_pruned_total + self.frontier_pruned_total + self.explored_pruned_total
    }

    /// Running total of explored nodes evicted by reopening.
    #[must_use]
    pub fn reopened_total(&self) -> u64 {
        self.explored_pruned_total
    }

    /// Render the log as a JSON value. Keys are written in sorted order, so
    /// the rendering is deterministic for a given log.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "totals": {
                "added": self.added_total,
                "explored_pruned": self.explored_pruned_total,
                "frontier_pruned": self.frontier_pruned_total,
                "new_pruned": self.new_pruned_total,
            },
        })
    }

    /// Serialize the log to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` serialization failure.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.to_json_value())
    }
}

impl<S: fmt::Debug> SearchObserver<S> for TraceLog {
    fn on_expansion(&mut self, event: &ExpansionEvent<'_, S>) {
        let snapshot = |views: &[NodeView<'_, S>]| views.iter().map(TraceNode::of).collect();
        self.added_total += event.added.len() as u64;
        self.new_pruned_total += event.new_pruned.len() as u64;
        self.frontier_pruned_total += event.frontier_pruned.len() as u64;
        self.explored_pruned_total += event.explored_pruned.len() as u64;
        self.events.push(TraceEvent {
            expansion: event.expansion,
            expanded: TraceNode::of(&event.expanded),
            added: snapshot(&event.added),
            new_pruned: snapshot(&event.new_pruned),
            frontier_pruned: snapshot(&event.frontier_pruned),
            explored_pruned: snapshot(&event.explored_pruned),
            frontier_len: event.frontier_len,
            explored_len: event.explored_len,
        });
    }
}

fn node_to_json(n: &TraceNode) -> Value {
    json!({
        "depth": n.depth,
        "g": n.g,
        "h": n.h,
        "id": n.id,
        "key": n.key,
        "parent": n.parent,
        "state": n.state,
    })
}

fn event_to_json(e: &TraceEvent) -> Value {
    json!({
        "added": e.added.iter().map(node_to_json).collect::<Vec<_>>(),
        "expanded": node_to_json(&e.expanded),
        "expansion": e.expansion,
        "explored_len": e.explored_len,
        "explored_pruned": e.explored_pruned.iter().map(node_to_json).collect::<Vec<_>>(),
        "frontier_len": e.frontier_len,
        "frontier_pruned": e.frontier_pruned.iter().map(node_to_json).collect::<Vec<_>>(),
        "new_pruned": e.new_pruned.iter().map(node_to_json).collect::<Vec<_>>(),
    })
}
