//! Graph-search-redo: best-first state-space search with reopening.
//!
//! The engine explores a caller-defined state space under one of five
//! node-priority strategies (breadth-first, depth-first, uniform-cost,
//! greedy-best-first, A*). Unlike textbook graph search it keeps explored
//! states revisable: dominance pruning runs over the new, frontier, and
//! explored sets after every expansion, and an explored state whose key is
//! beaten by a newly found path is evicted and re-admitted to the frontier.
//!
//! Domain knowledge (successor generation, goal testing, heuristics) enters
//! only through the [`SearchDomain`] and [`Heuristic`] traits; drawing and
//! tracing only leave through the [`SearchObserver`] seam.
//!
//! # Key types
//!
//! - [`search`] — run one search; each call owns its entire node registry
//! - [`Strategy`] — the closed strategy table
//! - [`SearchPolicy`] — strategy, root cost, and expansion budget
//! - [`SearchOutcome`] — solved / exhausted / budget-exceeded
//! - [`TraceLog`] — recording observer with deterministic JSON rendering

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod node;
pub mod observer;
pub mod policy;
pub mod prune;
pub mod search;
pub mod strategy;
pub mod trace;

pub use contract::{Heuristic, SearchDomain};
pub use error::{InvalidStrategy, SearchError};
pub use node::{Node, NodeArena, OrderKey};
pub use observer::{ExpansionEvent, NodeView, SearchObserver};
pub use policy::SearchPolicy;
pub use prune::PruneOutcome;
pub use search::{reconstruct_path, search, SearchOutcome, SearchStats, Solution};
pub use strategy::Strategy;
pub use trace::TraceLog;
