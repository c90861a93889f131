//! Redo Harness: domain collaborators for the search engine.
//!
//! The engine treats successor generation, goal testing, and heuristics as
//! opaque callbacks; this crate supplies concrete ones — worlds and their
//! heuristics — for integration tests and benchmarks. The harness holds no
//! search logic: worlds produce domain data only.

#![forbid(unsafe_code)]

pub mod heuristics;
pub mod worlds;
