//! Critical path computation.
//!
//! Builds a precedence graph from a project's task snapshot, detects cycles,
//! and finds the longest duration-weighted path through it. Each call is a
//! fresh computation over the snapshot it is given; nothing is cached.

mod analysis;
mod graph;
mod solver;
mod types;

pub use analysis::analyze;
pub use graph::TaskGraph;
pub use solver::{longest_path, solve, topological_order, CycleDetected};
pub use types::{DurationSource, LongestPath, PathOutcome};
