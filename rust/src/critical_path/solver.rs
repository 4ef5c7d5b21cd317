//! Longest-path solver over a task graph.
//!
//! Kahn's algorithm orders the tasks (and detects cycles), then a single
//! forward pass over that order computes longest-path distances and the
//! predecessor each distance came through.
//!
//! Tie-breaks depend only on supplied order, never on hashing:
//! - tasks that become ready together are emitted in arrival order
//! - among equally long predecessors, the earliest-listed edge wins
//! - among equally long path ends, the earliest task in topological order wins

use std::collections::VecDeque;
use thiserror::Error;

use crate::interner::TaskIdInt;
use crate::{log_debug, log_summary};

use super::graph::TaskGraph;
use super::types::{DurationSource, LongestPath, PathOutcome};

/// The task graph contains at least one cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Circular dependency detected: {unordered} of {total} tasks could not be ordered")]
pub struct CycleDetected {
    pub unordered: usize,
    pub total: usize,
}

/// Order tasks so every predecessor comes before its successors.
///
/// The queue is seeded with zero in-degree tasks in snapshot order, and newly
/// ready tasks are appended to the back.
pub fn topological_order(graph: &TaskGraph) -> Result<Vec<TaskIdInt>, CycleDetected> {
    let n = graph.len();
    let mut in_degree = graph.indegrees().to_vec();

    let mut queue: VecDeque<TaskIdInt> = (0..n as TaskIdInt)
        .filter(|&id| in_degree[id as usize] == 0)
        .collect();

    let mut order: Vec<TaskIdInt> = Vec::with_capacity(n);

    while let Some(task_id) = queue.pop_front() {
        order.push(task_id);

        for &next in graph.successor_ids(task_id) {
            let degree = &mut in_degree[next as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() != n {
        return Err(CycleDetected {
            unordered: n - order.len(),
            total: n,
        });
    }

    Ok(order)
}

/// Distances and back-links from one forward pass.
#[derive(Debug, Clone)]
pub(crate) struct PathTrace {
    /// Longest path length ending at each task, indexed by position.
    pub distance: Vec<i64>,
    /// Predecessor the distance came through, indexed by position.
    pub prev: Vec<Option<TaskIdInt>>,
    /// Task where the longest path ends (None for an empty graph).
    pub end: Option<TaskIdInt>,
}

/// Forward pass over a topological order.
///
/// A predecessor only becomes `prev` if its distance is strictly greater than
/// the best seen so far, starting from 0. Predecessors with distance 0 are
/// therefore never linked.
pub(crate) fn trace_longest_path(
    graph: &TaskGraph,
    order: &[TaskIdInt],
    source: DurationSource,
    verbosity: u8,
) -> PathTrace {
    let n = graph.len();
    let mut distance = vec![0i64; n];
    let mut prev: Vec<Option<TaskIdInt>> = vec![None; n];

    for &node in order {
        let mut best = 0i64;
        let mut best_prev = None;
        for &pred in graph.predecessor_ids(node) {
            let candidate = distance[pred as usize];
            if candidate > best {
                best = candidate;
                best_prev = Some(pred);
            }
        }

        let idx = node as usize;
        distance[idx] = best.saturating_add(graph.duration(node, source));
        prev[idx] = best_prev;

        log_debug!(
            verbosity,
            "[{}] {:?}: distance={} via {:?}",
            source.label(),
            graph.index().resolve(node).unwrap_or("?"),
            distance[idx],
            best_prev.and_then(|p| graph.index().resolve(p))
        );
    }

    // Leftmost maximum in topological order
    let mut end: Option<TaskIdInt> = None;
    for &node in order {
        match end {
            Some(current) if distance[node as usize] <= distance[current as usize] => {}
            _ => end = Some(node),
        }
    }

    PathTrace {
        distance,
        prev,
        end,
    }
}

/// Walk back-links from the end task to the start of the path.
fn reconstruct_path(graph: &TaskGraph, trace: &PathTrace, verbosity: u8) -> Vec<TaskIdInt> {
    let mut path = Vec::new();
    let mut current = trace.end;
    while let Some(node) = current {
        log_debug!(
            verbosity,
            "[path] {:?} at distance {}",
            graph.index().resolve(node).unwrap_or("?"),
            trace.distance[node as usize]
        );
        path.push(node);
        current = trace.prev[node as usize];
    }
    path.reverse();
    path
}

/// Longest path for one duration source over an already computed order.
pub fn longest_path(
    graph: &TaskGraph,
    order: &[TaskIdInt],
    source: DurationSource,
    verbosity: u8,
) -> LongestPath {
    let trace = trace_longest_path(graph, order, source, verbosity);
    let total_length = trace
        .end
        .map(|end| trace.distance[end as usize])
        .unwrap_or(0);
    let path = graph.index().resolve_all(&reconstruct_path(graph, &trace, verbosity));

    log_summary!(
        verbosity,
        "[{}] Critical path length {} over {} tasks",
        source.label(),
        total_length,
        path.len()
    );

    LongestPath { total_length, path }
}

/// Run one full pass: order the graph, then find its longest path.
pub fn solve(graph: &TaskGraph, source: DurationSource, verbosity: u8) -> PathOutcome {
    match topological_order(graph) {
        Ok(order) => PathOutcome::Acyclic(longest_path(graph, &order, source, verbosity)),
        Err(cycle) => {
            log_summary!(verbosity, "[{}] {}", source.label(), cycle);
            PathOutcome::CycleDetected
        }
    }
}
