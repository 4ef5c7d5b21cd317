//! Task graph construction from a project snapshot.

use crate::interner::{TaskIdInt, TaskIndex};
use crate::models::{Task, TaskDependency};
use crate::{log_debug, log_graph};

use super::types::DurationSource;

/// Adjacency structures for one project snapshot.
///
/// Task positions follow the order tasks were supplied. Successor and
/// predecessor lists keep the order edges were supplied. Edges naming a task
/// outside the snapshot are discarded.
#[derive(Clone, Debug, Default)]
pub struct TaskGraph {
    index: TaskIndex,
    /// Task record indexed by position.
    records: Vec<Task>,
    successors: Vec<Vec<TaskIdInt>>,
    predecessors: Vec<Vec<TaskIdInt>>,
    indegree: Vec<usize>,
    dropped_edges: usize,
}

impl TaskGraph {
    /// Build the graph for a task/dependency snapshot.
    ///
    /// A task ID supplied more than once keeps the position of its first
    /// occurrence; the last record supplies its durations.
    pub fn build(tasks: &[Task], dependencies: &[TaskDependency], verbosity: u8) -> Self {
        let mut index = TaskIndex::with_capacity(tasks.len());
        let mut records: Vec<Task> = Vec::with_capacity(tasks.len());

        for task in tasks {
            let idx = index.intern(&task.id) as usize;
            if idx == records.len() {
                records.push(task.clone());
            } else {
                log_graph!(verbosity, "[graph] Duplicate task {:?}, keeping last record", task.id);
                records[idx] = task.clone();
            }
        }

        let n = index.len();
        let mut successors: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut predecessors: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut indegree = vec![0usize; n];
        let mut dropped_edges = 0;

        for dep in dependencies {
            let (Some(pred), Some(succ)) = (
                index.get(&dep.predecessor_task_id),
                index.get(&dep.successor_task_id),
            ) else {
                log_graph!(
                    verbosity,
                    "[graph] Dropping edge {:?} -> {:?}: endpoint not in snapshot",
                    dep.predecessor_task_id,
                    dep.successor_task_id
                );
                dropped_edges += 1;
                continue;
            };

            if dep.has_unapplied_constraints() {
                log_graph!(
                    verbosity,
                    "[graph] Edge {:?} -> {:?} ({}, lag {}) evaluated as plain precedence",
                    dep.predecessor_task_id,
                    dep.successor_task_id,
                    dep.dependency_type,
                    dep.lag_days
                );
            }

            successors[pred as usize].push(succ);
            predecessors[succ as usize].push(pred);
            indegree[succ as usize] += 1;
        }

        log_debug!(
            verbosity,
            "[graph] Built {} tasks, {} edges kept, {} dropped",
            n,
            dependencies.len() - dropped_edges,
            dropped_edges
        );

        Self {
            index,
            records,
            successors,
            predecessors,
            indegree,
            dropped_edges,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of edges discarded because an endpoint was not in the snapshot.
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    pub fn index(&self) -> &TaskIndex {
        &self.index
    }

    /// Successor IDs of a task, in edge order.
    pub fn successors(&self, task_id: &str) -> Option<Vec<&str>> {
        let id = self.index.get(task_id)?;
        Some(self.resolve_ids(&self.successors[id as usize]))
    }

    /// Predecessor IDs of a task, in edge order.
    pub fn predecessors(&self, task_id: &str) -> Option<Vec<&str>> {
        let id = self.index.get(task_id)?;
        Some(self.resolve_ids(&self.predecessors[id as usize]))
    }

    /// Number of retained edges entering a task.
    pub fn indegree(&self, task_id: &str) -> Option<usize> {
        let id = self.index.get(task_id)?;
        Some(self.indegree[id as usize])
    }

    #[inline]
    pub(crate) fn successor_ids(&self, id: TaskIdInt) -> &[TaskIdInt] {
        &self.successors[id as usize]
    }

    #[inline]
    pub(crate) fn predecessor_ids(&self, id: TaskIdInt) -> &[TaskIdInt] {
        &self.predecessors[id as usize]
    }

    pub(crate) fn indegrees(&self) -> &[usize] {
        &self.indegree
    }

    /// Duration of a task for a pass. Missing durations count as 0 and
    /// negative durations are clamped to 0.
    #[inline]
    pub(crate) fn duration(&self, id: TaskIdInt, source: DurationSource) -> i64 {
        source.of(&self.records[id as usize]).unwrap_or(0).max(0)
    }

    fn resolve_ids(&self, ids: &[TaskIdInt]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.index.resolve(id)).collect()
    }
}
