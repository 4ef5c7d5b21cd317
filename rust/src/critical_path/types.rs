//! Types for critical path computation.

use crate::models::Task;

/// Which duration a pass weighs tasks by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationSource {
    Planned,
    Actual,
}

impl DurationSource {
    /// Raw duration recorded on the task for this source, if any.
    pub fn of(&self, task: &Task) -> Option<i64> {
        match self {
            Self::Planned => task.planned_days,
            Self::Actual => task.actual_days,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Actual => "actual",
        }
    }
}

/// Longest duration-weighted path through an acyclic task graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LongestPath {
    /// Sum of the (clamped) durations along `path`. Saturates at `i64::MAX`
    /// instead of overflowing.
    pub total_length: i64,
    /// Task IDs from the start of the path to its end, inclusive.
    pub path: Vec<String>,
}

/// Outcome of one pass of the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    CycleDetected,
    Acyclic(LongestPath),
}

impl PathOutcome {
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected)
    }

    /// Length and path, with zero/empty for a cyclic graph.
    pub fn into_parts(self) -> (i64, Vec<String>) {
        match self {
            Self::CycleDetected => (0, Vec::new()),
            Self::Acyclic(longest) => (longest.total_length, longest.path),
        }
    }
}
