//! Core data types for the critical path engine.

use pyo3::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while converting caller-supplied records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown dependency type: {0:?} (expected one of FS, SS, FF, SF)")]
    UnknownDependencyType(String),
}

/// Precedence kind stored on a dependency edge.
///
/// The kind is carried as data only. Every edge is evaluated as plain
/// precedence: the successor's path value is the predecessor's path value
/// plus the successor's own duration, whatever the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyType {
    /// Finish-to-start.
    #[default]
    FinishToStart,
    /// Start-to-start.
    StartToStart,
    /// Finish-to-finish.
    FinishToFinish,
    /// Start-to-finish.
    StartToFinish,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::StartToStart => "SS",
            Self::FinishToFinish => "FF",
            Self::StartToFinish => "SF",
        }
    }
}

impl FromStr for DependencyType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FS" => Ok(Self::FinishToStart),
            "SS" => Ok(Self::StartToStart),
            "FF" => Ok(Self::FinishToFinish),
            "SF" => Ok(Self::StartToFinish),
            other => Err(ModelError::UnknownDependencyType(other.to_string())),
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task snapshot as read from the project.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    #[pyo3(get, set)]
    pub id: String,
    /// Planned duration in days.
    #[pyo3(get, set)]
    pub planned_days: Option<i64>,
    /// Realized duration in days.
    #[pyo3(get, set)]
    pub actual_days: Option<i64>,
}

impl Task {
    pub fn new(id: impl Into<String>, planned_days: Option<i64>, actual_days: Option<i64>) -> Self {
        Self {
            id: id.into(),
            planned_days,
            actual_days,
        }
    }
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (id, planned_days=None, actual_days=None))]
    fn py_new(id: String, planned_days: Option<i64>, actual_days: Option<i64>) -> Self {
        Self::new(id, planned_days, actual_days)
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, planned_days={:?}, actual_days={:?})",
            self.id, self.planned_days, self.actual_days
        )
    }
}

/// A precedence edge between two tasks of the same project.
///
/// `dependency_type` and `lag_days` are accepted and preserved but not applied
/// to path lengths.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDependency {
    #[pyo3(get, set)]
    pub predecessor_task_id: String,
    #[pyo3(get, set)]
    pub successor_task_id: String,
    pub dependency_type: DependencyType,
    #[pyo3(get, set)]
    pub lag_days: i64,
}

impl TaskDependency {
    /// Plain finish-to-start edge with zero lag.
    pub fn new(predecessor: impl Into<String>, successor: impl Into<String>) -> Self {
        Self {
            predecessor_task_id: predecessor.into(),
            successor_task_id: successor.into(),
            dependency_type: DependencyType::FinishToStart,
            lag_days: 0,
        }
    }

    pub fn with_kind(mut self, dependency_type: DependencyType, lag_days: i64) -> Self {
        self.dependency_type = dependency_type;
        self.lag_days = lag_days;
        self
    }

    /// Whether this edge carries kind or lag information that path lengths ignore.
    pub fn has_unapplied_constraints(&self) -> bool {
        self.dependency_type != DependencyType::FinishToStart || self.lag_days != 0
    }
}

#[pymethods]
impl TaskDependency {
    #[new]
    #[pyo3(signature = (predecessor_task_id, successor_task_id, dependency_type="FS", lag_days=0))]
    fn py_new(
        predecessor_task_id: String,
        successor_task_id: String,
        dependency_type: &str,
        lag_days: i64,
    ) -> PyResult<Self> {
        let kind: DependencyType = dependency_type
            .parse()
            .map_err(|e: ModelError| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(Self::new(predecessor_task_id, successor_task_id).with_kind(kind, lag_days))
    }

    #[getter(dependency_type)]
    fn py_dependency_type(&self) -> &'static str {
        self.dependency_type.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskDependency({:?} -> {:?}, type={}, lag_days={})",
            self.predecessor_task_id, self.successor_task_id, self.dependency_type, self.lag_days
        )
    }
}

/// Result of a critical path request: one cycle flag shared by the planned and
/// actual passes.
///
/// Lengths are zero and paths empty when `cycle` is set.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPathReport {
    #[pyo3(get)]
    pub cycle: bool,
    #[pyo3(get)]
    pub planned_length: i64,
    #[pyo3(get)]
    pub actual_length: i64,
    #[pyo3(get)]
    pub planned_path_task_ids: Vec<String>,
    #[pyo3(get)]
    pub actual_path_task_ids: Vec<String>,
}

impl CriticalPathReport {
    pub fn cycle_detected() -> Self {
        Self {
            cycle: true,
            ..Self::default()
        }
    }
}

#[pymethods]
impl CriticalPathReport {
    fn __repr__(&self) -> String {
        format!(
            "CriticalPathReport(cycle={}, planned_length={}, actual_length={}, planned_path={}, actual_path={})",
            self.cycle,
            self.planned_length,
            self.actual_length,
            self.planned_path_task_ids.len(),
            self.actual_path_task_ids.len()
        )
    }
}
