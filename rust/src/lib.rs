//! Rust implementation of the project critical path engine.
//!
//! Given the task and dependency snapshot of one project, computes the longest
//! duration-weighted path through the precedence graph, once for planned
//! durations and once for actual durations. Exposed to the Python service as
//! the `rust` extension module and usable directly as a Rust library.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod critical_path;
mod interner;
pub mod logging;
mod models;

pub use config::CriticalPathConfig;
pub use critical_path::{
    analyze, solve, topological_order, CycleDetected, DurationSource, LongestPath, PathOutcome,
    TaskGraph,
};
pub use interner::{TaskIdInt, TaskIndex};
pub use models::{CriticalPathReport, DependencyType, ModelError, Task, TaskDependency};

/// Compute planned and actual critical paths for one project.
///
/// # Arguments
/// * `tasks` - Tasks of the project, in the order the service loaded them
/// * `dependencies` - Dependency edges of the project, in stored order
/// * `config` - Optional configuration (verbosity)
///
/// # Returns
/// * CriticalPathReport; on a dependency cycle `cycle` is True and both
///   lengths are 0 with empty paths
///
/// Edges that reference a task not in `tasks` are ignored. Dependency type and
/// lag are not applied to path lengths.
#[pyfunction]
#[pyo3(signature = (tasks, dependencies, config=None))]
fn compute_critical_path(
    py: Python<'_>,
    tasks: Vec<Task>,
    dependencies: Vec<TaskDependency>,
    config: Option<CriticalPathConfig>,
) -> CriticalPathReport {
    let config = config.unwrap_or_default();
    py.allow_threads(|| analyze(&tasks, &dependencies, &config))
}

/// The siteplan.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<TaskDependency>()?;
    m.add_class::<CriticalPathReport>()?;

    // Config types
    m.add_class::<CriticalPathConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(compute_critical_path, m)?)?;

    Ok(())
}
