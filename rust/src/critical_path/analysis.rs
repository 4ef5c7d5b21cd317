//! Planned and actual critical paths for one project snapshot.

use crate::config::CriticalPathConfig;
use crate::log_summary;
use crate::models::{CriticalPathReport, Task, TaskDependency};

use super::graph::TaskGraph;
use super::solver::{longest_path, topological_order};
use super::types::DurationSource;

/// Compute the planned and actual critical paths of a project.
///
/// The graph is built and ordered once; both passes share that topology and
/// differ only in the durations they weigh. A cycle stops the computation
/// before either longest-path pass runs and is reported with zero lengths and
/// empty paths.
///
/// Dependency kind and lag are not applied: every retained edge is treated as
/// plain finish-to-start precedence with no lag.
pub fn analyze(
    tasks: &[Task],
    dependencies: &[TaskDependency],
    config: &CriticalPathConfig,
) -> CriticalPathReport {
    let verbosity = config.verbosity;
    let graph = TaskGraph::build(tasks, dependencies, verbosity);

    let order = match topological_order(&graph) {
        Ok(order) => order,
        Err(cycle) => {
            log_summary!(verbosity, "[analysis] {}; skipping both passes", cycle);
            return CriticalPathReport::cycle_detected();
        }
    };

    let planned = longest_path(&graph, &order, DurationSource::Planned, verbosity);
    let actual = longest_path(&graph, &order, DurationSource::Actual, verbosity);

    CriticalPathReport {
        cycle: false,
        planned_length: planned.total_length,
        actual_length: actual.total_length,
        planned_path_task_ids: planned.path,
        actual_path_task_ids: actual.path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critical_path::solver::solve;
    use crate::critical_path::types::PathOutcome;

    fn make_task(id: &str, planned: i64, actual: i64) -> Task {
        Task::new(id, Some(planned), Some(actual))
    }

    fn edge(pred: &str, succ: &str) -> TaskDependency {
        TaskDependency::new(pred, succ)
    }

    fn run(tasks: &[Task], deps: &[TaskDependency]) -> CriticalPathReport {
        analyze(tasks, deps, &CriticalPathConfig::default())
    }

    #[test]
    fn test_planned_and_actual_evaluated_independently() {
        let tasks = vec![make_task("A", 3, 5), make_task("B", 2, 1)];
        let report = run(&tasks, &[edge("A", "B")]);

        assert!(!report.cycle);
        assert_eq!(report.planned_length, 5);
        assert_eq!(report.planned_path_task_ids, vec!["A", "B"]);
        assert_eq!(report.actual_length, 6);
        assert_eq!(report.actual_path_task_ids, vec!["A", "B"]);
    }

    #[test]
    fn test_passes_can_choose_different_paths() {
        // Planned favours a, actual favours b
        let tasks = vec![
            make_task("a", 9, 1),
            make_task("b", 1, 9),
            make_task("c", 1, 1),
        ];
        let deps = vec![edge("a", "c"), edge("b", "c")];
        let report = run(&tasks, &deps);

        assert_eq!(report.planned_length, 10);
        assert_eq!(report.planned_path_task_ids, vec!["a", "c"]);
        assert_eq!(report.actual_length, 10);
        assert_eq!(report.actual_path_task_ids, vec!["b", "c"]);
    }

    #[test]
    fn test_cycle_reported_uniformly() {
        let tasks = vec![
            make_task("A", 1, 1),
            make_task("B", 1, 1),
            make_task("C", 1, 1),
        ];
        let deps = vec![edge("A", "B"), edge("B", "C"), edge("C", "A")];
        let report = run(&tasks, &deps);

        assert_eq!(report, CriticalPathReport::cycle_detected());
    }

    #[test]
    fn test_cycle_in_part_of_graph_fails_whole_request() {
        let tasks = vec![
            make_task("free", 10, 10),
            make_task("x", 1, 1),
            make_task("y", 1, 1),
        ];
        let deps = vec![edge("x", "y"), edge("y", "x")];
        let report = run(&tasks, &deps);

        assert!(report.cycle);
        assert_eq!(report.planned_length, 0);
        assert!(report.planned_path_task_ids.is_empty());
        assert_eq!(report.actual_length, 0);
        assert!(report.actual_path_task_ids.is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let report = run(&[], &[]);

        assert_eq!(report, CriticalPathReport::default());
        assert!(!report.cycle);
    }

    #[test]
    fn test_missing_durations_count_as_zero() {
        let tasks = vec![
            Task::new("a", Some(4), None),
            Task::new("b", None, None),
        ];
        let report = run(&tasks, &[edge("a", "b")]);

        assert_eq!(report.planned_length, 4);
        assert_eq!(report.planned_path_task_ids, vec!["a"]);
        assert_eq!(report.actual_length, 0);
        assert_eq!(report.actual_path_task_ids, vec!["a"]);
    }

    #[test]
    fn test_no_edges_longest_single_task() {
        let tasks = vec![
            make_task("a", 3, 1),
            make_task("b", 8, 1),
            make_task("c", 8, 2),
        ];
        let report = run(&tasks, &[]);

        assert_eq!(report.planned_length, 8);
        assert_eq!(report.planned_path_task_ids, vec!["b"]);
        assert_eq!(report.actual_length, 2);
        assert_eq!(report.actual_path_task_ids, vec!["c"]);
    }

    #[test]
    fn test_matches_independent_passes() {
        let tasks = vec![
            make_task("a", 2, 4),
            make_task("b", 3, 1),
            make_task("c", 1, 6),
            make_task("d", 2, 2),
        ];
        let deps = vec![edge("a", "b"), edge("a", "c"), edge("b", "d"), edge("c", "d")];
        let report = run(&tasks, &deps);

        let graph = TaskGraph::build(&tasks, &deps, 0);
        let expected_planned = solve(&graph, DurationSource::Planned, 0);
        let expected_actual = solve(&graph, DurationSource::Actual, 0);

        assert_eq!(
            expected_planned,
            PathOutcome::Acyclic(crate::critical_path::LongestPath {
                total_length: report.planned_length,
                path: report.planned_path_task_ids.clone(),
            })
        );
        assert_eq!(
            expected_actual.into_parts(),
            (report.actual_length, report.actual_path_task_ids.clone())
        );
        assert_eq!(report.planned_path_task_ids, vec!["a", "b", "d"]);
        assert_eq!(report.actual_path_task_ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_long_chain_length_saturates() {
        let big = i64::MAX / 2 + 1;
        let tasks = vec![make_task("a", big, 1), make_task("b", big, 1)];
        let report = run(&tasks, &[edge("a", "b")]);

        assert!(!report.cycle);
        assert_eq!(report.planned_length, i64::MAX);
        assert_eq!(report.planned_path_task_ids, vec!["a", "b"]);
        assert_eq!(report.actual_length, 2);
    }

    #[test]
    fn test_idempotent() {
        let tasks = vec![make_task("a", 1, 2), make_task("b", 2, 1)];
        let deps = vec![edge("a", "b"), edge("b", "ghost")];

        let first = run(&tasks, &deps);
        let second = run(&tasks, &deps);
        assert_eq!(first, second);
    }
}
