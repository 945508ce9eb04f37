//! Aggregate task statistics.

use crate::clock::Clock;
use crate::model::task::{Category, Priority, Task};
use crate::query::filter::is_task_overdue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of counts and distributions over a task collection.
///
/// Distributions only contain keys that occur at least once and iterate in
/// display order (priority order; default categories, then custom ones
/// alphabetically).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Percentage in `[0, 100]`; exactly `0.0` for an empty collection.
    pub completion_rate: f64,
    pub priority_distribution: BTreeMap<Priority, usize>,
    pub category_distribution: BTreeMap<Category, usize>,
    pub overdue_count: usize,
}

pub fn statistics(tasks: &[Task], clock: &Clock) -> TaskStatistics {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.is_completed).count();
    let completion_rate = if total == 0 {
        0.0
    } else {
        100.0 * completed as f64 / total as f64
    };

    let mut priority_distribution = BTreeMap::new();
    let mut category_distribution = BTreeMap::new();
    for task in tasks {
        *priority_distribution.entry(task.priority).or_insert(0) += 1;
        *category_distribution
            .entry(task.category.clone())
            .or_insert(0) += 1;
    }

    TaskStatistics {
        total,
        completed,
        active: total - completed,
        completion_rate,
        priority_distribution,
        category_distribution,
        overdue_count: tasks
            .iter()
            .filter(|task| is_task_overdue(task, clock))
            .count(),
    }
}
