//! Search and filter views.

use crate::clock::Clock;
use crate::model::task::Task;

/// Which tasks a status filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed,
            Self::Completed => task.is_completed,
        }
    }
}

/// Case-insensitive substring match on title or description.
///
/// An empty query matches every task. Callers that want to refuse vacuous
/// searches must check before calling.
pub fn search<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(needle.as_str())
                || task.description.to_lowercase().contains(needle.as_str())
        })
        .collect()
}

pub fn filter_by_status(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Returns whether `task` is still active and due strictly before today.
pub fn is_task_overdue(task: &Task, clock: &Clock) -> bool {
    !task.is_completed && clock.is_past(task.due_date)
}

pub fn overdue_tasks<'a>(tasks: &'a [Task], clock: &Clock) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| is_task_overdue(task, clock))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_by_status, is_task_overdue, search, StatusFilter};
    use crate::clock::Clock;
    use crate::model::task::{Category, Priority, Task};
    use chrono::NaiveDate;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn task(id: u64, title: &str, description: &str, done: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            priority: Priority::Medium,
            due_date: date(20, 10, 2025),
            is_completed: done,
            category: Category::Personal,
            created_at: date(15, 10, 2025),
        }
    }

    #[test]
    fn search_ignores_case_in_title_and_description() {
        let tasks = vec![
            task(1, "Shopping", "Молоко, хлеб", false),
            task(2, "Report", "quarterly NUMBERS", false),
            task(3, "Gym", "", false),
        ];

        let hits: Vec<_> = search(&tasks, "молоко").iter().map(|t| t.id).collect();
        assert_eq!(hits, [1]);
        let hits: Vec<_> = search(&tasks, "numbers").iter().map(|t| t.id).collect();
        assert_eq!(hits, [2]);
        let hits: Vec<_> = search(&tasks, "GYM").iter().map(|t| t.id).collect();
        assert_eq!(hits, [3]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let tasks = vec![task(1, "a", "", false), task(2, "b", "", true)];
        assert_eq!(search(&tasks, "").len(), 2);
    }

    #[test]
    fn status_filter_partitions_tasks() {
        let tasks = vec![
            task(1, "a", "", false),
            task(2, "b", "", true),
            task(3, "c", "", false),
        ];
        let ids = |filter| -> Vec<u64> {
            filter_by_status(&tasks, filter).iter().map(|t| t.id).collect()
        };
        assert_eq!(ids(StatusFilter::All), [1, 2, 3]);
        assert_eq!(ids(StatusFilter::Active), [1, 3]);
        assert_eq!(ids(StatusFilter::Completed), [2]);
    }

    #[test]
    fn completed_tasks_are_never_overdue() {
        let clock = Clock::fixed(date(1, 1, 2030));
        let mut overdue = task(1, "late", "", false);
        assert!(is_task_overdue(&overdue, &clock));
        overdue.is_completed = true;
        assert!(!is_task_overdue(&overdue, &clock));
    }
}
