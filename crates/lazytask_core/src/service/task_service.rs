//! Task use-case service.
//!
//! # Responsibility
//! - Provide the single entry point the presentation layer talks to.
//! - Delegate mutations to a repository and views to `crate::query`.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Task titles and descriptions are never written to logs.

use crate::clock::Clock;
use crate::model::task::{Task, TaskId, TaskInput};
use crate::query::filter::{filter_by_status, overdue_tasks, search, StatusFilter};
use crate::query::stats::{statistics, TaskStatistics};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use log::{debug, info, warn};

/// Use-case service wrapper for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn clock(&self) -> Clock {
        self.repo.clock()
    }

    /// Creates a task from raw field input.
    ///
    /// # Errors
    /// - `RepoError::Validation` when any field is invalid; no id is consumed.
    pub fn create_task(&mut self, input: &TaskInput) -> RepoResult<Task> {
        match self.repo.create_task(input) {
            Ok(task) => {
                info!(
                    "event=task_create module=service status=ok id={} priority={} default_category={}",
                    task.id,
                    task.priority,
                    task.category.is_default()
                );
                Ok(task)
            }
            Err(err) => {
                log_rejection("task_create", None, &err);
                Err(err)
            }
        }
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.repo.get_task(id)
    }

    /// Replaces the editable fields of an active task.
    ///
    /// Returns repository-level not-found, completed or validation errors
    /// unchanged; on error the task is untouched.
    pub fn update_task(&mut self, id: TaskId, input: &TaskInput) -> RepoResult<()> {
        match self.repo.update_task(id, input) {
            Ok(()) => {
                info!("event=task_update module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                log_rejection("task_update", Some(id), &err);
                Err(err)
            }
        }
    }

    /// Permanently deletes a task. Returns `false` when the id is unknown.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let removed = self.repo.delete_task(id);
        info!(
            "event=task_delete module=service status={} id={id}",
            status_label(removed)
        );
        removed
    }

    /// Marks a task completed. Returns `false` when the id is unknown.
    pub fn mark_completed(&mut self, id: TaskId) -> bool {
        let found = self.repo.mark_completed(id);
        info!(
            "event=task_complete module=service status={} id={id}",
            status_label(found)
        );
        found
    }

    /// All tasks in insertion order.
    pub fn list_tasks(&self) -> &[Task] {
        self.repo.list_tasks()
    }

    /// Case-insensitive substring search over title and description.
    ///
    /// A blank query matches everything; reject it before calling if that
    /// is not wanted.
    pub fn search(&self, query: &str) -> Vec<&Task> {
        let hits = search(self.repo.list_tasks(), query);
        debug!(
            "event=task_search module=service status=ok query_chars={} hits={}",
            query.chars().count(),
            hits.len()
        );
        hits
    }

    pub fn filter_by_status(&self, filter: StatusFilter) -> Vec<&Task> {
        filter_by_status(self.repo.list_tasks(), filter)
    }

    /// Active tasks due strictly before the frozen "today".
    pub fn overdue_tasks(&self) -> Vec<&Task> {
        let clock = self.repo.clock();
        overdue_tasks(self.repo.list_tasks(), &clock)
    }

    /// Returns whether `task` is active and past due under this service's clock.
    pub fn is_overdue(&self, task: &Task) -> bool {
        crate::query::filter::is_task_overdue(task, &self.repo.clock())
    }

    pub fn statistics(&self) -> TaskStatistics {
        let clock = self.repo.clock();
        statistics(self.repo.list_tasks(), &clock)
    }
}

fn log_rejection(event: &str, id: Option<TaskId>, err: &RepoError) {
    let id = id.map_or_else(|| "-".to_string(), |id| id.to_string());
    match err {
        RepoError::Validation(validation) => warn!(
            "event={event} module=service status=error reason=invalid_input field={} id={id}",
            validation.field()
        ),
        RepoError::NotFound(_) => {
            warn!("event={event} module=service status=error reason=not_found id={id}")
        }
        RepoError::TaskCompleted(_) => {
            warn!("event={event} module=service status=error reason=task_completed id={id}")
        }
    }
}

fn status_label(found: bool) -> &'static str {
    if found {
        "ok"
    } else {
        "not_found"
    }
}
