//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own task identity assignment, lookup, mutation and removal.
//! - Keep the frozen clock alongside the collection it stamps.
//!
//! # Invariants
//! - Write paths must call `TaskInput::validate()` before mutating anything.
//! - Ids start at 1, grow by 1 per successful create and are never reused.
//! - Insertion order is preserved; only delete removes entries.
//! - Completed tasks cannot be edited through `update_task`.

use crate::clock::Clock;
use crate::model::task::{Task, TaskId, TaskInput};
use crate::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A field failed validation; nothing was changed.
    Validation(ValidationError),
    /// No task with this id.
    NotFound(TaskId),
    /// The task is completed and no longer editable.
    TaskCompleted(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::TaskCompleted(id) => write!(f, "task {id} is completed and cannot be edited"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::TaskCompleted(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for task CRUD operations.
///
/// Mutating methods take `&mut self`; callers sharing one repository across
/// threads must wrap it in their own lock.
pub trait TaskRepository {
    /// Validates `input`, assigns the next id and appends the task.
    fn create_task(&mut self, input: &TaskInput) -> RepoResult<Task>;

    fn get_task(&self, id: TaskId) -> Option<&Task>;

    /// Replaces all five editable fields, or none of them.
    ///
    /// # Errors
    /// - `NotFound` for unknown ids.
    /// - `TaskCompleted` when the task is already completed.
    /// - `Validation` when any field is invalid.
    fn update_task(&mut self, id: TaskId, input: &TaskInput) -> RepoResult<()>;

    /// Removes the task permanently. Returns `false` when absent.
    fn delete_task(&mut self, id: TaskId) -> bool;

    /// Marks the task completed. Idempotent; returns `false` when absent.
    fn mark_completed(&mut self, id: TaskId) -> bool;

    /// All tasks in insertion order.
    fn list_tasks(&self) -> &[Task];

    fn clock(&self) -> Clock;
}

/// Process-lifetime task store backed by a `Vec`.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    next_id: TaskId,
    clock: Clock,
}

impl InMemoryTaskRepository {
    pub fn new(clock: Clock) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create_task(&mut self, input: &TaskInput) -> RepoResult<Task> {
        let fields = input.validate()?;

        let task = Task {
            id: self.next_id,
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            due_date: fields.due_date,
            is_completed: false,
            category: fields.category,
            created_at: self.clock.today(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());

        Ok(task)
    }

    fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn update_task(&mut self, id: TaskId, input: &TaskInput) -> RepoResult<()> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        if self.tasks[index].is_completed {
            return Err(RepoError::TaskCompleted(id));
        }

        let fields = input.validate()?;
        let task = &mut self.tasks[index];
        task.title = fields.title;
        task.description = fields.description;
        task.priority = fields.priority;
        task.due_date = fields.due_date;
        task.category = fields.category;

        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    fn mark_completed(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.is_completed = true;
                true
            }
            None => false,
        }
    }

    fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}
