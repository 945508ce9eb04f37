//! Core domain logic for LazyTask.
//! This crate is the single source of truth for task invariants: validation,
//! the frozen clock, the task store and the read-only query views.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod validation;

pub use clock::{format_date, Clock};
pub use config::{default_log_level, AppConfig, ConfigError, LoggingConfig};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::task::{Category, Priority, Task, TaskFields, TaskId, TaskInput};
pub use query::filter::StatusFilter;
pub use query::stats::TaskStatistics;
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::task_service::TaskService;
pub use validation::{
    is_valid_category, is_valid_date, is_valid_priority, is_valid_title, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
