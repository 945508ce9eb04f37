//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented task access contracts.
//! - Isolate collection bookkeeping (ids, ordering) from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `TaskInput::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `TaskCompleted`)
//!   instead of panicking.

pub mod task_repo;
