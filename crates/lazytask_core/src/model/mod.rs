//! Domain model for the in-memory task manager.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep raw user input (`TaskInput`) separate from validated state.
//!
//! # Invariants
//! - Every task is identified by a store-assigned `TaskId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod task;
