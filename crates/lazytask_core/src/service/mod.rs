//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and query views into use-case level APIs.
//! - Keep the console layer decoupled from storage details.

pub mod task_service;
