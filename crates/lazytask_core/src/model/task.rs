//! Task domain model.
//!
//! # Responsibility
//! - Define the single entity held by the task store.
//! - Define the closed priority set and the open category set with their
//!   fixed display labels and menu order.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another task.
//! - `title` is trimmed and never blank for a stored task.
//! - `is_completed` only ever moves from `false` to `true`.
//!
//! # See also
//! - crate::repo::task_repo

use crate::clock::date_format;
use crate::validation::{
    parse_category, parse_due_date, parse_priority, parse_title, ValidationError,
    ValidationResult,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned task identifier, strictly increasing from 1.
pub type TaskId = u64;

/// Task urgency. Closed set; variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities in menu order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Fixed display label. Also the only accepted input spelling.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// Exact-label lookup; no case folding, no trimming.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.label() == value)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Task category: one of the suggested defaults or a non-blank custom value.
///
/// Serialized as its plain label so custom and default values share one
/// wire shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    Work,
    Personal,
    Study,
    Health,
    Finance,
    /// Trimmed, non-blank, and never equal to a default label.
    Custom(String),
}

impl Category {
    /// Default categories in menu order.
    pub const DEFAULTS: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Study,
        Category::Health,
        Category::Finance,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Study => "Study",
            Self::Health => "Health",
            Self::Finance => "Finance",
            Self::Custom(value) => value.as_str(),
        }
    }

    /// Returns whether this is one of the suggested default categories.
    pub fn is_default(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Custom(value) => value,
            other => other.label().to_string(),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_category(value.as_str())
    }
}

/// The one entity managed by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Serialized as `dd.mm.yyyy`.
    #[serde(with = "date_format")]
    pub due_date: NaiveDate,
    pub is_completed: bool,
    pub category: Category,
    /// Frozen "today" of the store that created this task.
    #[serde(with = "date_format")]
    pub created_at: NaiveDate,
}

/// Raw editable fields as collected from the user.
///
/// Used for both create and update; nothing here is trusted until
/// [`TaskInput::validate`] succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
    pub category: String,
}

/// Typed, validated form of [`TaskInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub category: Category,
}

impl TaskInput {
    /// Builds an input from already-typed values, e.g. when pre-filling an
    /// edit form from an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.label().to_string(),
            due_date: crate::clock::format_date(task.due_date),
            category: task.category.label().to_string(),
        }
    }

    /// Validates all five fields and returns their typed values.
    ///
    /// Fields are checked in declaration order; the first failure wins.
    /// Title and description come back trimmed.
    ///
    /// # Errors
    /// - Returns the [`ValidationError`] of the first failing field.
    pub fn validate(&self) -> ValidationResult<TaskFields> {
        Ok(TaskFields {
            title: parse_title(self.title.as_str())?,
            description: self.description.trim().to_string(),
            priority: parse_priority(self.priority.as_str())?,
            due_date: parse_due_date(self.due_date.as_str())?,
            category: parse_category(self.category.as_str())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Priority};

    #[test]
    fn priority_labels_round_trip_in_menu_order() {
        let labels: Vec<_> = Priority::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Low", "Medium", "High", "Urgent"]);
        for priority in Priority::ALL {
            assert_eq!(Priority::from_label(priority.label()), Some(priority));
        }
        assert_eq!(Priority::from_label("low"), None);
    }

    #[test]
    fn custom_category_orders_after_defaults() {
        let custom = Category::Custom("Garden".to_string());
        assert!(Category::Finance < custom);
        assert!(!custom.is_default());
        assert!(Category::Work.is_default());
    }
}
