//! Field validation for task input.
//!
//! # Responsibility
//! - Provide total, side-effect-free predicates over raw field text.
//! - Provide parsing counterparts that return typed values.
//!
//! # Invariants
//! - No function in this module panics on any input.
//! - `is_valid_x(v)` is true iff `parse_x(v)` is `Ok`.
//!
//! Date grammar: `D{1,2}.D{1,2}.D{4}` with ASCII digits, surrounding
//! whitespace ignored, and the result must be a real calendar date.

use crate::model::task::{Category, Priority};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").expect("valid date regex")
});

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Priority is not one of the fixed labels.
    UnknownPriority(String),
    /// Category is empty after trimming.
    EmptyCategory,
    /// Date does not match the grammar or names an impossible day.
    InvalidDate(String),
}

impl ValidationError {
    /// Name of the offending field, for prompts and log events.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::UnknownPriority(_) => "priority",
            Self::EmptyCategory => "category",
            Self::InvalidDate(_) => "due_date",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::UnknownPriority(value) => write!(
                f,
                "unknown priority `{value}`; expected Low|Medium|High|Urgent"
            ),
            Self::EmptyCategory => write!(f, "category must not be empty"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected day.month.year")
            }
        }
    }
}

impl Error for ValidationError {}

pub fn is_valid_title(text: &str) -> bool {
    parse_title(text).is_ok()
}

pub fn is_valid_priority(value: &str) -> bool {
    parse_priority(value).is_ok()
}

/// Any default label or any non-blank custom text is accepted.
pub fn is_valid_category(value: &str) -> bool {
    parse_category(value).is_ok()
}

pub fn is_valid_date(text: &str) -> bool {
    parse_due_date(text).is_ok()
}

/// Returns the trimmed title.
///
/// # Errors
/// - [`ValidationError::EmptyTitle`] when nothing remains after trimming.
pub fn parse_title(text: &str) -> ValidationResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Matches one of the four labels exactly (case-sensitive, untrimmed).
///
/// # Errors
/// - [`ValidationError::UnknownPriority`] for anything else.
pub fn parse_priority(value: &str) -> ValidationResult<Priority> {
    Priority::from_label(value).ok_or_else(|| ValidationError::UnknownPriority(value.to_string()))
}

/// Maps default labels to their variants and everything else non-blank to
/// [`Category::Custom`] with the trimmed text.
///
/// # Errors
/// - [`ValidationError::EmptyCategory`] for blank input.
pub fn parse_category(value: &str) -> ValidationResult<Category> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    let category = Category::DEFAULTS
        .into_iter()
        .find(|category| category.label() == trimmed)
        .unwrap_or_else(|| Category::Custom(trimmed.to_string()));
    Ok(category)
}

/// Parses `day.month.year` into a calendar date.
///
/// # Errors
/// - [`ValidationError::InvalidDate`] for wrong separators, non-digit
///   components, wrong component widths, or impossible dates (`31.02.2025`).
pub fn parse_due_date(text: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::InvalidDate(text.to_string());
    let caps = DATE_RE.captures(text.trim()).ok_or_else(invalid)?;

    let day = caps[1].parse::<u32>().map_err(|_| invalid())?;
    let month = caps[2].parse::<u32>().map_err(|_| invalid())?;
    let year = caps[3].parse::<i32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::{
        is_valid_category, is_valid_date, is_valid_priority, is_valid_title, parse_category,
        parse_due_date, ValidationError,
    };
    use crate::model::task::Category;
    use chrono::NaiveDate;

    #[test]
    fn title_requires_non_blank_text() {
        assert!(is_valid_title("  buy milk "));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title(" \t\n"));
    }

    #[test]
    fn priority_requires_exact_label() {
        assert!(is_valid_priority("Urgent"));
        assert!(!is_valid_priority("urgent"));
        assert!(!is_valid_priority(" High"));
        assert!(!is_valid_priority("Unknown"));
    }

    #[test]
    fn category_accepts_defaults_and_custom_values() {
        assert!(is_valid_category("Work"));
        assert!(is_valid_category("Garden"));
        assert!(!is_valid_category("   "));
        assert_eq!(parse_category(" Health ").unwrap(), Category::Health);
        assert_eq!(
            parse_category(" Garden ").unwrap(),
            Category::Custom("Garden".to_string())
        );
    }

    #[test]
    fn date_accepts_day_month_year() {
        assert_eq!(
            parse_due_date("11.10.2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 11).unwrap()
        );
        assert_eq!(
            parse_due_date("1.2.2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert!(is_valid_date(" 29.02.2024 "));
    }

    #[test]
    fn date_rejects_malformed_and_impossible_values() {
        for value in [
            "",
            "11/10/2025",
            "2025-10-11",
            "aa.10.2025",
            "11.10.25",
            "111.10.2025",
            "31.02.2025",
            "29.02.2025",
            "00.01.2025",
            "15.13.2025",
            "١١.١٠.٢٠٢٥",
        ] {
            assert!(!is_valid_date(value), "`{value}` should be rejected");
        }
    }

    #[test]
    fn date_error_keeps_original_text() {
        let err = parse_due_date("soon").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("soon".to_string()));
        assert_eq!(err.field(), "due_date");
    }
}
