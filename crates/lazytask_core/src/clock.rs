//! Frozen process clock and overdue policy.
//!
//! # Responsibility
//! - Capture "today" once and hand the same date to every caller.
//! - Decide overdue status by calendar-date comparison only.
//!
//! # Invariants
//! - A `Clock` value never changes after construction.
//! - Overdue checks never fail; unparseable dates are "not overdue".

use crate::validation::parse_due_date;
use chrono::{Local, NaiveDate};

/// Display/serialization format for calendar dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Calendar-date snapshot used for overdue checks and `created_at` stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    today: NaiveDate,
}

impl Clock {
    /// Captures the local calendar date now.
    pub fn system() -> Self {
        Self::fixed(Local::now().date_naive())
    }

    /// Uses a caller-provided date as "today".
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns true iff `date` is strictly before today.
    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    /// Parses `due_date` and checks it against today.
    ///
    /// Returns `false` for input that does not parse.
    pub fn is_overdue(&self, due_date: &str) -> bool {
        parse_due_date(due_date)
            .map(|date| self.is_past(date))
            .unwrap_or(false)
    }
}

/// Formats a date as `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter writing dates in [`DATE_FORMAT`] and reading them back
/// under the input date grammar.
pub(crate) mod date_format {
    use super::format_date;
    use crate::validation::parse_due_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(format_date(*date).as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_due_date(value.as_str()).map_err(serde::de::Error::custom)
    }
}
