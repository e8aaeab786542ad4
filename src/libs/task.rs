//! Task record types and the due-date boundary parser.
//!
//! A [`Task`] is the unit the whole application revolves around: a title,
//! an optional deadline at minute precision, a priority level, and a
//! completion flag. Records are built through [`Task::new`], which rejects
//! empty titles, and timestamps always pass through [`parse_datetime`] so a
//! malformed date string never turns into a silent "no due date".
//!
//! The `recurring`/`recurrence_interval` pair is stored and round-tripped
//! but has no behavior attached; recurrence expansion is not implemented.

use crate::libs::error::StoreError;
use chrono::{Local, NaiveDateTime, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used everywhere a date crosses a boundary: user input,
/// the JSON storage file, and rendered output.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Task priority level. Serialized as the bare variant name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// A single trackable task.
///
/// `created_at` is set once at construction and never mutated afterwards.
/// Both timestamps are held at minute granularity; seconds are truncated on
/// the way in so that a save/load round trip reproduces the record
/// field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    #[serde(with = "datetime_minutes::option")]
    pub due_date: Option<NaiveDateTime>,
    pub priority: Priority,
    pub completed: bool,
    pub recurring: bool,
    pub recurrence_interval: Option<String>,
    #[serde(with = "datetime_minutes")]
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Creates a new pending task.
    ///
    /// Fails with [`StoreError::InvalidInput`] when the title is empty or
    /// whitespace-only. All other fields take their documented defaults.
    pub fn new(title: &str, description: &str, due_date: Option<NaiveDateTime>, priority: Priority) -> Result<Self, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::InvalidInput("task title must not be empty".to_string()));
        }
        Ok(Task {
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.map(truncate_to_minute),
            priority,
            completed: false,
            recurring: false,
            recurrence_interval: None,
            created_at: truncate_to_minute(Local::now().naive_local()),
        })
    }
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp from user input.
///
/// This is the validation boundary the record constructor relies on: a
/// malformed string is rejected here, never coerced into an absent due date.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, StoreError> {
    NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT)
        .map_err(|_| StoreError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD HH:MM", input.trim())))
}

/// Drops seconds and sub-second precision from a timestamp.
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0).and_then(|d| d.with_nanosecond(0)).unwrap_or(dt)
}

/// Serde helpers for minute-precision timestamp fields.
///
/// `due_date` serializes as a formatted string or JSON `null` when absent;
/// `created_at` is always present. Both use [`DATETIME_FORMAT`].
pub mod datetime_minutes {
    use super::DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::DATETIME_FORMAT;
        use chrono::NaiveDateTime;
        use serde::{self, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match dt {
                Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value: Option<String> = Option::deserialize(deserializer)?;
            match value {
                Some(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
