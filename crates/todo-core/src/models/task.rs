//! Task model definition and its persisted representation.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

use super::Priority;

/// A single to-do item.
///
/// Field names are serialized in camelCase; the whole collection is stored as
/// a JSON array of these records under one local storage key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, derived from the creation time in milliseconds
    pub id: u64,

    /// What needs doing; never empty after trimming
    pub text: String,

    /// Whether the task has been done
    #[serde(default)]
    pub completed: bool,

    /// Priority badge shown next to the task
    #[serde(default)]
    pub priority: Priority,

    /// Free-text category; empty means uncategorized
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,

    /// Optional due date (calendar day, no time of day)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub due_date: Option<Date>,

    /// Whether the task is starred as important
    #[serde(default)]
    pub important: bool,

    /// Timestamp when the task was created (UTC); never changes
    pub created_at: Timestamp,
}

impl Task {
    /// Returns true when the task text is non-empty after trimming.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Reads `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `null` and `""` as "no due date".
///
/// Date inputs left blank are stored as empty strings by some front ends.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<Date>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
