//! Priority enumeration for tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task priorities.
///
/// `Normal` only appears in data written by the simpler single-page variant,
/// which had no priority picker; it is accepted on load and on input but new
/// tasks default to `Medium`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Normal,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "normal" => Ok(Priority::Normal),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Normal => "normal",
        }
    }

    /// Capitalized label used on priority badges.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Normal => "Normal",
        }
    }
}
