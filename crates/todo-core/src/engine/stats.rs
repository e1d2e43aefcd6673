//! Aggregate counts over the task collection.

use serde::{Deserialize, Serialize};

use crate::models::{Tab, Task};

/// Summary statistics shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    /// Number of tasks
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
    /// Number of tasks not yet completed
    pub pending: usize,
    /// Number of important tasks that are still pending
    pub important: usize,
}

impl TaskCounts {
    /// Compute the counts for a task collection.
    ///
    /// `important` only counts tasks that are not completed.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let important = tasks.iter().filter(|t| t.important && !t.completed).count();

        Self {
            total,
            completed,
            pending: total - completed,
            important,
        }
    }

    /// Share of completed tasks as a rounded percentage, `0` for an empty
    /// list.
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Number of tasks each tab would show, as printed on the tab labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    /// Includes completed tasks, following the important tab predicate
    pub important: usize,
}

impl TabCounts {
    /// Count the tasks admitted by each tab.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count = |tab: Tab| tasks.iter().filter(|t| tab.admits(t)).count();

        Self {
            all: count(Tab::All),
            active: count(Tab::Active),
            completed: count(Tab::Completed),
            important: count(Tab::Important),
        }
    }

    /// Count for a single tab.
    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::All => self.all,
            Tab::Active => self.active,
            Tab::Completed => self.completed,
            Tab::Important => self.important,
        }
    }
}
