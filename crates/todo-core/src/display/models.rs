//! Display implementations for domain models.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use super::datetime::LocalDateTime;
use crate::{
    engine::{due_date_label, is_overdue, relative_day_label, TabCounts, TaskCounts},
    models::{Priority, Tab, Task},
};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task rendered against a fixed clock and time zone.
///
/// Relative labels ("Today", "Tomorrow", overdue) depend on the current
/// time, so the view captures it once. The compact form is used in lists;
/// the detailed form adds the full creation timestamp.
pub struct TaskView<'a> {
    task: &'a Task,
    now: Timestamp,
    tz: TimeZone,
    detailed: bool,
}

impl<'a> TaskView<'a> {
    /// Compact view at the current time in the system time zone.
    pub fn new(task: &'a Task) -> Self {
        Self::at(task, Timestamp::now(), TimeZone::system())
    }

    /// Compact view at a given time and time zone.
    pub fn at(task: &'a Task, now: Timestamp, tz: TimeZone) -> Self {
        Self {
            task,
            now,
            tz,
            detailed: false,
        }
    }

    /// Include the full creation timestamp.
    pub fn detailed(mut self) -> Self {
        self.detailed = true;
        self
    }
}

impl fmt::Display for TaskView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.task;
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let star = if task.important { " ★" } else { "" };

        writeln!(f, "### {checkbox} {}{star} (ID: {})", task.text, task.id)?;
        writeln!(f)?;
        writeln!(f, "- Priority: {}", task.priority.label())?;

        if !task.category.is_empty() {
            writeln!(f, "- Category: {}", task.category)?;
        }

        if let Some(due) = task.due_date {
            let today = self.now.to_zoned(self.tz.clone()).date();
            let label = due_date_label(due, today);
            if is_overdue(task, self.now) {
                writeln!(f, "- Due: {label} (overdue)")?;
            } else {
                writeln!(f, "- Due: {label}")?;
            }
        }

        let created = relative_day_label(task.created_at, self.now, &self.tz);
        if self.detailed {
            writeln!(
                f,
                "- Created: {created} ({})",
                LocalDateTime::in_zone(&task.created_at, self.tz.clone())
            )?;
        } else {
            writeln!(f, "- Created: {created}")?;
        }

        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TaskView::new(self).detailed())
    }
}

impl fmt::Display for TaskCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Total: {}", self.total)?;
        writeln!(
            f,
            "- Completed: {} ({}%)",
            self.completed,
            self.completion_rate()
        )?;
        writeln!(f, "- Pending: {}", self.pending)?;
        writeln!(f, "- Important: {}", self.important)
    }
}

impl fmt::Display for TabCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| format!("{} ({})", tab.label(), self.get(*tab)))
            .collect();
        writeln!(f, "{}", labels.join(" | "))
    }
}
