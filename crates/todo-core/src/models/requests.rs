//! Request types for creating and updating tasks.

use jiff::civil::Date;

use super::{Priority, Task};

/// A task draft, before the store assigns its id and creation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub text: String,
    pub category: String,
    pub priority: Priority,
    pub due_date: Option<Date>,
    pub important: bool,
}

impl NewTask {
    /// Create a draft with the given text and default metadata.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::models::{NewTask, Priority};
    ///
    /// let draft = NewTask::new("Buy milk");
    /// assert_eq!(draft.priority, Priority::Medium);
    /// assert!(draft.category.is_empty());
    /// assert!(!draft.important);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: Date) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Mark the draft as important.
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

/// Partial update merged into an existing task.
///
/// `None` leaves a field untouched. `due_date` is doubly optional so a caller
/// can clear the due date with `Some(None)`. The id and creation time are not
/// updatable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub text: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<Date>>,
    pub important: Option<bool>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Returns true when the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.important.is_none()
            && self.completed.is_none()
    }

    /// Merge the update into `task`, returning a description of each field
    /// that actually changed.
    ///
    /// Text is stored trimmed. Validation happens in the store before this
    /// is called.
    pub fn apply_to(&self, task: &mut Task) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(text) = &self.text {
            let text = text.trim();
            if task.text != text {
                task.text = text.to_string();
                changes.push("Updated text".to_string());
            }
        }

        if let Some(category) = &self.category {
            if &task.category != category {
                task.category = category.clone();
                changes.push(if category.is_empty() {
                    "Cleared category".to_string()
                } else {
                    format!("Set category to {category}")
                });
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                task.priority = priority;
                changes.push(format!("Set priority to {}", priority.as_str()));
            }
        }

        if let Some(due_date) = self.due_date {
            if task.due_date != due_date {
                task.due_date = due_date;
                changes.push(match due_date {
                    Some(date) => format!("Set due date to {date}"),
                    None => "Cleared due date".to_string(),
                });
            }
        }

        if let Some(important) = self.important {
            if task.important != important {
                task.important = important;
                changes.push(if important {
                    "Marked as important".to_string()
                } else {
                    "Unmarked as important".to_string()
                });
            }
        }

        if let Some(completed) = self.completed {
            if task.completed != completed {
                task.completed = completed;
                changes.push(if completed {
                    "Marked as completed".to_string()
                } else {
                    "Marked as pending".to_string()
                });
            }
        }

        changes
    }
}
