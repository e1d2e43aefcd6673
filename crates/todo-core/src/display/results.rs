//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Task;

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Lists each field that changed; an update that changed nothing says so.
///
/// # Examples
///
/// ```rust
/// use todo_core::{
///     display::UpdateResult,
///     models::{Priority, Task},
/// };
/// use jiff::Timestamp;
///
/// let task = Task {
///     id: 7,
///     text: "Water plants".to_string(),
///     completed: true,
///     priority: Priority::Low,
///     category: String::new(),
///     due_date: None,
///     important: false,
///     created_at: Timestamp::now(),
/// };
///
/// let result = UpdateResult::with_changes(task, vec!["Marked as completed".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated task with ID: 7"));
/// assert!(output.contains("- Marked as completed"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;
        writeln!(f)?;

        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.text, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Priority;

    fn task() -> Task {
        Task {
            id: 3,
            text: "Renew passport".to_string(),
            completed: false,
            priority: Priority::Medium,
            category: String::new(),
            due_date: None,
            important: false,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(task()).to_string();
        assert!(output.contains("No changes made."));
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        assert_eq!(
            DeleteResult::new(task()).to_string(),
            "Deleted task 'Renew passport' (ID: 3)\n"
        );
    }
}
