//! Status and notification message types for operation feedback.

use std::fmt;

/// User-facing notification shown after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    TaskAdded,
    TaskCompleted,
    TaskReopened,
    TaskStarred,
    TaskUnstarred,
    TaskUpdated,
    TaskDeleted,
    SaveFailed,
}

impl Notification {
    /// Notification for a completed flag that is now `completed`.
    pub fn for_completed(completed: bool) -> Self {
        if completed {
            Notification::TaskCompleted
        } else {
            Notification::TaskReopened
        }
    }

    /// Notification for an important flag that is now `important`.
    pub fn for_important(important: bool) -> Self {
        if important {
            Notification::TaskStarred
        } else {
            Notification::TaskUnstarred
        }
    }

    /// The message text.
    pub fn message(&self) -> &'static str {
        match self {
            Notification::TaskAdded => "Task added successfully!",
            Notification::TaskCompleted => "Task completed!",
            Notification::TaskReopened => "Task marked as pending!",
            Notification::TaskStarred => "Task marked as important!",
            Notification::TaskUnstarred => "Task unmarked as important!",
            Notification::TaskUpdated => "Task updated successfully!",
            Notification::TaskDeleted => "Task deleted!",
            Notification::SaveFailed => "Error saving tasks!",
        }
    }

    /// Whether this reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::SaveFailed)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<Notification> for OperationStatus {
    fn from(notification: Notification) -> Self {
        let message = notification.message().to_string();
        if notification.is_error() {
            Self::failure(message)
        } else {
            Self::success(message)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
