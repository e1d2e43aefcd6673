//! Error handling utilities for MCP server

use rmcp::ErrorData;
use todo_core::{Notification, TodoError};

/// Convert a store error into an MCP error.
///
/// Bad input becomes `invalid_params`; everything else is an internal error.
/// Failed writes carry the "Error saving tasks!" notification.
pub fn to_mcp_error(message: &str, error: &TodoError) -> ErrorData {
    match error {
        TodoError::InvalidInput { .. } | TodoError::TaskNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        TodoError::Storage { .. } => ErrorData::internal_error(
            format!("{} {message}: {error}", Notification::SaveFailed),
            None,
        ),
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

/// Error for a task id that does not exist.
pub fn task_not_found(id: u64) -> ErrorData {
    to_mcp_error("Lookup failed", &TodoError::TaskNotFound { id })
}
