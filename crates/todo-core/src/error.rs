//! Error types for the todo library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all task store operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Local storage read/write errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TodoError {
        TodoError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TodoError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TodoError::InvalidInput { .. })
    }
}

/// Specialized extension trait for storage-related Results.
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TodoError::storage(message).with_source(e))
    }
}

/// Result type alias for task store operations
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = TodoError::invalid_input("text").with_reason("Task text cannot be empty");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'text': Task text cannot be empty"
        );
    }

    #[test]
    fn test_storage_context_wraps_source() {
        let failed: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = failed.storage_context("Failed to read tasks").unwrap_err();

        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("Failed to read tasks"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
