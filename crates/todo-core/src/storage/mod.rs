//! Local storage backends.
//!
//! The task store persists through a small string key/value interface, the
//! same shape as a browser's `localStorage`: one key maps to one serialized
//! value. Two backends are provided:
//!
//! - [`SqliteStorage`]: a single-table SQLite file, used by the CLI and the
//!   MCP server
//! - [`MemoryStorage`]: a process-local map, used by tests and throwaway
//!   stores

use std::collections::HashMap;

use crate::error::Result;

pub mod sqlite;

pub use sqlite::SqliteStorage;

/// String key/value persistence used by the task store.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory storage pre-populated with one value.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
