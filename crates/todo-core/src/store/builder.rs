//! Builder for creating and configuring TaskStore instances.

use std::path::{Path, PathBuf};

use log::info;

use super::TaskStore;
use crate::{
    error::{Result, TodoError},
    storage::{SqliteStorage, Storage},
};

/// Local storage key holding the task collection.
pub const DEFAULT_STORAGE_KEY: &str = "todoTasks";

/// Builder for creating and configuring TaskStore instances.
#[derive(Default)]
pub struct TaskStoreBuilder {
    database_path: Option<PathBuf>,
    storage_key: Option<String>,
    storage: Option<Box<dyn Storage + Send>>,
}

impl TaskStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/todo/todo.db` or `~/.local/share/todo/todo.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the local storage key, `todoTasks` by default.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Uses the given storage backend instead of a SQLite file.
    ///
    /// Takes precedence over [`with_database_path`](Self::with_database_path).
    pub fn with_storage<S>(mut self, storage: S) -> Self
    where
        S: Storage + Send + 'static,
    {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Opens the storage backend and loads the saved task collection.
    ///
    /// Unreadable saved data is discarded with a warning, so a store is
    /// returned even when the collection cannot be restored.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::XdgDirectory` if the default path cannot be resolved
    /// Returns `TodoError::FileSystem` if the database directory cannot be created
    /// Returns `TodoError::Storage` if the database cannot be opened
    pub fn build(self) -> Result<TaskStore> {
        let key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| TodoError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                info!("Opening task storage at {}", db_path.display());
                Box::new(SqliteStorage::open(&db_path)?)
            }
        };

        let mut store = TaskStore::new(storage, key);
        store.load_all();
        info!("Loaded {} tasks", store.len());
        Ok(store)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("todo")
            .place_data_file("todo.db")
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }
}
