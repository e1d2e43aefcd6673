use std::path::{Path, PathBuf};

use tempfile::TempDir;
use todo_core::{TaskStore, TaskStoreBuilder};

/// Helper function to create a test store backed by a SQLite file
pub fn create_test_store() -> (TempDir, TaskStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&database_path(&temp_dir));
    (temp_dir, store)
}

/// Path of the database file inside a test directory
pub fn database_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("todo.db")
}

/// Open (or reopen) a store on an existing database file
pub fn open_store(db_path: &Path) -> TaskStore {
    TaskStoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to create task store")
}
