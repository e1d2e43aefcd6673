use tempfile::NamedTempFile;
use todo_core::{SqliteStorage, Storage};

/// Helper function to create a temporary storage file for testing
fn create_test_storage() -> (NamedTempFile, SqliteStorage) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let storage = SqliteStorage::open(temp_file.path()).expect("Failed to open test storage");
    (temp_file, storage)
}

#[test]
fn test_storage_initialization() {
    let (temp_file, storage) = create_test_storage();

    assert!(temp_file.path().exists());
    assert_eq!(storage.get_item("todoTasks").unwrap(), None);
}

#[test]
fn test_values_survive_reopen() {
    let (temp_file, mut storage) = create_test_storage();
    storage
        .set_item("todoTasks", "[]")
        .expect("Failed to write item");
    drop(storage);

    let storage = SqliteStorage::open(temp_file.path()).expect("Failed to reopen storage");
    assert_eq!(
        storage.get_item("todoTasks").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_set_item_replaces_value() {
    let (_temp_file, mut storage) = create_test_storage();
    storage.set_item("todoTasks", "first").unwrap();
    storage.set_item("todoTasks", "second").unwrap();

    assert_eq!(
        storage.get_item("todoTasks").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn test_open_on_directory_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let result = SqliteStorage::open(temp_dir.path());
    assert!(result.is_err());
}
