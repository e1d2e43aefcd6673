mod common;

use common::{create_test_store, database_path, open_store};
use rusqlite::{params, Connection};
use todo_core::{
    params::{AddTask, DeleteTask, ListTasks, SetCompleted, UpdateTask},
    Priority, TodoError, DEFAULT_STORAGE_KEY,
};

fn add(store: &mut todo_core::TaskStore, text: &str, category: &str, important: bool) -> u64 {
    store
        .add_task(&AddTask {
            text: text.to_string(),
            category: Some(category.to_string()),
            important,
            ..Default::default()
        })
        .expect("Failed to add task")
        .id
}

#[test]
fn test_store_round_trip_through_sqlite() {
    let (temp_dir, mut store) = create_test_store();

    add(&mut store, "Buy milk", "Shopping", true);
    let report = add(&mut store, "Write report", "Work", false);
    store
        .set_task_completed(&SetCompleted {
            id: report,
            completed: true,
        })
        .unwrap();
    store
        .update_task(&UpdateTask {
            id: report,
            priority: Some("high".to_string()),
            due_date: Some("2024-06-01".to_string()),
            ..Default::default()
        })
        .unwrap();

    let expected = store.tasks().to_vec();
    drop(store);

    let reopened = open_store(&database_path(&temp_dir));
    assert_eq!(reopened.tasks(), expected.as_slice());
    assert_eq!(reopened.tasks()[0].priority, Priority::High);
}

#[test]
fn test_persisted_blob_is_camel_case_json() {
    let (temp_dir, mut store) = create_test_store();
    add(&mut store, "Buy milk", "", false);
    drop(store);

    let conn = Connection::open(database_path(&temp_dir)).unwrap();
    let raw: String = conn
        .query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            params![DEFAULT_STORAGE_KEY],
            |row| row.get(0),
        )
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert_eq!(record["text"], "Buy milk");
    assert_eq!(record["completed"], false);
    assert_eq!(record["priority"], "medium");
    assert!(record["createdAt"].is_string());
    assert!(record.get("dueDate").is_none());
}

#[test]
fn test_malformed_blob_loads_empty() {
    let (temp_dir, store) = create_test_store();
    drop(store);

    let conn = Connection::open(database_path(&temp_dir)).unwrap();
    conn.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)",
        params![DEFAULT_STORAGE_KEY, "{not json"],
    )
    .unwrap();
    drop(conn);

    let mut store = open_store(&database_path(&temp_dir));
    assert!(store.is_empty());

    // The next write replaces the discarded blob
    add(&mut store, "Fresh start", "", false);
    let reopened = open_store(&database_path(&temp_dir));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_blob_from_browser_variant_loads() {
    let (temp_dir, store) = create_test_store();
    drop(store);

    let raw = r#"[
        {"id": 1709800000000, "text": "Plain task", "completed": false,
         "priority": "normal", "category": null, "dueDate": "",
         "important": false, "createdAt": "2024-03-07T08:26:40.000Z"},
        {"id": 1709700000000, "text": "Old task", "completed": true,
         "createdAt": "2024-03-06T04:40:00.000Z"}
    ]"#;
    let conn = Connection::open(database_path(&temp_dir)).unwrap();
    conn.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)",
        params![DEFAULT_STORAGE_KEY, raw],
    )
    .unwrap();
    drop(conn);

    let store = open_store(&database_path(&temp_dir));
    assert_eq!(store.len(), 2);
    assert_eq!(store.tasks()[0].priority, Priority::Normal);
    assert_eq!(store.tasks()[0].category, "");
    assert_eq!(store.tasks()[0].due_date, None);
    assert_eq!(store.tasks()[1].priority, Priority::Medium);
    assert!(store.tasks()[1].completed);
}

#[test]
fn test_sample_filters() {
    let (_temp_dir, mut store) = create_test_store();
    let report = add(&mut store, "Write report", "Work", false);
    add(&mut store, "Buy milk", "Shopping", true);
    store
        .set_task_completed(&SetCompleted {
            id: report,
            completed: true,
        })
        .unwrap();

    let list = |store: &todo_core::TaskStore, params: ListTasks| -> Vec<String> {
        store
            .list_tasks(&params)
            .unwrap()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    };
    let tab = |name: &str| ListTasks {
        tab: Some(name.to_string()),
        ..Default::default()
    };

    assert_eq!(list(&store, tab("active")), vec!["Buy milk"]);
    assert_eq!(list(&store, tab("completed")), vec!["Write report"]);
    assert_eq!(list(&store, tab("important")), vec!["Buy milk"]);
    assert_eq!(
        list(
            &store,
            ListTasks {
                category: Some("Shopping".to_string()),
                search: Some("milk".to_string()),
                ..Default::default()
            }
        ),
        vec!["Buy milk"]
    );
    assert_eq!(
        list(
            &store,
            ListTasks {
                search: Some("RePoRt".to_string()),
                ..Default::default()
            }
        ),
        vec!["Write report"]
    );

    let counts = store.task_counts();
    assert_eq!(counts.important, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.completion_rate(), 50);
}

#[test]
fn test_invalid_input_is_reported() {
    let (_temp_dir, mut store) = create_test_store();

    let err = store
        .add_task(&AddTask {
            text: "   ".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(store.is_empty());

    let err = store
        .list_tasks(&ListTasks {
            tab: Some("later".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, TodoError::InvalidInput { .. }));

    let id = add(&mut store, "Keep", "", false);
    let err = store
        .delete_task(&DeleteTask {
            id,
            confirmed: false,
        })
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(store.len(), 1);
}
