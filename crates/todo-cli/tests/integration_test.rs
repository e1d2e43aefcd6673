//! Integration tests comparing CLI output with the core Display
//! implementations that the MCP server also uses.

use std::process::Command;

use tempfile::TempDir;
use todo_core::{
    display::{CreateResult, DeleteResult},
    params::{AddTask, ListTasks},
    TaskStoreBuilder,
};

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_add_output_matches_create_result() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let cli_output = run_cli_command(db_str, &["add", "Integration task", "-c", "Testing"]);

    // The CLI wrote the task; read it back directly and render it the same way
    let store = TaskStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to open store");
    let task = store.tasks()[0].clone();
    let direct_output = CreateResult::new(task).to_string();

    assert!(cli_output.starts_with("Success: Task added successfully!\n"));
    assert!(cli_output.ends_with(&direct_output));
}

#[test]
fn test_list_output_matches_listing() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let mut store = TaskStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to open store");
    store
        .add_task(&AddTask {
            text: "Listed task".to_string(),
            category: Some("Home".to_string()),
            ..Default::default()
        })
        .expect("Failed to add task");

    let cli_output = run_cli_command(db_str, &["list", "--category", "Home"]);

    let params = ListTasks {
        category: Some("Home".to_string()),
        ..Default::default()
    };
    let listing = store.list_tasks(&params).expect("Failed to list tasks");

    assert!(cli_output.starts_with("# All Tasks\n\n"));
    assert!(cli_output.contains(&store.tab_counts().to_string()));
    // Relative created labels depend on the clock, so compare task headers
    for task in &listing {
        assert!(cli_output.contains(&format!("### [ ] {} (ID: {})", task.text, task.id)));
    }
}

#[test]
fn test_delete_output_matches_delete_result() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let mut store = TaskStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to open store");
    let task = store
        .add_task(&AddTask {
            text: "Short lived".to_string(),
            ..Default::default()
        })
        .expect("Failed to add task");

    let id = task.id.to_string();
    let cli_output = run_cli_command(db_str, &["delete", &id, "--confirm"]);
    let direct_output = DeleteResult::new(task).to_string();

    assert_eq!(
        cli_output,
        format!("Success: Task deleted!\n\n{direct_output}")
    );
}
