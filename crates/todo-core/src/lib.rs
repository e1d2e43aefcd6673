//! Core library for the todo application.
//!
//! This crate holds everything the interfaces share: the task model, the
//! task store and its local storage, the filter/derivation engine and the
//! markdown display types.
//!
//! - [`models`]: [`Task`] and the request/filter types
//! - [`store`]: [`TaskStore`], the single owner of the task collection
//! - [`storage`]: key/value persistence ([`SqliteStorage`], [`MemoryStorage`])
//! - [`engine`]: visible tasks, counts, categories and date labels
//! - [`params`]: raw request parameters shared by the CLI and MCP server
//! - [`display`]: `Display` implementations and result wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use todo_core::{
//!     params::{AddTask, ListTasks},
//!     TaskStoreBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = TaskStoreBuilder::new()
//!     .with_database_path(Some("todo.db"))
//!     .build()?;
//!
//! let task = store.add_task(&AddTask {
//!     text: "Write report".to_string(),
//!     category: Some("Work".to_string()),
//!     ..Default::default()
//! })?;
//! println!("{task}");
//!
//! let listing = store.list_tasks(&ListTasks {
//!     tab: Some("active".to_string()),
//!     ..Default::default()
//! })?;
//! println!("{listing}");
//! println!("{}", store.task_counts());
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use display::{
    Categories, CreateResult, DeleteResult, LocalDateTime, Notification, OperationStatus,
    TaskListing, TaskView, UpdateResult,
};
pub use engine::{TabCounts, TaskCounts};
pub use error::{Result, TodoError};
pub use models::{CategoryFilter, NewTask, Priority, Tab, Task, TaskFilter, TaskUpdate};
pub use params::{AddTask, DeleteTask, Id, ListTasks, SetCompleted, UpdateTask};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{TaskStore, TaskStoreBuilder, DEFAULT_STORAGE_KEY};
