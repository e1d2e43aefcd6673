//! The task store: the ordered task collection and its persistence.
//!
//! [`TaskStore`] owns the task list and is the only place that mutates it.
//! Every mutation writes the whole collection back to local storage as one
//! JSON array; the collection is read once, when the store is opened.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  Local storage  │
//! │  (params in,    │───▶│  (task_ops,     │───▶│  (storage/)     │
//! │   views out)    │    │   persistence)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: opens a store over SQLite or an injected backend
//! - [`task_ops`]: add, remove, complete, star and update
//! - [`persistence`]: whole-collection load and save
//! - [`handlers`]: parameter-level operations shared by the CLI and MCP server
//!
//! Absent ids are no-ops at this level: the operation returns `None` and
//! nothing is written.
//!
//! # Examples
//!
//! ```rust
//! use todo_core::{models::NewTask, MemoryStorage, TaskStoreBuilder};
//!
//! let mut store = TaskStoreBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()?;
//!
//! let task = store.add(NewTask::new("Buy milk").with_category("Shopping"))?;
//! store.set_completed(task.id, true)?;
//!
//! assert_eq!(store.len(), 1);
//! assert!(store.get(task.id).is_some_and(|t| t.completed));
//! # Ok::<(), todo_core::TodoError>(())
//! ```

pub mod builder;
pub mod handlers;
pub mod persistence;
pub mod task_ops;


pub use builder::{TaskStoreBuilder, DEFAULT_STORAGE_KEY};

use crate::{models::Task, storage::Storage};

/// Ordered task collection bound to a local storage key.
pub struct TaskStore {
    /// Newest-created first
    pub(crate) tasks: Vec<Task>,
    pub(crate) storage: Box<dyn Storage + Send>,
    pub(crate) key: String,
}

impl TaskStore {
    /// Creates an empty store; callers load the saved collection afterwards.
    pub(crate) fn new(storage: Box<dyn Storage + Send>, key: String) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
            key,
        }
    }

    /// All tasks in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The local storage key the collection is saved under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }
}
