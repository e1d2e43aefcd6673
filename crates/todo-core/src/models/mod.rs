//! Data models for tasks.
//!
//! This module contains the core domain model of the to-do list, the
//! [`Task`], together with the request types used to create and update it and
//! the filter types describing the current view. Display implementations live
//! in [`crate::display::models`] so the data structures stay free of
//! presentation concerns.
//!
//! # Persisted Format
//!
//! Tasks serialize to camelCase JSON, which is the format kept in local
//! storage:
//!
//! ```rust
//! use todo_core::models::{Priority, Task};
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1700000000000,
//!     text: "Buy milk".to_string(),
//!     completed: false,
//!     priority: Priority::High,
//!     category: "Shopping".to_string(),
//!     due_date: Some("2024-03-01".parse().unwrap()),
//!     important: true,
//!     created_at: "2024-02-27T09:30:00Z".parse::<Timestamp>().unwrap(),
//! };
//!
//! let json = serde_json::to_string(&task).unwrap();
//! assert!(json.contains("\"dueDate\":\"2024-03-01\""));
//! assert!(json.contains("\"createdAt\":\"2024-02-27T09:30:00Z\""));
//! ```

pub mod filters;
pub mod priority;
pub mod requests;
pub mod task;


pub use filters::{CategoryFilter, Tab, TaskFilter};
pub use priority::Priority;
pub use requests::{NewTask, TaskUpdate};
pub use task::Task;
