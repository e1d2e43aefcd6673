//! Display formatting for tasks, listings and operation results.
//!
//! Every interface prints the same markdown: the CLI renders it in the
//! terminal and the MCP server returns it as tool output.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │   Formatted     │
//! │  (Task, counts) │───▶│    Wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`models`]: `Display` for [`Task`](crate::models::Task), priorities,
//!   tabs and counts, plus [`TaskView`] for rendering against a fixed clock
//! - [`collections`]: [`TaskListing`] with its empty states, [`Categories`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] and the user-facing [`Notification`]s
//! - [`datetime`]: [`LocalDateTime`]
//!
//! # Examples
//!
//! ```rust
//! use todo_core::{
//!     display::{CreateResult, Notification, OperationStatus},
//!     models::{Priority, Task},
//! };
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1,
//!     text: "Buy milk".to_string(),
//!     completed: false,
//!     priority: Priority::High,
//!     category: "Shopping".to_string(),
//!     due_date: None,
//!     important: false,
//!     created_at: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(task).to_string();
//! assert!(output.contains("Created task with ID: 1"));
//! assert!(output.contains("Buy milk"));
//!
//! let status = OperationStatus::from(Notification::TaskAdded);
//! assert_eq!(status.to_string(), "Success: Task added successfully!\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Categories, TaskListing};
pub use datetime::LocalDateTime;
pub use models::TaskView;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{Notification, OperationStatus};
