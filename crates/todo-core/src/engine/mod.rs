//! Filter and derivation engine.
//!
//! Everything the presentation layers show about the task list is derived
//! here, by pure functions of the task collection and explicitly passed view
//! state. Nothing in this module touches storage or reads the clock.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Task Store    │    │     Engine      │    │  CLI / MCP      │
//! │  (ordered Vec)  │───▶│ filter, counts, │───▶│  rendering      │
//! │                 │    │ dates           │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`filter`]: visible-task selection ([`TaskFilter::apply`]) and the
//!   category list
//! - [`stats`]: [`TaskCounts`] and [`TabCounts`]
//! - [`dates`]: overdue state and relative day labels
//!
//! [`TaskFilter::apply`]: crate::models::TaskFilter::apply

pub mod dates;
pub mod filter;
pub mod stats;


pub use dates::{due_date_label, is_overdue, relative_day_label};
pub use filter::categories;
pub use stats::{TabCounts, TaskCounts};
