//! Parameter structures for task operations.
//!
//! These are the shared request shapes used by every interface. They carry
//! raw strings for priorities, tabs and dates; `validate()` turns them into
//! the typed requests the store works with and reports bad input as
//! [`TodoError::InvalidInput`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   validate()    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types with their own derives (clap `Args`,
//! a transparent serde wrapper for MCP) and convert with `.into()`.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TodoError},
    models::{CategoryFilter, NewTask, Priority, Tab, TaskFilter, TaskUpdate},
};

/// Generic parameters for operations requiring just a task ID.
///
/// Used by show_task, toggle_task and toggle_important.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the task to operate on
    pub id: u64,
}

/// Parameters for adding a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddTask {
    /// What needs doing (required, must not be blank)
    pub text: String,
    /// Optional free-text category
    #[serde(default)]
    pub category: Option<String>,
    /// Priority: 'low', 'medium' (default) or 'high'
    #[serde(default)]
    pub priority: Option<String>,
    /// Due date as YYYY-MM-DD
    #[serde(default)]
    pub due_date: Option<String>,
    /// Star the task as important
    #[serde(default)]
    pub important: bool,
}

impl AddTask {
    /// Parse the raw fields into a task draft.
    ///
    /// Blank text is left for the store to reject, so every interface gets
    /// the same error.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When priority or due date cannot be parsed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::{models::Priority, params::AddTask};
    ///
    /// let params = AddTask {
    ///     text: "Buy milk".to_string(),
    ///     priority: Some("high".to_string()),
    ///     ..Default::default()
    /// };
    /// let draft = params.validate()?;
    /// assert_eq!(draft.priority, Priority::High);
    ///
    /// let params = AddTask {
    ///     text: "Buy milk".to_string(),
    ///     due_date: Some("next week".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(params.validate().is_err());
    /// # Ok::<(), todo_core::TodoError>(())
    /// ```
    pub fn validate(&self) -> Result<NewTask> {
        let mut draft = NewTask::new(self.text.clone()).important(self.important);

        if let Some(category) = &self.category {
            draft = draft.with_category(category.trim());
        }
        if let Some(priority) = &self.priority {
            draft = draft.with_priority(parse_priority(priority)?);
        }
        if let Some(due_date) = parse_due_date(self.due_date.as_deref())? {
            draft = draft.with_due_date(due_date);
        }

        Ok(draft)
    }
}

/// Parameters for listing tasks.
///
/// All fields are optional; the defaults show every task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    /// Case-insensitive text to search for
    #[serde(default)]
    pub search: Option<String>,
    /// Category to show, or 'all'
    #[serde(default)]
    pub category: Option<String>,
    /// Tab: 'all', 'active', 'completed' or 'important'
    #[serde(default)]
    pub tab: Option<String>,
}

impl ListTasks {
    /// Build the view filter from the raw fields.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the tab name is unknown
    pub fn validate(&self) -> Result<TaskFilter> {
        let tab = match &self.tab {
            Some(tab) => tab.parse::<Tab>().map_err(|_| {
                TodoError::invalid_input("tab").with_reason(format!(
                    "Invalid tab: {tab}. Must be 'all', 'active', 'completed', or 'important'"
                ))
            })?,
            None => Tab::All,
        };

        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(name) => CategoryFilter::Named(name.to_string()),
        };

        Ok(TaskFilter::for_tab(tab)
            .with_category(category)
            .with_search(self.search.clone().unwrap_or_default()))
    }
}

/// Parameters for marking a task completed or pending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetCompleted {
    /// Task ID
    pub id: u64,
    /// true marks the task done, false marks it pending again
    pub completed: bool,
}

/// Parameters for editing an existing task.
///
/// Only the given fields change. An empty `due_date` clears the due date and
/// an empty `category` clears the category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// New text; must not be blank
    #[serde(default)]
    pub text: Option<String>,
    /// New category; empty string clears it
    #[serde(default)]
    pub category: Option<String>,
    /// New priority: 'low', 'medium' or 'high'
    #[serde(default)]
    pub priority: Option<String>,
    /// New due date as YYYY-MM-DD; empty string clears it
    #[serde(default)]
    pub due_date: Option<String>,
    /// Star or unstar the task
    #[serde(default)]
    pub important: Option<bool>,
    /// Mark the task done or pending
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTask {
    /// Parse the raw fields into a partial update.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When priority or due date cannot be parsed
    pub fn validate(&self) -> Result<TaskUpdate> {
        let priority = self.priority.as_deref().map(parse_priority).transpose()?;
        let due_date = match self.due_date.as_deref() {
            Some(raw) => Some(parse_due_date(Some(raw))?),
            None => None,
        };

        Ok(TaskUpdate {
            text: self.text.clone(),
            category: self.category.as_deref().map(|c| c.trim().to_string()),
            priority,
            due_date,
            important: self.important,
            completed: self.completed,
        })
    }
}

/// Parameters for permanently deleting a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteTask {
    /// Task ID to delete
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

fn parse_priority(raw: &str) -> Result<Priority> {
    raw.parse::<Priority>().map_err(|_| {
        TodoError::invalid_input("priority").with_reason(format!(
            "Invalid priority: {raw}. Must be 'low', 'medium', or 'high'"
        ))
    })
}

/// Blank input means "no due date".
fn parse_due_date(raw: Option<&str>) -> Result<Option<Date>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<Date>().map(Some).map_err(|e| {
            TodoError::invalid_input("due_date")
                .with_reason(format!("Invalid date: {raw}. Expected YYYY-MM-DD ({e})"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_add_task_validate_defaults() {
        let params = AddTask {
            text: "Buy milk".to_string(),
            ..Default::default()
        };
        let draft = params.validate().unwrap();

        assert_eq!(draft, NewTask::new("Buy milk"));
    }

    #[test]
    fn test_add_task_validate_all_fields() {
        let params = AddTask {
            text: "File taxes".to_string(),
            category: Some("  Finance ".to_string()),
            priority: Some("HIGH".to_string()),
            due_date: Some("2024-04-15".to_string()),
            important: true,
        };
        let draft = params.validate().unwrap();

        assert_eq!(draft.category, "Finance");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.due_date, Some(date(2024, 4, 15)));
        assert!(draft.important);
    }

    #[test]
    fn test_add_task_validate_blank_due_date_is_none() {
        let params = AddTask {
            text: "Call mom".to_string(),
            due_date: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap().due_date, None);
    }

    #[test]
    fn test_add_task_validate_invalid_priority() {
        let params = AddTask {
            text: "Call mom".to_string(),
            priority: Some("urgent".to_string()),
            ..Default::default()
        };
        match params.validate() {
            Err(TodoError::InvalidInput { field, reason }) => {
                assert_eq!(field, "priority");
                assert!(reason.contains("urgent"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_task_validate_invalid_due_date() {
        let params = AddTask {
            text: "Call mom".to_string(),
            due_date: Some("2024-13-40".to_string()),
            ..Default::default()
        };
        match params.validate() {
            Err(TodoError::InvalidInput { field, .. }) => assert_eq!(field, "due_date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_tasks_validate_defaults() {
        let filter = ListTasks::default().validate().unwrap();
        assert_eq!(filter, TaskFilter::default());
        assert!(!filter.is_narrowed());
    }

    #[test]
    fn test_list_tasks_validate_all_fields() {
        let params = ListTasks {
            search: Some("milk".to_string()),
            category: Some("Shopping".to_string()),
            tab: Some("done".to_string()),
        };
        let filter = params.validate().unwrap();

        assert_eq!(filter.search, "milk");
        assert_eq!(
            filter.category,
            CategoryFilter::Named("Shopping".to_string())
        );
        assert_eq!(filter.tab, Tab::Completed);
    }

    #[test]
    fn test_list_tasks_validate_category_all() {
        for category in ["all", "", "  "] {
            let params = ListTasks {
                category: Some(category.to_string()),
                ..Default::default()
            };
            assert_eq!(params.validate().unwrap().category, CategoryFilter::All);
        }
    }

    #[test]
    fn test_list_tasks_validate_invalid_tab() {
        let params = ListTasks {
            tab: Some("someday".to_string()),
            ..Default::default()
        };
        match params.validate() {
            Err(TodoError::InvalidInput { field, .. }) => assert_eq!(field, "tab"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_task_validate_no_changes() {
        let params = UpdateTask {
            id: 1,
            ..Default::default()
        };
        assert!(params.validate().unwrap().is_empty());
    }

    #[test]
    fn test_update_task_validate_due_date_set_and_clear() {
        let mut params = UpdateTask {
            id: 1,
            due_date: Some("2024-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap().due_date,
            Some(Some(date(2024, 5, 1)))
        );

        params.due_date = Some(String::new());
        assert_eq!(params.validate().unwrap().due_date, Some(None));
    }

    #[test]
    fn test_update_task_validate_passes_flags_through() {
        let params = UpdateTask {
            id: 1,
            text: Some("New text".to_string()),
            category: Some(" Home ".to_string()),
            priority: Some("low".to_string()),
            important: Some(true),
            completed: Some(false),
            ..Default::default()
        };
        let update = params.validate().unwrap();

        assert_eq!(update.text.as_deref(), Some("New text"));
        assert_eq!(update.category.as_deref(), Some("Home"));
        assert_eq!(update.priority, Some(Priority::Low));
        assert_eq!(update.important, Some(true));
        assert_eq!(update.completed, Some(false));
    }

    #[test]
    fn test_update_task_validate_invalid_priority() {
        let params = UpdateTask {
            id: 1,
            priority: Some("whenever".to_string()),
            ..Default::default()
        };
        assert!(params.validate().unwrap_err().is_invalid_input());
    }
}
