//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use todo_core::{
    display::{CreateResult, DeleteResult},
    params as core, Notification, OperationStatus, TaskStore,
};
use tokio::sync::Mutex;

use super::errors::{task_not_found, to_mcp_error};

// The store's parameter types stay free of MCP concerns. This transparent
// wrapper adds the Deserialize + JsonSchema pair rmcp needs and passes the
// JSON straight through to the wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type AddTask = McpParams<core::AddTask>;
pub type ListTasks = McpParams<core::ListTasks>;
pub type SetCompleted = McpParams<core::SetCompleted>;
pub type UpdateTask = McpParams<core::UpdateTask>;
pub type DeleteTask = McpParams<core::DeleteTask>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn notify(notification: Notification, details: impl std::fmt::Display) -> McpResult {
    text_result(format!("{}\n{details}", OperationStatus::from(notification)))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: Arc<Mutex<TaskStore>>,
}

impl McpHandlers {
    pub fn new(store: Arc<Mutex<TaskStore>>) -> Self {
        Self { store }
    }

    pub async fn add_task(&self, Parameters(params): Parameters<AddTask>) -> McpResult {
        debug!("add_task: {params:?}");

        let task = self
            .store
            .lock()
            .await
            .add_task(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to add task", &e))?;

        notify(Notification::TaskAdded, CreateResult::new(task))
    }

    pub async fn list_tasks(&self, Parameters(params): Parameters<ListTasks>) -> McpResult {
        debug!("list_tasks: {params:?}");

        let store = self.store.lock().await;
        let inner_params = params.as_ref();
        let filter = inner_params
            .validate()
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;
        let listing = store
            .list_tasks(inner_params)
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        text_result(format!(
            "# {} Tasks\n\n{}\n{listing}",
            filter.tab.label(),
            store.tab_counts()
        ))
    }

    pub async fn show_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_task: {params:?}");

        let id = params.as_ref().id;
        let task = self
            .store
            .lock()
            .await
            .show_task(params.as_ref())
            .ok_or_else(|| task_not_found(id))?;

        text_result(task.to_string())
    }

    pub async fn set_task_completed(
        &self,
        Parameters(params): Parameters<SetCompleted>,
    ) -> McpResult {
        debug!("set_task_completed: {params:?}");

        let id = params.as_ref().id;
        let task = self
            .store
            .lock()
            .await
            .set_task_completed(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update task", &e))?
            .ok_or_else(|| task_not_found(id))?;

        notify(Notification::for_completed(task.completed), task)
    }

    pub async fn toggle_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_task: {params:?}");

        let id = params.as_ref().id;
        let task = self
            .store
            .lock()
            .await
            .toggle_task(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to toggle task", &e))?
            .ok_or_else(|| task_not_found(id))?;

        notify(Notification::for_completed(task.completed), task)
    }

    pub async fn toggle_important(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_important: {params:?}");

        let id = params.as_ref().id;
        let task = self
            .store
            .lock()
            .await
            .toggle_task_important(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to toggle important flag", &e))?
            .ok_or_else(|| task_not_found(id))?;

        notify(Notification::for_important(task.important), task)
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");

        let id = params.as_ref().id;
        let updated = self
            .store
            .lock()
            .await
            .update_task(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update task", &e))?
            .ok_or_else(|| task_not_found(id))?;

        notify(Notification::TaskUpdated, updated)
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<DeleteTask>) -> McpResult {
        debug!("delete_task: {params:?}");

        let id = params.as_ref().id;
        let task = self
            .store
            .lock()
            .await
            .delete_task(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?
            .ok_or_else(|| task_not_found(id))?;

        notify(Notification::TaskDeleted, DeleteResult::new(task))
    }

    pub async fn task_stats(&self) -> McpResult {
        debug!("task_stats");

        let store = self.store.lock().await;
        text_result(format!(
            "# Statistics\n\n{}\n{}",
            store.task_counts(),
            store.tab_counts()
        ))
    }

    pub async fn list_categories(&self) -> McpResult {
        debug!("list_categories");

        let categories = self.store.lock().await.category_list();
        text_result(format!("# Categories\n\n{categories}"))
    }
}

#[cfg(test)]
mod tests {
    use todo_core::{MemoryStorage, TaskStoreBuilder};

    use super::*;

    fn handlers() -> McpHandlers {
        let store = TaskStoreBuilder::new()
            .with_storage(MemoryStorage::new())
            .build()
            .expect("Failed to create test store");
        McpHandlers::new(Arc::new(Mutex::new(store)))
    }

    fn params<T: JsonSchema>(value: T) -> Parameters<McpParams<T>> {
        Parameters(McpParams(value))
    }

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn test_params_deserialize_transparently() {
        let parsed: AddTask = serde_json::from_value(serde_json::json!({
            "text": "Buy milk",
            "category": "Shopping",
            "important": true
        }))
        .unwrap();

        assert_eq!(parsed.as_ref().text, "Buy milk");
        assert_eq!(parsed.as_ref().category.as_deref(), Some("Shopping"));
        assert!(parsed.as_ref().important);
        assert_eq!(parsed.as_ref().priority, None);
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let handlers = handlers();
        let added = handlers
            .add_task(params(core::AddTask {
                text: "Buy milk".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert!(text(&added).starts_with("Success: Task added successfully!"));

        let listed = handlers
            .list_tasks(params(core::ListTasks::default()))
            .await
            .unwrap();
        let output = text(&listed);
        assert!(output.starts_with("# All Tasks"));
        assert!(output.contains("Buy milk"));
    }

    #[tokio::test]
    async fn test_blank_text_is_invalid_params() {
        let err = handlers()
            .add_task(params(core::AddTask {
                text: "  ".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_missing_task_is_reported() {
        let err = handlers()
            .toggle_task(params(core::Id { id: 99 }))
            .await
            .unwrap_err();
        assert!(err.message.contains("Task with ID 99 not found"));
    }
}
