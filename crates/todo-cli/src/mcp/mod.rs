//! MCP server implementation for the to-do list
//!
//! Exposes the task store to AI assistants over the Model Context Protocol.
//! Every tool maps to one store operation and returns the same markdown the
//! CLI prints.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use todo_core::TaskStore;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{AddTask, DeleteTask, Id, ListTasks, McpResult, SetCompleted, UpdateTask};

/// MCP server for the to-do list
#[derive(Clone)]
pub struct TodoMcpServer {
    store: Arc<Mutex<TaskStore>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TodoMcpServer {
    /// Create a new MCP server owning the store
    pub fn new(store: TaskStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "add_task",
        description = "Add a task to the to-do list. Provide the task text (required, must not be blank). Optionally set a category, a priority ('low', 'medium' or 'high'; default 'medium'), a due date as YYYY-MM-DD, and important=true to star it. New tasks start pending and appear at the top of the list."
    )]
    async fn add_task(&self, params: Parameters<AddTask>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.add_task(params).await
    }

    #[tool(
        name = "list_tasks",
        description = "List tasks, newest first. Narrow the list with a case-insensitive text search, a category name ('all' for every category), and a tab: 'all' (default), 'active' (not completed), 'completed', or 'important' (starred, completed or not). Returns task IDs, priorities, categories, due dates and the per-tab counts."
    )]
    async fn list_tasks(&self, params: Parameters<ListTasks>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.list_tasks(params).await
    }

    #[tool(
        name = "show_task",
        description = "Show every detail of a single task by ID, including its creation time."
    )]
    async fn show_task(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.show_task(params).await
    }

    #[tool(
        name = "set_task_completed",
        description = "Mark a task as completed (completed=true) or pending again (completed=false)."
    )]
    async fn set_task_completed(&self, params: Parameters<SetCompleted>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.set_task_completed(params).await
    }

    #[tool(
        name = "toggle_task",
        description = "Flip a task between completed and pending."
    )]
    async fn toggle_task(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.toggle_task(params).await
    }

    #[tool(
        name = "toggle_important",
        description = "Star or unstar a task as important. Important tasks show up in the 'important' tab."
    )]
    async fn toggle_important(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.toggle_important(params).await
    }

    #[tool(
        name = "update_task",
        description = "Edit an existing task by ID. Only the fields you pass change: text (must not be blank), category (empty string clears it), priority, due_date (YYYY-MM-DD, empty string clears it), important, completed. The ID and creation time never change. Returns the list of changes made."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.update_task(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Permanently delete a task. This cannot be undone, so 'confirmed' must be set to true."
    )]
    async fn delete_task(&self, params: Parameters<DeleteTask>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.delete_task(params).await
    }

    #[tool(
        name = "task_stats",
        description = "Summary counts: total, completed (with completion rate), pending, and pending important tasks, plus how many tasks each tab shows."
    )]
    async fn task_stats(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.task_stats().await
    }

    #[tool(
        name = "list_categories",
        description = "List the distinct categories in use, in the order they first appear in the task list. Use one of these names with list_tasks to filter by category."
    )]
    async fn list_categories(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.store.clone());
        handlers.list_categories().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "todo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"A personal to-do list kept in local storage.

## Core Concepts
- **Task**: text plus optional category, priority (low/medium/high), due date and an important star
- **Tabs**: 'all', 'active' (not completed), 'completed', 'important' (starred, including completed ones)

## Workflow
1. Add work with `add_task`
2. Review with `list_tasks`, filtering by search text, category or tab
3. Finish work with `set_task_completed` or `toggle_task`
4. Adjust details with `update_task`; star with `toggle_important`
5. Remove tasks with `delete_task` (confirmed=true)

## Overview
- `task_stats` for totals and completion rate
- `list_categories` for the categories in use

Tasks past their due date and not completed are marked "(overdue)"."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TodoMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting todo MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
