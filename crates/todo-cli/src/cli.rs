//! Command execution for the terminal interface.
//!
//! [`Cli`] runs one command against the task store and renders the result
//! as markdown. Mutations print a notification line first ("Task
//! completed!", "Error saving tasks!") followed by the affected task.

use std::fmt::Display;

use anyhow::{Context, Result};
use todo_core::{
    params::{AddTask, DeleteTask, Id, ListTasks, SetCompleted, UpdateTask},
    CreateResult, DeleteResult, Notification, OperationStatus, TaskStore, TodoError,
};

use crate::renderer::TerminalRenderer;

/// Executes CLI commands against a task store.
pub struct Cli {
    store: TaskStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TaskStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Hand the store over, e.g. to the MCP server.
    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Default view: tab counts, statistics and every task.
    pub fn overview(&self) -> Result<()> {
        let listing = self.store.list_tasks(&ListTasks::default())?;
        self.renderer.render(&format!(
            "# Tasks\n\n{}\n{}\n{listing}",
            self.store.tab_counts(),
            self.store.task_counts()
        ))
    }

    pub fn add(&mut self, params: &AddTask) -> Result<()> {
        let result = self.store.add_task(params);
        let task = self.saved(result, "Failed to add task")?;
        self.notify(Notification::TaskAdded, CreateResult::new(task))
    }

    pub fn list(&self, params: &ListTasks) -> Result<()> {
        let filter = params.validate()?;
        let listing = self.store.list_tasks(params)?;
        self.renderer.render(&format!(
            "# {} Tasks\n\n{}\n{listing}",
            filter.tab.label(),
            self.store.tab_counts()
        ))
    }

    pub fn show(&self, params: &Id) -> Result<()> {
        let task = self
            .store
            .show_task(params)
            .ok_or(TodoError::TaskNotFound { id: params.id })?;
        self.renderer.render(&task.to_string())
    }

    pub fn set_completed(&mut self, params: &SetCompleted) -> Result<()> {
        let result = self.store.set_task_completed(params);
        let task = self
            .saved(result, "Failed to update task")?
            .ok_or(TodoError::TaskNotFound { id: params.id })?;
        self.notify(Notification::for_completed(task.completed), task)
    }

    pub fn toggle(&mut self, params: &Id) -> Result<()> {
        let result = self.store.toggle_task(params);
        let task = self
            .saved(result, "Failed to toggle task")?
            .ok_or(TodoError::TaskNotFound { id: params.id })?;
        self.notify(Notification::for_completed(task.completed), task)
    }

    pub fn star(&mut self, params: &Id) -> Result<()> {
        let result = self.store.toggle_task_important(params);
        let task = self
            .saved(result, "Failed to star task")?
            .ok_or(TodoError::TaskNotFound { id: params.id })?;
        self.notify(Notification::for_important(task.important), task)
    }

    pub fn edit(&mut self, params: &UpdateTask) -> Result<()> {
        let result = self.store.update_task(params);
        let updated = self
            .saved(result, "Failed to update task")?
            .ok_or(TodoError::TaskNotFound { id: params.id })?;
        self.notify(Notification::TaskUpdated, updated)
    }

    pub fn delete(&mut self, params: &DeleteTask) -> Result<()> {
        let result = self.store.delete_task(params);
        let task = self
            .saved(result, "Failed to delete task")?
            .ok_or(TodoError::TaskNotFound { id: params.id })?;
        self.notify(Notification::TaskDeleted, DeleteResult::new(task))
    }

    pub fn stats(&self) -> Result<()> {
        self.renderer.render(&format!(
            "# Statistics\n\n{}\n{}",
            self.store.task_counts(),
            self.store.tab_counts()
        ))
    }

    pub fn categories(&self) -> Result<()> {
        self.renderer
            .render(&format!("# Categories\n\n{}", self.store.category_list()))
    }

    fn notify(&self, notification: Notification, details: impl Display) -> Result<()> {
        self.renderer.render(&format!(
            "{}\n{details}",
            OperationStatus::from(notification)
        ))
    }

    /// Tell the user when the write failed; the change itself still applies
    /// for the rest of this process.
    fn saved<T>(&self, result: todo_core::Result<T>, context: &'static str) -> Result<T> {
        if let Err(TodoError::Storage { .. }) = &result {
            self.renderer
                .render(&OperationStatus::from(Notification::SaveFailed).to_string())?;
        }
        result.context(context)
    }
}
