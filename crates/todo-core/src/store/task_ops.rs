//! Task mutations.
//!
//! Each successful mutation persists the whole collection before returning.
//! When that write fails the in-memory change is kept and the storage error
//! is returned.

use jiff::Timestamp;
use log::debug;

use super::TaskStore;
use crate::{
    error::{Result, TodoError},
    models::{NewTask, Task, TaskUpdate},
};

impl TaskStore {
    /// Add a task to the front of the list.
    ///
    /// The text is stored trimmed. The id is the creation time in
    /// milliseconds, bumped past the largest existing id when two tasks are
    /// created within the same millisecond.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the text is empty after trimming;
    ///   the collection is left unchanged
    /// * `TodoError::Configuration` - When the largest saved id leaves no
    ///   room for another
    /// * `TodoError::Storage` - When the collection could not be saved
    pub fn add(&mut self, draft: NewTask) -> Result<Task> {
        self.add_at(draft, Timestamp::now())
    }

    pub(crate) fn add_at(&mut self, draft: NewTask, now: Timestamp) -> Result<Task> {
        let text = draft.text.trim();
        if text.is_empty() {
            return Err(TodoError::invalid_input("text").with_reason("Task text cannot be empty"));
        }

        let task = Task {
            id: self.next_id(now)?,
            text: text.to_string(),
            completed: false,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            important: draft.important,
            created_at: now,
        };
        debug!("Adding task {}: {}", task.id, task.text);

        self.tasks.insert(0, task.clone());
        self.persist_all()?;
        Ok(task)
    }

    /// Remove a task, returning it. Absent ids are a no-op.
    pub fn remove(&mut self, id: u64) -> Result<Option<Task>> {
        let Some(index) = self.position(id) else {
            debug!("Remove: task {id} not found");
            return Ok(None);
        };

        let task = self.tasks.remove(index);
        debug!("Removed task {id}");
        self.persist_all()?;
        Ok(Some(task))
    }

    /// Set the completed flag. Absent ids are a no-op.
    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<Option<Task>> {
        self.modify(id, |task| task.completed = completed)
    }

    /// Flip the completed flag. Absent ids are a no-op.
    pub fn toggle_completed(&mut self, id: u64) -> Result<Option<Task>> {
        self.modify(id, |task| task.completed = !task.completed)
    }

    /// Flip the important flag. Absent ids are a no-op.
    pub fn toggle_important(&mut self, id: u64) -> Result<Option<Task>> {
        self.modify(id, |task| task.important = !task.important)
    }

    /// Merge a partial update into a task.
    ///
    /// Returns the updated task and a description of each field that
    /// changed. Absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the new text is empty after
    ///   trimming; the task is left unchanged
    /// * `TodoError::Storage` - When the collection could not be saved
    pub fn update(&mut self, id: u64, update: &TaskUpdate) -> Result<Option<(Task, Vec<String>)>> {
        if update.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(TodoError::invalid_input("text").with_reason("Task text cannot be empty"));
        }

        let Some(index) = self.position(id) else {
            debug!("Update: task {id} not found");
            return Ok(None);
        };

        let changes = update.apply_to(&mut self.tasks[index]);
        let task = self.tasks[index].clone();
        debug!("Updated task {id}: {changes:?}");

        self.persist_all()?;
        Ok(Some((task, changes)))
    }

    fn modify<F>(&mut self, id: u64, change: F) -> Result<Option<Task>>
    where
        F: FnOnce(&mut Task),
    {
        let Some(index) = self.position(id) else {
            debug!("Task {id} not found");
            return Ok(None);
        };

        change(&mut self.tasks[index]);
        let task = self.tasks[index].clone();
        debug!(
            "Task {id}: completed={}, important={}",
            task.completed, task.important
        );

        self.persist_all()?;
        Ok(Some(task))
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn next_id(&self, now: Timestamp) -> Result<u64> {
        let millis = u64::try_from(now.as_millisecond()).unwrap_or(0);
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= millis => max.checked_add(1).ok_or_else(|| {
                TodoError::Configuration {
                    message: format!("No task id available after {max}"),
                }
            }),
            _ => Ok(millis),
        }
    }
}
