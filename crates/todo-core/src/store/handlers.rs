//! Parameter-level task operations that return display wrapper types.
//!
//! These are the intents both interfaces expose. They validate raw
//! parameters, call the store operations and hand back values ready to be
//! printed.

use super::TaskStore;
use crate::{
    display::{Categories, TaskListing, UpdateResult},
    engine::{self, TabCounts, TaskCounts},
    error::{Result, TodoError},
    models::Task,
    params::{AddTask, DeleteTask, Id, ListTasks, SetCompleted, UpdateTask},
};

impl TaskStore {
    /// Handle adding a task from raw parameters.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the text is blank or a field cannot
    ///   be parsed
    /// * `TodoError::Storage` - When the collection could not be saved
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::{params::AddTask, MemoryStorage, TaskStoreBuilder};
    ///
    /// let mut store = TaskStoreBuilder::new()
    ///     .with_storage(MemoryStorage::new())
    ///     .build()?;
    ///
    /// let task = store.add_task(&AddTask {
    ///     text: "  Buy milk ".to_string(),
    ///     category: Some("Shopping".to_string()),
    ///     ..Default::default()
    /// })?;
    /// assert_eq!(task.text, "Buy milk");
    /// assert!(!task.completed);
    /// # Ok::<(), todo_core::TodoError>(())
    /// ```
    pub fn add_task(&mut self, params: &AddTask) -> Result<Task> {
        let draft = params.validate()?;
        self.add(draft)
    }

    /// Handle listing the visible tasks for a search, category and tab.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the tab name is unknown
    pub fn list_tasks(&self, params: &ListTasks) -> Result<TaskListing> {
        let filter = params.validate()?;
        let visible = filter.apply(&self.tasks).into_iter().cloned().collect();
        Ok(TaskListing::new(visible, filter.is_narrowed()))
    }

    /// Handle showing a single task, or None if it doesn't exist.
    pub fn show_task(&self, params: &Id) -> Option<Task> {
        self.get(params.id).cloned()
    }

    /// Handle marking a task completed or pending.
    ///
    /// Returns None if the task doesn't exist.
    pub fn set_task_completed(&mut self, params: &SetCompleted) -> Result<Option<Task>> {
        self.set_completed(params.id, params.completed)
    }

    /// Handle flipping a task's completed flag.
    pub fn toggle_task(&mut self, params: &Id) -> Result<Option<Task>> {
        self.toggle_completed(params.id)
    }

    /// Handle flipping a task's important flag.
    pub fn toggle_task_important(&mut self, params: &Id) -> Result<Option<Task>> {
        self.toggle_important(params.id)
    }

    /// Handle editing a task, reporting which fields changed.
    ///
    /// Returns None if the task doesn't exist.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the new text is blank or a field
    ///   cannot be parsed
    /// * `TodoError::Storage` - When the collection could not be saved
    pub fn update_task(&mut self, params: &UpdateTask) -> Result<Option<UpdateResult<Task>>> {
        let update = params.validate()?;
        Ok(self
            .update(params.id, &update)?
            .map(|(task, changes)| UpdateResult::with_changes(task, changes)))
    }

    /// Handle permanently deleting a task with confirmation.
    ///
    /// Returns the deleted task, or None if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if `confirmed` is false
    pub fn delete_task(&mut self, params: &DeleteTask) -> Result<Option<Task>> {
        if !params.confirmed {
            return Err(TodoError::invalid_input("confirmed").with_reason(
                "Task deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }
        self.remove(params.id)
    }

    /// Summary counts over all tasks.
    pub fn task_counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    /// Per-tab counts over all tasks.
    pub fn tab_counts(&self) -> TabCounts {
        TabCounts::from_tasks(&self.tasks)
    }

    /// Distinct categories in order of first appearance.
    pub fn category_list(&self) -> Categories {
        Categories(engine::categories(&self.tasks))
    }
}
