//! Whole-collection load and save.

use std::collections::HashSet;

use log::{error, warn};

use super::TaskStore;
use crate::{
    error::{Result, TodoError},
    models::Task,
};

impl TaskStore {
    /// Replace the in-memory collection with the saved one.
    ///
    /// A missing key loads as an empty list. So does anything that cannot be
    /// trusted: a storage read error, malformed JSON, or records with
    /// duplicate ids or blank text. Those cases are logged and never reach
    /// the caller.
    pub fn load_all(&mut self) {
        self.tasks = self.read_saved();
    }

    fn read_saved(&self) -> Vec<Task> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Could not read saved tasks, starting empty: {e}");
                return Vec::new();
            }
        };

        let tasks: Vec<Task> = match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Discarding malformed saved tasks under '{}': {e}", self.key);
                return Vec::new();
            }
        };

        if let Err(reason) = check_invariants(&tasks) {
            warn!("Discarding saved tasks under '{}': {reason}", self.key);
            return Vec::new();
        }

        tasks
    }

    /// Write the whole collection to local storage.
    ///
    /// Failures are logged and returned; the in-memory collection is not
    /// rolled back.
    pub fn persist_all(&mut self) -> Result<()> {
        let result = serde_json::to_string(&self.tasks)
            .map_err(TodoError::from)
            .and_then(|raw| self.storage.set_item(&self.key, &raw));

        if let Err(e) = &result {
            error!("Error saving tasks: {e}");
        }
        result
    }
}

fn check_invariants(tasks: &[Task]) -> std::result::Result<(), String> {
    let mut ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !ids.insert(task.id) {
            return Err(format!("duplicate task id {}", task.id));
        }
        if !task.has_text() {
            return Err(format!("task {} has empty text", task.id));
        }
    }
    Ok(())
}
