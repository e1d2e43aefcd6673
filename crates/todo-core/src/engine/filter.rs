//! Visible-task selection and category enumeration.

use crate::models::{CategoryFilter, Tab, Task, TaskFilter};

impl TaskFilter {
    /// Select the visible tasks, preserving store order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::models::{Priority, Tab, Task, TaskFilter};
    /// use jiff::Timestamp;
    ///
    /// let task = |id, text: &str, completed| Task {
    ///     id,
    ///     text: text.to_string(),
    ///     completed,
    ///     priority: Priority::Medium,
    ///     category: String::new(),
    ///     due_date: None,
    ///     important: false,
    ///     created_at: Timestamp::UNIX_EPOCH,
    /// };
    /// let tasks = vec![task(2, "Buy milk", false), task(1, "Write report", true)];
    ///
    /// let visible = TaskFilter::for_tab(Tab::Active).apply(&tasks);
    /// assert_eq!(visible.len(), 1);
    /// assert_eq!(visible[0].text, "Buy milk");
    /// ```
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let needle = self.search.to_lowercase();
        tasks
            .iter()
            .filter(|task| self.matches_lowered(task, &needle))
            .collect()
    }

    fn matches_lowered(&self, task: &Task, needle: &str) -> bool {
        matches_search(task, needle) && matches_category(task, &self.category) && self.tab.admits(task)
    }
}

impl Tab {
    /// Tab predicate.
    ///
    /// The important tab keeps completed tasks, unlike the important count in
    /// [`super::TaskCounts`].
    pub fn admits(&self, task: &Task) -> bool {
        match self {
            Tab::All => true,
            Tab::Active => !task.completed,
            Tab::Completed => task.completed,
            Tab::Important => task.important,
        }
    }
}

/// `needle` must already be lowercase; an empty needle matches everything.
fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty() || task.text.to_lowercase().contains(needle)
}

fn matches_category(task: &Task, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => task.category.to_lowercase() == name.to_lowercase(),
    }
}

/// Distinct non-empty categories in order of first appearance.
pub fn categories(tasks: &[Task]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for task in tasks {
        if !task.category.is_empty() && !seen.iter().any(|c| c == &task.category) {
            seen.push(task.category.clone());
        }
    }
    seen
}
