//! Collection wrapper types for displaying groups of tasks and categories.

use std::{fmt, ops::Index};

use jiff::{tz::TimeZone, Timestamp};

use super::models::TaskView;
use crate::models::Task;

/// The visible tasks for one list request.
///
/// Remembers whether the user narrowed the list by search or category, which
/// picks the empty-state message: "No tasks yet" for an empty store, "No
/// matching tasks" when filters hide everything.
///
/// # Examples
///
/// ```rust
/// use todo_core::display::TaskListing;
///
/// let listing = TaskListing::new(vec![], false);
/// assert_eq!(listing.to_string(), "No tasks yet\n");
///
/// let listing = TaskListing::new(vec![], true);
/// assert_eq!(listing.to_string(), "No matching tasks\n");
/// ```
#[derive(Debug)]
pub struct TaskListing {
    tasks: Vec<Task>,
    narrowed: bool,
    now: Timestamp,
    tz: TimeZone,
}

impl TaskListing {
    /// Create a listing rendered at the current time in the system time zone.
    pub fn new(tasks: Vec<Task>, narrowed: bool) -> Self {
        Self {
            tasks,
            narrowed,
            now: Timestamp::now(),
            tz: TimeZone::system(),
        }
    }

    /// Render relative labels against a fixed time and time zone.
    pub fn at(mut self, now: Timestamp, tz: TimeZone) -> Self {
        self.now = now;
        self.tz = tz;
        self
    }

    /// Check if the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get the number of tasks in the listing.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Whether a search term or category filter was active.
    pub fn is_narrowed(&self) -> bool {
        self.narrowed
    }

    /// Message shown when the listing is empty.
    pub fn empty_message(&self) -> &'static str {
        if self.narrowed {
            "No matching tasks"
        } else {
            "No tasks yet"
        }
    }
}

impl Index<usize> for TaskListing {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tasks[index]
    }
}

impl IntoIterator for TaskListing {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskListing {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl fmt::Display for TaskListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return writeln!(f, "{}", self.empty_message());
        }
        for task in &self.tasks {
            write!(f, "{}", TaskView::at(task, self.now, self.tz.clone()))?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the category list.
pub struct Categories(pub Vec<String>);

impl Categories {
    /// Check if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the category names.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No categories yet.");
        }
        for category in &self.0 {
            writeln!(f, "- {category}")?;
        }
        Ok(())
    }
}
