//! Filter types for selecting the visible tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four mutually exclusive list views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Every task
    #[default]
    All,

    /// Tasks not yet completed
    Active,

    /// Completed tasks
    Completed,

    /// Tasks starred as important, completed or not
    Important,
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "active" => Ok(Tab::Active),
            "completed" | "done" => Ok(Tab::Completed),
            "important" => Ok(Tab::Important),
            _ => Err(format!("Invalid tab: {s}")),
        }
    }
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::All, Tab::Active, Tab::Completed, Tab::Important];

    /// Convert to the string representation used by interfaces
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Active => "active",
            Tab::Completed => "completed",
            Tab::Important => "important",
        }
    }

    /// Label shown on the tab itself.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Active => "Active",
            Tab::Completed => "Done",
            Tab::Important => "Important",
        }
    }
}

/// Category selection from the category dropdown.
///
/// The literal string `"all"` selects every category; anything else names a
/// category, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        })
    }
}

impl CategoryFilter {
    /// Whether this filter narrows the list at all.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Complete view state: search term, category filter and active tab.
///
/// Passed explicitly to the engine so the filtering logic has no ambient
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring to look for in the task text
    pub search: String,

    /// Category selection
    pub category: CategoryFilter,

    /// Active tab
    pub tab: Tab,
}

impl TaskFilter {
    /// Create a filter that shows only the given tab.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::models::{CategoryFilter, Tab, TaskFilter};
    ///
    /// let filter = TaskFilter::for_tab(Tab::Active);
    /// assert_eq!(filter.tab, Tab::Active);
    /// assert!(filter.search.is_empty());
    /// assert_eq!(filter.category, CategoryFilter::All);
    /// ```
    pub fn for_tab(tab: Tab) -> Self {
        Self {
            tab,
            ..Default::default()
        }
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Whether the user narrowed the list by search term or category.
    ///
    /// Decides between the "no tasks yet" and "no matching tasks" empty
    /// states.
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all()
    }
}
