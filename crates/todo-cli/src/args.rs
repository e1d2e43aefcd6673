//! Command-line argument definitions.
//!
//! Each subcommand has a clap wrapper struct that converts into the shared
//! parameter type from [`todo_core::params`], so the CLI and the MCP server
//! feed the store identical requests.

use std::{fmt, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use todo_core::params::{AddTask, DeleteTask, Id, ListTasks, SetCompleted, UpdateTask};

/// A local to-do list
///
/// Add tasks with a category, priority, due date and importance flag, then
/// filter them by text, category or tab. Running without a subcommand lists
/// every task. `todo serve` exposes the same operations as an MCP server for
/// AI assistants.
#[derive(Parser)]
#[command(version, about, name = "todo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/todo/todo.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks, optionally filtered by search term, category and tab
    #[command(alias = "ls")]
    List(ListTasksArgs),
    /// Show details of a specific task
    Show(TaskIdArgs),
    /// Mark a task as completed
    Done(TaskIdArgs),
    /// Mark a task as pending again
    Undo(TaskIdArgs),
    /// Flip a task between completed and pending
    Toggle(TaskIdArgs),
    /// Star or unstar a task as important
    Star(TaskIdArgs),
    /// Edit a task's text or details
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Delete a task permanently
    #[command(alias = "rm")]
    Delete(DeleteTaskArgs),
    /// Show task statistics
    Stats,
    /// List the categories in use
    Categories,
    /// Start the MCP server
    Serve,
}

/// Priority values accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
        }
    }
}

/// Tabs accepted by `list --tab`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    /// Every task
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks
    #[value(alias = "done")]
    Completed,
    /// Tasks starred as important
    Important,
}

impl fmt::Display for TabArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabArg::All => write!(f, "all"),
            TabArg::Active => write!(f, "active"),
            TabArg::Completed => write!(f, "completed"),
            TabArg::Important => write!(f, "important"),
        }
    }
}

/// Add a new task
#[derive(clap::Args)]
pub struct AddTaskArgs {
    /// What needs doing
    pub text: String,
    /// Category to file the task under
    #[arg(short, long)]
    pub category: Option<String>,
    /// Priority of the task (defaults to medium)
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    /// Star the task as important
    #[arg(short, long)]
    pub important: bool,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            text: val.text,
            category: val.category,
            priority: val.priority.map(|p| p.to_string()),
            due_date: val.due,
            important: val.important,
        }
    }
}

/// List tasks
#[derive(clap::Args)]
pub struct ListTasksArgs {
    /// Only show tasks whose text contains this (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only show tasks in this category, or 'all'
    #[arg(short, long)]
    pub category: Option<String>,
    /// Which tab to show
    #[arg(short, long, value_enum)]
    pub tab: Option<TabArg>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            search: val.search,
            category: val.category,
            tab: val.tab.map(|t| t.to_string()),
        }
    }
}

/// Identify a single task
#[derive(clap::Args)]
pub struct TaskIdArgs {
    /// ID of the task
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

impl TaskIdArgs {
    /// Request to set the task's completed flag.
    pub fn completed(self, completed: bool) -> SetCompleted {
        SetCompleted {
            id: self.id,
            completed,
        }
    }
}

/// Edit a task
///
/// Only the given fields change.
#[derive(clap::Args)]
pub struct EditTaskArgs {
    /// ID of the task to edit
    pub id: u64,
    /// New text
    #[arg(long)]
    pub text: Option<String>,
    /// New category (empty string clears it)
    #[arg(short, long)]
    pub category: Option<String>,
    /// New priority
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// New due date as YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
    /// Set whether the task is important
    #[arg(long)]
    pub important: Option<bool>,
    /// Set whether the task is completed
    #[arg(long)]
    pub completed: Option<bool>,
}

impl From<EditTaskArgs> for UpdateTask {
    fn from(val: EditTaskArgs) -> Self {
        let due_date = if val.clear_due {
            Some(String::new())
        } else {
            val.due
        };

        UpdateTask {
            id: val.id,
            text: val.text,
            category: val.category,
            priority: val.priority.map(|p| p.to_string()),
            due_date,
            important: val.important,
            completed: val.completed,
        }
    }
}

/// Delete a task permanently
#[derive(clap::Args)]
pub struct DeleteTaskArgs {
    /// ID of the task to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTaskArgs> for DeleteTask {
    fn from(val: DeleteTaskArgs) -> Self {
        DeleteTask {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}
