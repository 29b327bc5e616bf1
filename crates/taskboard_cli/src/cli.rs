//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Projects, tasks and subtasks on a local task board")]
pub struct Cli {
    /// Board database file
    #[arg(long, global = true, value_name = "path", default_value = "taskboard.sqlite3")]
    pub db: PathBuf,

    /// Index of the project to act on (defaults to the first one)
    #[arg(short, long, global = true, value_name = "index")]
    pub project: Option<usize>,

    /// Write rolling logs into this directory
    #[arg(long, global = true, value_name = "dir")]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, value_name = "level", requires = "log_dir")]
    pub log_level: Option<String>,

    /// Replace an unreadable board with the sample board instead of failing
    #[arg(long, global = true)]
    pub reseed_corrupt: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List projects
    Projects,
    /// Show task cards of the selected project, grouped by status
    Show,
    /// Show one task with its subtasks
    Task {
        /// Task index
        index: usize,
    },
    /// Add a project and select it
    AddProject {
        /// Project name
        name: String,
    },
    /// Remove a project by index
    RemoveProject {
        /// Project index
        index: usize,
    },
    /// Add a task to the selected project
    AddTask {
        /// Task title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Subtask title (repeatable)
        #[arg(short, long = "subtask")]
        subtasks: Vec<String>,

        /// Initial status: To-Do|Doing|Done
        #[arg(long, default_value = "To-Do")]
        status: String,
    },
    /// Remove a task from the selected project
    RemoveTask {
        /// Task index
        index: usize,
    },
    /// Change a task's status
    SetStatus {
        /// Task index
        index: usize,
        /// New status: To-Do|Doing|Done
        status: String,
    },
    /// Toggle completion of a subtask
    ToggleSubtask {
        /// Task index
        task: usize,
        /// Subtask index
        subtask: usize,
    },
}
