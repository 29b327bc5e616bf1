//! Project entity.
//!
//! # Invariants
//! - `tasks` keeps insertion order; `add_task` appends.
//! - `remove_task` shifts every later task down by one index.

use crate::model::index::{check_index, IndexError, IndexTarget};
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Named, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates a project without tasks. Empty names are accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove_task(&mut self, index: usize) -> Result<Task, IndexError> {
        let index = check_index(IndexTarget::Task, index, self.tasks.len())?;
        Ok(self.tasks.remove(index))
    }

    pub fn task(&self, index: usize) -> Result<&Task, IndexError> {
        let index = check_index(IndexTarget::Task, index, self.tasks.len())?;
        Ok(&self.tasks[index])
    }

    pub fn task_mut(&mut self, index: usize) -> Result<&mut Task, IndexError> {
        let index = check_index(IndexTarget::Task, index, self.tasks.len())?;
        Ok(&mut self.tasks[index])
    }
}
