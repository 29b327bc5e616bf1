//! Task and subtask entities.
//!
//! # Responsibility
//! - Define the task lifecycle (`Status`) and its wire representation.
//! - Provide completion toggling and derived completion counts.
//!
//! # Invariants
//! - `Task::status` is always one of `To-Do`, `Doing`, `Done`.
//! - Status transitions are unguarded and idempotent.
//! - `completed_subtask_count() <= subtasks.len()`.

use crate::model::index::{check_index, IndexError, IndexTarget};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Task lifecycle state.
///
/// Serialized with the same labels the board UI shows in its status picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not started yet.
    #[default]
    #[serde(rename = "To-Do")]
    ToDo,
    /// In progress.
    Doing,
    /// Finished.
    Done,
}

impl Status {
    /// All selectable statuses in display order.
    pub const ALL: [Status; 3] = [Status::ToDo, Status::Doing, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To-Do",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError(pub String);

impl Display for StatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid status `{}`; expected To-Do|Doing|Done",
            self.0
        )
    }
}

impl Error for StatusParseError {}

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "To-Do" => Ok(Self::ToDo),
            "Doing" => Ok(Self::Doing),
            "Done" => Ok(Self::Done),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Checklist item inside a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub complete: bool,
}

impl Subtask {
    /// Creates an incomplete subtask.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            complete: false,
        }
    }

    pub fn toggle_complete(&mut self) {
        self.complete = !self.complete;
    }
}

/// Unit of work with an ordered checklist.
///
/// Field order matches the persisted layout: `title, description, subtasks,
/// status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub status: Status,
}

impl Task {
    /// Creates a task whose subtasks all start incomplete.
    pub fn new<I, T>(
        title: impl Into<String>,
        description: impl Into<String>,
        subtask_titles: I,
        status: Status,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            subtasks: subtask_titles.into_iter().map(Subtask::new).collect(),
            status,
        }
    }

    pub fn change_status(&mut self, target: Status) {
        self.status = target;
    }

    pub fn change_status_to_do(&mut self) {
        self.change_status(Status::ToDo);
    }

    pub fn change_status_doing(&mut self) {
        self.change_status(Status::Doing);
    }

    pub fn change_status_done(&mut self) {
        self.change_status(Status::Done);
    }

    /// Number of subtasks currently marked complete.
    pub fn completed_subtask_count(&self) -> usize {
        self.subtasks.iter().filter(|subtask| subtask.complete).count()
    }

    /// Flips completion of the subtask at `index`.
    ///
    /// Returns the new completion flag.
    pub fn toggle_subtask(&mut self, index: usize) -> Result<bool, IndexError> {
        let index = check_index(IndexTarget::Subtask, index, self.subtasks.len())?;
        let subtask = &mut self.subtasks[index];
        subtask.toggle_complete();
        Ok(subtask.complete)
    }

    /// Appends an incomplete subtask.
    pub fn add_subtask(&mut self, title: impl Into<String>) {
        self.subtasks.push(Subtask::new(title));
    }

    /// Removes the subtask at `index`; later subtasks shift down by one.
    pub fn remove_subtask(&mut self, index: usize) -> Result<Subtask, IndexError> {
        let index = check_index(IndexTarget::Subtask, index, self.subtasks.len())?;
        Ok(self.subtasks.remove(index))
    }
}
