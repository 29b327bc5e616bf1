//! Current-project cursor and view-facing dispatch.
//!
//! # Responsibility
//! - Track which project is current and resolve "current project" intents.
//! - Forward everything else to `BoardService`.
//!
//! # Invariants
//! - The cursor is `None` exactly when no project is selectable.
//! - The cursor is re-validated against the live project count on every use.
//! - Adding a project makes it current; removing one keeps the cursor on a
//!   live project (decrementing when the removal is at or before it).

use crate::config::BoardConfig;
use crate::model::index::{check_index, IndexTarget};
use crate::model::project::Project;
use crate::model::task::{Status, Task};
use crate::repo::kv_store::KeyValueStore;
use crate::service::board_service::{
    BoardService, BoardServiceError, BoardServiceResult, LoadSource, NewTask,
};
use log::debug;

/// Board state plus the current-project cursor.
pub struct BoardController<S: KeyValueStore> {
    service: BoardService<S>,
    current: Option<usize>,
}

impl<S: KeyValueStore> BoardController<S> {
    /// Wraps a service with no project selected.
    pub fn new(service: BoardService<S>) -> Self {
        Self {
            service,
            current: None,
        }
    }

    /// Creates an unloaded controller over `store`.
    pub fn open(store: S, config: &BoardConfig) -> Self {
        Self::new(BoardService::new(store, config))
    }

    /// Loads the board and selects the first project when there is one.
    pub fn load(&mut self) -> BoardServiceResult<LoadSource> {
        let source = self.service.load()?;
        self.current = if self.service.projects().is_empty() {
            None
        } else {
            Some(0)
        };
        Ok(source)
    }

    pub fn projects(&self) -> &[Project] {
        self.service.projects()
    }

    pub fn project(&self, index: usize) -> BoardServiceResult<&Project> {
        self.service.project(index)
    }

    pub fn current_project_index(&self) -> Option<usize> {
        self.current
    }

    /// Selects a project by index.
    pub fn set_current_project_index(&mut self, index: usize) -> BoardServiceResult<()> {
        check_index(IndexTarget::Project, index, self.service.projects().len())?;
        self.current = Some(index);
        debug!("event=cursor_set module=controller status=ok index={index}");
        Ok(())
    }

    pub fn current_project(&self) -> BoardServiceResult<&Project> {
        let index = self.resolve_current()?;
        self.service.project(index)
    }

    /// Appends a project and makes it current.
    pub fn add_project(&mut self, name: impl Into<String>) -> BoardServiceResult<usize> {
        let index = self.service.add_project(name)?;
        self.current = Some(index);
        Ok(index)
    }

    pub fn remove_project(&mut self, index: usize) -> BoardServiceResult<Project> {
        let removed = self.service.remove_project(index)?;
        self.current = cursor_after_removal(self.current, index, self.service.projects().len());
        debug!(
            "event=cursor_shift module=controller status=ok removed={index} current={:?}",
            self.current
        );
        Ok(removed)
    }

    pub fn add_current_project_task(&mut self, task: NewTask) -> BoardServiceResult<usize> {
        let project_index = self.resolve_current()?;
        self.service.add_task(project_index, task)
    }

    pub fn remove_current_project_task(&mut self, task_index: usize) -> BoardServiceResult<Task> {
        let project_index = self.resolve_current()?;
        self.service.remove_task(project_index, task_index)
    }

    /// Sets a task status from its display label (`To-Do|Doing|Done`).
    ///
    /// Unknown labels fail with `InvalidStatus` before anything is written.
    pub fn set_current_project_task_status(
        &mut self,
        status: &str,
        task_index: usize,
    ) -> BoardServiceResult<()> {
        let status: Status = status.parse()?;
        let project_index = self.resolve_current()?;
        self.service
            .set_task_status(project_index, task_index, status)
    }

    pub fn get_current_project_task_status(&self, task_index: usize) -> BoardServiceResult<Status> {
        let project_index = self.resolve_current()?;
        self.service.task_status(project_index, task_index)
    }

    /// Returns the subtask's new completion flag.
    pub fn toggle_current_project_subtask_status(
        &mut self,
        task_index: usize,
        subtask_index: usize,
    ) -> BoardServiceResult<bool> {
        let project_index = self.resolve_current()?;
        self.service
            .toggle_subtask_status(project_index, task_index, subtask_index)
    }

    fn resolve_current(&self) -> BoardServiceResult<usize> {
        let index = self.current.ok_or(BoardServiceError::NoCurrentProject)?;
        Ok(check_index(
            IndexTarget::Project,
            index,
            self.service.projects().len(),
        )?)
    }
}

fn cursor_after_removal(current: Option<usize>, removed: usize, remaining: usize) -> Option<usize> {
    let current = current?;
    if remaining == 0 {
        return None;
    }
    let shifted = if removed <= current {
        current.saturating_sub(1)
    } else {
        current
    };
    Some(shifted.min(remaining - 1))
}
