//! Board state owner.
//!
//! # Responsibility
//! - Own the ordered project collection and every entity inside it.
//! - Expose index-addressed CRUD and persist after every mutation.
//! - Run the load state machine (stored / seeded / corrupt).
//!
//! # Invariants
//! - Index arguments are validated before anything is mutated.
//! - A mutation is kept only if its persistence write succeeds; on write
//!   failure the in-memory board is restored to its previous state.
//! - Read access hands out shared borrows only, so callers cannot mutate
//!   entities behind the service's back.

use crate::config::{BoardConfig, CorruptStatePolicy};
use crate::model::index::{check_index, IndexError, IndexTarget};
use crate::model::project::Project;
use crate::model::seed::sample_board;
use crate::model::task::{Status, StatusParseError, Task};
use crate::repo::board_repo::{BoardRepoError, BoardRepository, StoredBoard};
use crate::repo::kv_store::KeyValueStore;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Errors surfaced to the view layer.
#[derive(Debug)]
pub enum BoardServiceError {
    /// Project/task/subtask index beyond the live bounds.
    IndexOutOfRange(IndexError),
    /// Status label outside `To-Do|Doing|Done`.
    InvalidStatus(StatusParseError),
    /// Stored board document is malformed.
    Parse(serde_json::Error),
    /// Board could not be written (or read) by the backend.
    Persistence(BoardRepoError),
    /// An operation addressed the current project while none is selected.
    NoCurrentProject,
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange(err) => write!(f, "{err}"),
            Self::InvalidStatus(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "stored board is malformed: {err}"),
            Self::Persistence(err) => write!(f, "failed to persist board: {err}"),
            Self::NoCurrentProject => write!(f, "no project is selected"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange(err) => Some(err),
            Self::InvalidStatus(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Persistence(err) => Some(err),
            Self::NoCurrentProject => None,
        }
    }
}

impl From<IndexError> for BoardServiceError {
    fn from(value: IndexError) -> Self {
        Self::IndexOutOfRange(value)
    }
}

impl From<StatusParseError> for BoardServiceError {
    fn from(value: StatusParseError) -> Self {
        Self::InvalidStatus(value)
    }
}

impl From<BoardRepoError> for BoardServiceError {
    fn from(value: BoardRepoError) -> Self {
        match value {
            BoardRepoError::Parse(err) => Self::Parse(err),
            other => Self::Persistence(other),
        }
    }
}

/// Where the board came from on `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the stored document.
    Stored,
    /// Store was empty; sample board written.
    Seeded,
    /// Stored document was malformed and replaced by the sample board.
    Reseeded,
}

impl LoadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Seeded => "seeded",
            Self::Reseeded => "reseeded",
        }
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub subtask_titles: Vec<String>,
    pub status: Status,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_subtask(mut self, title: impl Into<String>) -> Self {
        self.subtask_titles.push(title.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    fn into_task(self) -> Task {
        Task::new(self.title, self.description, self.subtask_titles, self.status)
    }
}

/// Owns the board and its persistence.
pub struct BoardService<S: KeyValueStore> {
    repo: BoardRepository<S>,
    projects: Vec<Project>,
    corrupt_state_policy: CorruptStatePolicy,
}

impl<S: KeyValueStore> BoardService<S> {
    /// Creates an empty, not yet loaded board over `store`.
    pub fn new(store: S, config: &BoardConfig) -> Self {
        Self {
            repo: BoardRepository::new(store, config.storage_key.clone()),
            projects: Vec::new(),
            corrupt_state_policy: config.corrupt_state_policy,
        }
    }

    /// Replaces the in-memory board with the stored one.
    ///
    /// # Contract
    /// - Absent, blank or `[]` document: sample board is written and loaded.
    /// - Malformed document: `Parse` under `CorruptStatePolicy::Surface`,
    ///   sample board written under `CorruptStatePolicy::Reseed`.
    /// - On error the in-memory board is left unchanged.
    pub fn load(&mut self) -> BoardServiceResult<LoadSource> {
        let source = match self.repo.load() {
            Ok(StoredBoard::Projects(projects)) => {
                self.projects = projects;
                LoadSource::Stored
            }
            Ok(StoredBoard::Empty) => self.seed(LoadSource::Seeded)?,
            Err(BoardRepoError::Parse(err))
                if self.corrupt_state_policy == CorruptStatePolicy::Reseed =>
            {
                warn!(
                    "event=board_reseed module=service status=start reason=parse_failed line={} column={}",
                    err.line(),
                    err.column()
                );
                self.seed(LoadSource::Reseeded)?
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            "event=board_ready module=service status=ok source={} projects={}",
            source.as_str(),
            self.projects.len()
        );
        Ok(source)
    }

    /// Writes the current board without changing it.
    pub fn save(&self) -> BoardServiceResult<()> {
        self.repo.save(&self.projects)?;
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, index: usize) -> BoardServiceResult<&Project> {
        let index = check_index(IndexTarget::Project, index, self.projects.len())?;
        Ok(&self.projects[index])
    }

    /// Appends an empty project and returns its index.
    pub fn add_project(&mut self, name: impl Into<String>) -> BoardServiceResult<usize> {
        let project = Project::new(name);
        self.mutate("project_add", move |projects| {
            projects.push(project);
            Ok(projects.len() - 1)
        })
    }

    /// Removes a project; later projects shift down by one.
    pub fn remove_project(&mut self, index: usize) -> BoardServiceResult<Project> {
        self.mutate("project_remove", |projects| {
            let index = check_index(IndexTarget::Project, index, projects.len())?;
            Ok(projects.remove(index))
        })
    }

    /// Appends a task to a project and returns the task index.
    pub fn add_task(&mut self, project_index: usize, task: NewTask) -> BoardServiceResult<usize> {
        let task = task.into_task();
        self.mutate("task_add", move |projects| {
            let project = project_mut(projects, project_index)?;
            project.add_task(task);
            Ok(project.tasks.len() - 1)
        })
    }

    pub fn remove_task(
        &mut self,
        project_index: usize,
        task_index: usize,
    ) -> BoardServiceResult<Task> {
        self.mutate("task_remove", |projects| {
            project_mut(projects, project_index)?.remove_task(task_index)
        })
    }

    /// Sets a task status. Persists even when the status is unchanged.
    pub fn set_task_status(
        &mut self,
        project_index: usize,
        task_index: usize,
        status: Status,
    ) -> BoardServiceResult<()> {
        self.mutate("task_status_set", |projects| {
            project_mut(projects, project_index)?
                .task_mut(task_index)?
                .change_status(status);
            Ok(())
        })
    }

    pub fn task_status(
        &self,
        project_index: usize,
        task_index: usize,
    ) -> BoardServiceResult<Status> {
        Ok(self.project(project_index)?.task(task_index)?.status)
    }

    /// Flips one subtask and returns its new completion flag.
    pub fn toggle_subtask_status(
        &mut self,
        project_index: usize,
        task_index: usize,
        subtask_index: usize,
    ) -> BoardServiceResult<bool> {
        self.mutate("subtask_toggle", |projects| {
            project_mut(projects, project_index)?
                .task_mut(task_index)?
                .toggle_subtask(subtask_index)
        })
    }

    fn seed(&mut self, source: LoadSource) -> BoardServiceResult<LoadSource> {
        let projects = sample_board();
        self.repo.save(&projects)?;
        self.projects = projects;
        Ok(source)
    }

    fn mutate<T, F>(&mut self, event: &'static str, op: F) -> BoardServiceResult<T>
    where
        F: FnOnce(&mut Vec<Project>) -> Result<T, IndexError>,
    {
        // Whole-board snapshot; restored if the write below fails.
        let previous = self.projects.clone();
        let output = match op(&mut self.projects) {
            Ok(output) => output,
            Err(err) => {
                info!(
                    "event={event} module=service status=rejected target={} index={} len={}",
                    err.target.as_str(),
                    err.index,
                    err.len
                );
                return Err(err.into());
            }
        };

        if let Err(err) = self.repo.save(&self.projects) {
            self.projects = previous;
            error!("event={event} module=service status=error error_code=persist_failed");
            return Err(err.into());
        }

        info!(
            "event={event} module=service status=ok projects={}",
            self.projects.len()
        );
        Ok(output)
    }
}

fn project_mut(projects: &mut [Project], index: usize) -> Result<&mut Project, IndexError> {
    let index = check_index(IndexTarget::Project, index, projects.len())?;
    Ok(&mut projects[index])
}
