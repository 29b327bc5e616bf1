//! Board document persistence over a key-value store.
//!
//! # Responsibility
//! - Serialize the full project collection to JSON under one fixed key.
//! - Rebuild projects, tasks and subtasks from the stored document.
//!
//! # Invariants
//! - Only entity fields are written; derived counts are recomputed on read.
//! - Subtask completion flags are restored positionally in the same pass as
//!   their titles.
//! - A malformed document is reported, never silently replaced here.

use crate::model::project::Project;
use crate::repo::kv_store::{KeyValueStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardRepoResult<T> = Result<T, BoardRepoError>;

/// Persistence adapter error.
#[derive(Debug)]
pub enum BoardRepoError {
    /// Backend read or write failed.
    Store(StoreError),
    /// In-memory projects could not be encoded.
    Encode(serde_json::Error),
    /// Stored document is not a valid board.
    Parse(serde_json::Error),
}

impl Display for BoardRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode board: {err}"),
            Self::Parse(err) => write!(f, "stored board is malformed: {err}"),
        }
    }
}

impl Error for BoardRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) | Self::Parse(err) => Some(err),
        }
    }
}

impl From<StoreError> for BoardRepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of reading the board key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredBoard {
    /// Key absent, blank, or an empty array.
    Empty,
    /// At least one stored project.
    Projects(Vec<Project>),
}

/// Reads and writes the board document under `key`.
pub struct BoardRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BoardRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Writes the whole collection, replacing the previous document.
    pub fn save(&self, projects: &[Project]) -> BoardRepoResult<()> {
        let document = serde_json::to_string(projects).map_err(BoardRepoError::Encode)?;
        if let Err(err) = self.store.set(&self.key, &document) {
            error!(
                "event=board_save module=repo status=error projects={} error={err}",
                projects.len()
            );
            return Err(err.into());
        }
        info!(
            "event=board_save module=repo status=ok projects={} bytes={}",
            projects.len(),
            document.len()
        );
        Ok(())
    }

    /// Reads the stored collection.
    pub fn load(&self) -> BoardRepoResult<StoredBoard> {
        let Some(document) = self.store.get(&self.key)? else {
            info!("event=board_load module=repo status=ok source=absent");
            return Ok(StoredBoard::Empty);
        };

        if document.trim().is_empty() {
            info!("event=board_load module=repo status=ok source=blank");
            return Ok(StoredBoard::Empty);
        }

        let projects = parse_board(&document).map_err(|err| {
            error!(
                "event=board_load module=repo status=error error_code=board_parse_failed line={} column={}",
                err.line(),
                err.column()
            );
            BoardRepoError::Parse(err)
        })?;

        if projects.is_empty() {
            info!("event=board_load module=repo status=ok source=empty_array");
            return Ok(StoredBoard::Empty);
        }

        info!(
            "event=board_load module=repo status=ok source=stored projects={}",
            projects.len()
        );
        Ok(StoredBoard::Projects(projects))
    }
}

/// Parses a stored board document.
pub fn parse_board(document: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(document)
}

#[cfg(test)]
mod tests {
    use super::{parse_board, BoardRepository, StoredBoard};
    use crate::repo::kv_store::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn whitespace_only_array_counts_as_empty() {
        let store = MemoryKeyValueStore::new();
        store.set("projects", " [ ]\n").unwrap();
        let repo = BoardRepository::new(&store, "projects");

        assert_eq!(repo.load().unwrap(), StoredBoard::Empty);
    }

    #[test]
    fn parse_board_fills_missing_optional_fields() {
        let projects =
            parse_board(r#"[{"name":"Bare","tasks":[{"title":"t","subtasks":[{"title":"s"}]}]}]"#)
                .unwrap();

        let task = &projects[0].tasks[0];
        assert_eq!(task.description, "");
        assert_eq!(task.status.as_str(), "To-Do");
        assert!(!task.subtasks[0].complete);
    }

    #[test]
    fn parse_board_rejects_unknown_status() {
        let err = parse_board(r#"[{"name":"p","tasks":[{"title":"t","status":"Blocked"}]}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("Blocked"), "unexpected error: {err}");
    }
}
