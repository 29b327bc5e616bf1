//! Core state layer for the task board.
//! Owns projects, tasks and subtasks, and their persisted JSON form.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{
    default_log_level, BoardConfig, CorruptStatePolicy, LogLevel, LoggingConfig,
    DEFAULT_STORAGE_KEY,
};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::index::{IndexError, IndexTarget};
pub use model::project::Project;
pub use model::seed::{sample_board, SAMPLE_PROJECT_NAME};
pub use model::task::{Status, StatusParseError, Subtask, Task};
pub use repo::board_repo::{BoardRepoError, BoardRepository, StoredBoard};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use service::board_controller::BoardController;
pub use service::board_service::{
    BoardService, BoardServiceError, BoardServiceResult, LoadSource, NewTask,
};
pub use service::board_view::{ProjectListItem, TaskCard, TaskDetail};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
