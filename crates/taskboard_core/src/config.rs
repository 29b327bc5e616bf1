//! Runtime configuration for board storage and logging.
//!
//! # Invariants
//! - Defaults reproduce the stock board: key `projects`, corrupt documents
//!   surfaced to the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Fixed key under which the board document is stored.
pub const DEFAULT_STORAGE_KEY: &str = "projects";

/// What `load` does when the stored document cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptStatePolicy {
    /// Return the parse error and leave the stored document untouched.
    #[default]
    Surface,
    /// Replace the stored document with the sample board.
    Reseed,
}

/// Board storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub storage_key: String,
    pub corrupt_state_policy: CorruptStatePolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            corrupt_state_policy: CorruptStatePolicy::default(),
        }
    }
}

/// Log verbosity accepted by `init_logging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unsupported log level label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevelParseError(pub String);

impl Display for LogLevelParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            self.0
        )
    }
}

impl Error for LogLevelParseError {}

impl FromStr for LogLevel {
    type Err = LogLevelParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LogLevelParseError(other.to_string())),
        }
    }
}

/// Returns the default level for the current build mode.
///
/// - `debug` builds -> `Debug`
/// - `release` builds -> `Info`
pub fn default_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Must be absolute; created on first init.
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: LogLevel, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level,
            log_dir: log_dir.into(),
        }
    }
}
