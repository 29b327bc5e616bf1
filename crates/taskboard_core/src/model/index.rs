//! Positional index validation shared by all board entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entity collection addressed by a positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Project,
    Task,
    Subtask,
}

impl IndexTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
            Self::Subtask => "subtask",
        }
    }
}

/// Index argument outside the live bounds of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub target: IndexTarget,
    pub index: usize,
    pub len: usize,
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} index {} out of range (len {})",
            self.target.as_str(),
            self.index,
            self.len
        )
    }
}

impl Error for IndexError {}

/// Returns `index` unchanged when it addresses an element of a `len`-sized
/// collection.
pub fn check_index(target: IndexTarget, index: usize, len: usize) -> Result<usize, IndexError> {
    if index < len {
        Ok(index)
    } else {
        Err(IndexError { target, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::{check_index, IndexError, IndexTarget};

    #[test]
    fn check_index_accepts_last_element_and_rejects_len() {
        assert_eq!(check_index(IndexTarget::Task, 2, 3), Ok(2));
        assert_eq!(
            check_index(IndexTarget::Task, 3, 3),
            Err(IndexError {
                target: IndexTarget::Task,
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn empty_collection_rejects_zero() {
        let err = check_index(IndexTarget::Project, 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "project index 0 out of range (len 0)");
    }
}
