use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

/// What an out-of-range index was pointing at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Column,
    Card,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Card => write!(f, "card"),
        }
    }
}

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("{target} index {index} out of range (length {len})")]
    OutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    #[error("Invalid board file: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KanbanError {
    pub(crate) fn column_out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            target: IndexTarget::Column,
            index,
            len,
        }
    }

    pub(crate) fn card_out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            target: IndexTarget::Card,
            index,
            len,
        }
    }

    /// True for index errors raised by board operations
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<serde_json::Error> for KanbanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}
