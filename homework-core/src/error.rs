//! Error types for the homework tracker.

use thiserror::Error;

/// Errors that can occur in homework operations.
#[derive(Error, Debug)]
pub enum HomeworkError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("Assignment not found: {0}")]
    AssignmentNotFound(String),

    #[error("Storage error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Date out of range advancing from {0}")]
    DateOutOfRange(String),
}

impl HomeworkError {
    pub fn validation(msg: impl Into<String>) -> Self {
        HomeworkError::Validation(msg.into())
    }

    /// True for the not-found variants (class or assignment).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HomeworkError::ClassNotFound(_) | HomeworkError::AssignmentNotFound(_)
        )
    }
}

impl From<serde_json::Error> for HomeworkError {
    fn from(e: serde_json::Error) -> Self {
        HomeworkError::Serialization(e.to_string())
    }
}

/// Result type alias for homework operations.
pub type HomeworkResult<T> = Result<T, HomeworkError>;
