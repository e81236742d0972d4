//! Task-specific error types.

use thiserror::Error;

use super::TaskId;

/// Errors produced by the task lifecycle.
///
/// Exactly three kinds exist: input validation failures, missing (or
/// soft-deleted) targets, and store-side failures. The HTTP adapter owns
/// the mapping from kind to status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Validation failed; the message is safe to return to the client.
    #[error("{0}")]
    InvalidInput(String),

    /// Target task does not exist or is soft-deleted.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Store-side failure not attributable to input or absence.
    #[error("persistence failure: {0}")]
    Infrastructure(String),
}

impl TaskError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TaskError::InvalidInput(message.into())
    }

    pub fn not_found(id: TaskId) -> Self {
        TaskError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        TaskError::Infrastructure(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_displays_bare_message() {
        let err = TaskError::invalid_input("title is required");
        assert_eq!(format!("{}", err), "title is required");
    }

    #[test]
    fn not_found_displays_id() {
        let err = TaskError::not_found(TaskId::from_u32(7));
        assert_eq!(format!("{}", err), "task not found: 7");
    }
}
