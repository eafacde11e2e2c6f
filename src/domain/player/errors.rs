//! Activity-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Failures of an activity submission.
///
/// Every variant means nothing was committed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    /// User or profile does not exist.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Exercise is not in the catalog. Carries the id as requested, which
    /// may not even be a valid catalog id.
    #[error("Exercise not found: {0}")]
    ExerciseNotFound(i64),

    /// Input rejected before any state change.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The atomic commit could not complete; the request may be retried.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl ActivityError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ActivityError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn transaction(message: impl Into<String>) -> Self {
        ActivityError::TransactionFailed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ActivityError::UserNotFound(_) => ErrorCode::UserNotFound,
            ActivityError::ExerciseNotFound(_) => ErrorCode::ExerciseNotFound,
            ActivityError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ActivityError::TransactionFailed(_) => ErrorCode::DatabaseError,
        }
    }

    /// Maps a repository failure on `user_id`'s player. A user or profile
    /// that vanished between load and commit is reported as not found.
    pub fn from_repository(err: DomainError, user_id: UserId) -> Self {
        match err.code {
            ErrorCode::UserNotFound | ErrorCode::ProfileNotFound => {
                ActivityError::UserNotFound(user_id)
            }
            _ => err.into(),
        }
    }
}

impl From<ValidationError> for ActivityError {
    fn from(err: ValidationError) -> Self {
        ActivityError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ActivityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ActivityError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ActivityError::TransactionFailed(err.to_string()),
        }
    }
}
