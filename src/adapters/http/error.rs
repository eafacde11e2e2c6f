//! Shared HTTP error body and the activity error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::player::ActivityError;

/// Generic message for failures whose cause stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Something went wrong.";

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// HTTP wrapper for [`ActivityError`].
#[derive(Debug)]
pub struct ActivityApiError(pub ActivityError);

impl From<ActivityError> for ActivityApiError {
    fn from(err: ActivityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ActivityApiError {
    fn into_response(self) -> Response {
        let code = self.0.code().to_string();
        let (status, body) = match &self.0 {
            ActivityError::UserNotFound(_) | ActivityError::ExerciseNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(code, self.0.to_string()),
            ),
            ActivityError::ValidationFailed { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    code,
                    message.clone(),
                    serde_json::json!({ "field": field }),
                ),
            ),
            ActivityError::TransactionFailed(cause) => {
                tracing::error!("Activity transaction failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(code, INTERNAL_ERROR_MESSAGE),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn status_of(err: ActivityError) -> StatusCode {
        ActivityApiError(err).into_response().status()
    }

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            status_of(ActivityError::UserNotFound(UserId::new(1).unwrap())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ActivityError::ExerciseNotFound(1)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            status_of(ActivityError::validation("reps", "too few")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn transaction_failure_maps_to_500() {
        assert_eq!(
            status_of(ActivityError::transaction("deadlock")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_omits_missing_details() {
        let json = serde_json::to_string(&ErrorResponse::new("NOT_FOUND", "Not found")).unwrap();
        assert!(!json.contains("details"));
    }
}
