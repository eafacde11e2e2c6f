//! Axum router configuration for player and activity endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_profile, list_exercises, record_reading, submit_exercise, submit_quiz, ActivityAppState,
};

/// Routes mounted under `/api`.
///
/// # Routes
///
/// - `GET /profile` - Current player's profile
/// - `GET /exercises` - Exercise catalog
/// - `POST /activity/exercise` - Log an exercise set
/// - `POST /activity/submit-quiz` - Check a quiz answer
/// - `POST /activity/reading` - Credit a recognized reading passage
pub fn activity_routes() -> Router<ActivityAppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/exercises", get(list_exercises))
        .route("/activity/exercise", post(submit_exercise))
        .route("/activity/submit-quiz", post(submit_quiz))
        .route("/activity/reading", post(record_reading))
}
