//! HTTP handlers for player and activity endpoints.
//!
//! These handlers connect axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ActivityApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    GetPlayerHandler, GetPlayerQuery, ListExercisesHandler, RecordReadingCommand,
    RecordReadingHandler, SubmitExerciseCommand, SubmitExerciseHandler, SubmitQuizCommand,
    SubmitQuizHandler, SubmitQuizResult,
};
use crate::domain::foundation::ExerciseId;
use crate::domain::player::{ActivityError, ExerciseMode};
use crate::ports::{ExerciseCatalog, PlayerRepository};

use super::dto::{
    ActivityResponse, ExerciseResponse, PlayerProfileResponse, RecordReadingRequest,
    SubmitExerciseRequest, SubmitQuizRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for player and activity routes.
#[derive(Clone)]
pub struct ActivityAppState {
    pub player_repository: Arc<dyn PlayerRepository>,
    pub exercise_catalog: Arc<dyn ExerciseCatalog>,
}

impl ActivityAppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository>,
        exercise_catalog: Arc<dyn ExerciseCatalog>,
    ) -> Self {
        Self {
            player_repository,
            exercise_catalog,
        }
    }

    pub fn submit_exercise_handler(&self) -> SubmitExerciseHandler {
        SubmitExerciseHandler::new(self.player_repository.clone(), self.exercise_catalog.clone())
    }

    pub fn submit_quiz_handler(&self) -> SubmitQuizHandler {
        SubmitQuizHandler::new(self.player_repository.clone())
    }

    pub fn record_reading_handler(&self) -> RecordReadingHandler {
        RecordReadingHandler::new(self.player_repository.clone())
    }

    pub fn get_player_handler(&self) -> GetPlayerHandler {
        GetPlayerHandler::new(self.player_repository.clone())
    }

    pub fn list_exercises_handler(&self) -> ListExercisesHandler {
        ListExercisesHandler::new(self.exercise_catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/profile - Current player's profile with user summary
pub async fn get_profile(
    State(state): State<ActivityAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ActivityApiError> {
    let player = state
        .get_player_handler()
        .handle(GetPlayerQuery { user_id: user.id })
        .await?;

    Ok(Json(PlayerProfileResponse::from(&player)))
}

/// GET /api/exercises - Exercise catalog
pub async fn list_exercises(
    State(state): State<ActivityAppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, ActivityApiError> {
    let exercises = state.list_exercises_handler().handle().await?;

    let response: Vec<ExerciseResponse> = exercises.iter().map(ExerciseResponse::from).collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/activity/exercise - Log an exercise set
pub async fn submit_exercise(
    State(state): State<ActivityAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SubmitExerciseRequest>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let (Some(exercise_id), Some(reps)) = (request.exercise_id, request.reps) else {
        return Err(ActivityError::validation(
            "exerciseId",
            "Both an exercise and a number of reps are required.",
        )
        .into());
    };
    // Ids outside the catalog's range can never match an entry
    let exercise_id =
        ExerciseId::new(exercise_id).map_err(|_| ActivityError::ExerciseNotFound(exercise_id))?;

    let cmd = SubmitExerciseCommand {
        user_id: user.id,
        exercise_id,
        reps,
        mode: ExerciseMode::from_training_flag(request.is_training_mode),
    };
    let result = state.submit_exercise_handler().handle(cmd).await?;

    let mut response = ActivityResponse::committed(result.message, &result.player);
    response.xp_gained = Some(result.outcome.xp_gained);
    response.levels_gained = Some(result.outcome.levels_gained);
    Ok(Json(response))
}

/// POST /api/activity/submit-quiz - Check a quiz answer
///
/// A wrong answer is `200 {success: false}`, not an error.
pub async fn submit_quiz(
    State(state): State<ActivityAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let (Some(user_answer), Some(correct_answer)) = (request.user_answer, request.correct_answer)
    else {
        return Err(ActivityError::validation(
            "userAnswer",
            "Both the given and the correct answer are required.",
        )
        .into());
    };

    let cmd = SubmitQuizCommand {
        user_id: user.id,
        user_answer,
        correct_answer,
    };
    let response = match state.submit_quiz_handler().handle(cmd).await? {
        SubmitQuizResult::Passed { player, message } => {
            ActivityResponse::committed(message, &player)
        }
        SubmitQuizResult::Failed { message } => ActivityResponse::rejected(message),
    };

    Ok(Json(response))
}

/// POST /api/activity/reading - Credit a recognized reading passage
pub async fn record_reading(
    State(state): State<ActivityAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<RecordReadingRequest>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let cmd = RecordReadingCommand {
        user_id: user.id,
        recognized_text: request.recognized_text.unwrap_or_default(),
    };
    let result = state.record_reading_handler().handle(cmd).await?;

    let mut response = ActivityResponse::committed(result.message, &result.player);
    response.mind_effort_gained = Some(result.mind_effort_gained);
    Ok(Json(response))
}
