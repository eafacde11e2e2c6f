//! SubmitExerciseHandler - Command handler for logging an exercise set.
//!
//! A standard set awards unity XP (priced with the stats held before the
//! set), resolves level-ups and unlocks reading. A training set only grows
//! body effort, approaches and muscle tension. Both recompute the derived
//! stats before the commit.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::activity::{ActivityLogEntry, ActivityType, Exercise};
use crate::domain::foundation::{ExerciseId, UserId};
use crate::domain::player::{ActivityError, ExerciseMode, ExerciseOutcome, Player};
use crate::ports::{ExerciseCatalog, PlayerRepository};

/// Confirmation returned with every accepted set.
pub const EXERCISE_SAVED_MESSAGE: &str = "Exercise completed, progress saved!";

/// Command to log one exercise set.
#[derive(Debug, Clone)]
pub struct SubmitExerciseCommand {
    pub user_id: UserId,
    pub exercise_id: ExerciseId,
    pub reps: i64,
    pub mode: ExerciseMode,
}

/// Result of a committed exercise set.
#[derive(Debug, Clone)]
pub struct SubmitExerciseResult {
    /// The player as stored after the commit.
    pub player: Player,
    pub exercise: Exercise,
    pub outcome: ExerciseOutcome,
    pub message: &'static str,
}

/// Handler for exercise submissions.
pub struct SubmitExerciseHandler {
    player_repository: Arc<dyn PlayerRepository>,
    exercise_catalog: Arc<dyn ExerciseCatalog>,
}

impl SubmitExerciseHandler {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository>,
        exercise_catalog: Arc<dyn ExerciseCatalog>,
    ) -> Self {
        Self {
            player_repository,
            exercise_catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitExerciseCommand,
    ) -> Result<SubmitExerciseResult, ActivityError> {
        // 1. Resolve the exercise
        let exercise = self
            .exercise_catalog
            .find(cmd.exercise_id)
            .await?
            .ok_or(ActivityError::ExerciseNotFound(cmd.exercise_id.as_i64()))?;

        // 2. Load the player
        let mut player = self
            .player_repository
            .load(cmd.user_id)
            .await?
            .ok_or(ActivityError::UserNotFound(cmd.user_id))?;

        // 3. Apply the set (validates reps before touching state)
        let outcome = player
            .complete_exercise(&exercise, cmd.reps, cmd.mode)
            .map_err(|e| {
                warn!(
                    user_id = %cmd.user_id,
                    exercise_id = %cmd.exercise_id,
                    reps = cmd.reps,
                    "Exercise rejected: {}",
                    e
                );
                e
            })?;

        // 4. Commit user, profile and log entry together
        let log_entry = log_entry_for(&player, &exercise, cmd.reps, &outcome);
        let player = self
            .player_repository
            .commit(&player, Some(&log_entry))
            .await
            .map_err(|e| ActivityError::from_repository(e, cmd.user_id))?;

        info!(
            user_id = %cmd.user_id,
            exercise = exercise.name(),
            reps = cmd.reps,
            training = outcome.mode.is_training(),
            xp_gained = outcome.xp_gained,
            level = player.profile().level(),
            "Exercise committed"
        );

        Ok(SubmitExerciseResult {
            player,
            exercise,
            outcome,
            message: EXERCISE_SAVED_MESSAGE,
        })
    }
}

fn log_entry_for(
    player: &Player,
    exercise: &Exercise,
    reps: i64,
    outcome: &ExerciseOutcome,
) -> ActivityLogEntry {
    let (activity_type, description) = match outcome.mode {
        ExerciseMode::Standard => (
            ActivityType::ExerciseDone,
            format!("{}: {} reps", exercise.name(), reps),
        ),
        ExerciseMode::Training => (
            ActivityType::TrainingDone,
            format!("{} (training): {} reps", exercise.name(), reps),
        ),
    };
    ActivityLogEntry::new(
        player.id(),
        activity_type,
        description,
        outcome.xp_gained,
        Some("STR"),
    )
}
