//! SubmitQuizHandler - Command handler for checking a quiz answer.
//!
//! A correct answer counts the quiz and locks reading again; it awards no
//! XP and does not recompute stats. A wrong answer is a normal, non-error
//! outcome that touches nothing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::activity::{ActivityLogEntry, ActivityType};
use crate::domain::foundation::UserId;
use crate::domain::player::{ActivityError, Player};
use crate::ports::PlayerRepository;

pub const QUIZ_PASSED_MESSAGE: &str =
    "Correct! Knowledge absorbed. Now complete a physical exercise.";
pub const QUIZ_FAILED_MESSAGE: &str = "Wrong answer. Try again next time.";

/// Command to check one quiz answer.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub user_id: UserId,
    pub user_answer: String,
    pub correct_answer: String,
}

/// Outcome of a quiz submission.
#[derive(Debug, Clone)]
pub enum SubmitQuizResult {
    /// Answer matched; carries the player as stored after the commit.
    Passed { player: Player, message: &'static str },
    /// Answer did not match; nothing was loaded or written.
    Failed { message: &'static str },
}

impl SubmitQuizResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitQuizResult::Passed { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitQuizResult::Passed { message, .. } | SubmitQuizResult::Failed { message } => {
                message
            }
        }
    }

    pub fn player(&self) -> Option<&Player> {
        match self {
            SubmitQuizResult::Passed { player, .. } => Some(player),
            SubmitQuizResult::Failed { .. } => None,
        }
    }
}

/// Handler for quiz submissions.
pub struct SubmitQuizHandler {
    player_repository: Arc<dyn PlayerRepository>,
}

impl SubmitQuizHandler {
    pub fn new(player_repository: Arc<dyn PlayerRepository>) -> Self {
        Self { player_repository }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<SubmitQuizResult, ActivityError> {
        // 1. Compare answers exactly
        if cmd.user_answer != cmd.correct_answer {
            debug!(user_id = %cmd.user_id, "Quiz answer incorrect");
            return Ok(SubmitQuizResult::Failed {
                message: QUIZ_FAILED_MESSAGE,
            });
        }

        // 2. Load the player
        let mut player = self
            .player_repository
            .load(cmd.user_id)
            .await?
            .ok_or(ActivityError::UserNotFound(cmd.user_id))?;

        // 3. Count the quiz and lock reading
        player.pass_quiz();

        // 4. Commit
        let log_entry = ActivityLogEntry::new(
            player.id(),
            ActivityType::QuizPassed,
            "Quiz passed",
            0,
            Some("WIS"),
        );
        let player = self
            .player_repository
            .commit(&player, Some(&log_entry))
            .await
            .map_err(|e| ActivityError::from_repository(e, cmd.user_id))?;

        info!(
            user_id = %cmd.user_id,
            quizzes_passed = player.user().quizzes_passed(),
            "Quiz committed"
        );

        Ok(SubmitQuizResult::Passed {
            player,
            message: QUIZ_PASSED_MESSAGE,
        })
    }
}
