//! RecordReadingHandler - Command handler for crediting a read passage.
//!
//! Receives text already recognized from a page photo and credits mind
//! effort for it. Stats, XP and the reading gate are unchanged.

use std::sync::Arc;

use tracing::info;

use crate::domain::activity::{ActivityLogEntry, ActivityType};
use crate::domain::foundation::UserId;
use crate::domain::player::{ActivityError, Player};
use crate::ports::PlayerRepository;

pub const READING_RECORDED_MESSAGE: &str = "Reading recorded.";

/// Command to record one reading.
#[derive(Debug, Clone)]
pub struct RecordReadingCommand {
    pub user_id: UserId,
    pub recognized_text: String,
}

/// Result of a committed reading.
#[derive(Debug, Clone)]
pub struct RecordReadingResult {
    pub player: Player,
    pub mind_effort_gained: f64,
    pub message: &'static str,
}

/// Handler for reading submissions.
pub struct RecordReadingHandler {
    player_repository: Arc<dyn PlayerRepository>,
}

impl RecordReadingHandler {
    pub fn new(player_repository: Arc<dyn PlayerRepository>) -> Self {
        Self { player_repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordReadingCommand,
    ) -> Result<RecordReadingResult, ActivityError> {
        // 1. Reject blank text before any I/O
        if cmd.recognized_text.trim().is_empty() {
            return Err(ActivityError::validation(
                "recognized_text",
                "recognized text is empty",
            ));
        }

        // 2. Load the player
        let mut player = self
            .player_repository
            .load(cmd.user_id)
            .await?
            .ok_or(ActivityError::UserNotFound(cmd.user_id))?;

        // 3. Credit mind effort
        let mind_effort_gained = player.record_reading(&cmd.recognized_text)?;

        // 4. Commit
        let log_entry = ActivityLogEntry::new(
            player.id(),
            ActivityType::ReadingRecorded,
            format!("Read {} characters", cmd.recognized_text.chars().count()),
            0,
            Some("INT"),
        );
        let player = self
            .player_repository
            .commit(&player, Some(&log_entry))
            .await
            .map_err(|e| ActivityError::from_repository(e, cmd.user_id))?;

        info!(
            user_id = %cmd.user_id,
            mind_effort_gained,
            total_mind_effort = player.user().total_mind_effort(),
            "Reading committed"
        );

        Ok(RecordReadingResult {
            player,
            mind_effort_gained,
            message: READING_RECORDED_MESSAGE,
        })
    }
}
