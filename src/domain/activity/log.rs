//! Activity log entries - append-only audit of committed activities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ActivityLogId, Timestamp, UserId};

/// Kind of committed activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    ExerciseDone,
    TrainingDone,
    QuizPassed,
    ReadingRecorded,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::ExerciseDone => "exercise_done",
            ActivityType::TrainingDone => "training_done",
            ActivityType::QuizPassed => "quiz_passed",
            ActivityType::ReadingRecorded => "reading_recorded",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: ActivityLogId,
    pub user_id: UserId,
    pub activity_type: ActivityType,
    pub description: String,
    pub xp_gained: i64,
    /// Short stat tag such as `STR` or `WIS`.
    pub stat_affected: Option<String>,
    pub recorded_at: Timestamp,
}

impl ActivityLogEntry {
    pub fn new(
        user_id: UserId,
        activity_type: ActivityType,
        description: impl Into<String>,
        xp_gained: i64,
        stat_affected: Option<&str>,
    ) -> Self {
        Self {
            id: ActivityLogId::new(),
            user_id,
            activity_type,
            description: description.into(),
            xp_gained,
            stat_affected: stat_affected.map(str::to_string),
            recorded_at: Timestamp::now(),
        }
    }
}
