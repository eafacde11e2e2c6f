//! Reading gate - alternates the player between body and mind activities.
//!
//! ```text
//!            qualifying exercise
//!   Locked ───────────────────────▶ Unlocked
//!      ▲                               │
//!      └────────── passed quiz ────────┘
//! ```
//!
//! Training-mode sets and recorded readings leave the gate as it is.

use serde::{Deserialize, Serialize};

use super::ExerciseMode;

/// Whether the player may start a reading/quiz cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingGate {
    /// Must complete a qualifying exercise first.
    #[default]
    Locked,
    /// May read and take a quiz.
    Unlocked,
}

impl ReadingGate {
    /// Builds the gate from its persisted `is_reading_unlocked` flag.
    pub fn from_flag(is_reading_unlocked: bool) -> Self {
        if is_reading_unlocked {
            ReadingGate::Unlocked
        } else {
            ReadingGate::Locked
        }
    }

    /// Persisted flag value.
    pub fn is_unlocked(&self) -> bool {
        matches!(self, ReadingGate::Unlocked)
    }

    /// State after an accepted exercise set.
    pub fn after_exercise(self, mode: ExerciseMode) -> Self {
        match mode {
            ExerciseMode::Standard => ReadingGate::Unlocked,
            ExerciseMode::Training => self,
        }
    }

    /// State after a correctly answered quiz.
    pub fn after_quiz(self) -> Self {
        ReadingGate::Locked
    }
}
