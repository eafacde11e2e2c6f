//! Player aggregate - the User and Profile pair mutated as one unit.
//!
//! All state transitions of an activity are applied here, in memory, after
//! every validation has passed. Persisting the result is the repository's
//! job and happens in a single atomic commit.

use serde::{Deserialize, Serialize};

use crate::domain::activity::Exercise;
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};
use crate::domain::progression::{
    derive_stats, mind_effort, minimum_reps, recommended_reps, unity_xp,
};

use super::{ActivityError, Profile, User};

/// How an exercise set counts toward progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseMode {
    /// Awards XP and unlocks reading; must reach the minimum reps.
    #[default]
    Standard,
    /// Grows effort and stats only.
    Training,
}

impl ExerciseMode {
    pub fn from_training_flag(is_training_mode: bool) -> Self {
        if is_training_mode {
            ExerciseMode::Training
        } else {
            ExerciseMode::Standard
        }
    }

    pub fn is_training(&self) -> bool {
        matches!(self, ExerciseMode::Training)
    }
}

/// What an accepted exercise set changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseOutcome {
    pub mode: ExerciseMode,
    pub effort_body: f64,
    pub xp_gained: i64,
    pub levels_gained: u32,
}

/// User and Profile of one player.
///
/// # Invariants
///
/// - `profile.user_id() == user.id()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    user: User,
    profile: Profile,
}

impl Player {
    /// Pairs a user with their profile.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the profile belongs to another user
    pub fn new(user: User, profile: Profile) -> Result<Self, DomainError> {
        if user.id() != profile.user_id() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!(
                    "Profile of user {} paired with user {}",
                    profile.user_id(),
                    user.id()
                ),
            ));
        }
        Ok(Self { user, profile })
    }

    /// A newly registered player: zeroed counters and a default profile.
    pub fn register(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user: User::new(id, name, email)?,
            profile: Profile::new(id),
        })
    }

    pub fn id(&self) -> UserId {
        self.user.id()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Profile version this snapshot was loaded at.
    pub fn version(&self) -> i64 {
        self.profile.version()
    }

    /// Target reps for the next set.
    pub fn recommended_reps(&self) -> i64 {
        recommended_reps(self.profile.level(), self.profile.stats().endurance)
    }

    /// Smallest rep count a standard set must reach.
    pub fn minimum_reps(&self) -> i64 {
        minimum_reps(self.profile.level(), self.profile.stats().endurance)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Activities
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one exercise set.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `reps` is not positive, or a standard set is
    ///   below [`Player::minimum_reps`]. The player is left untouched.
    pub fn complete_exercise(
        &mut self,
        exercise: &Exercise,
        reps: i64,
        mode: ExerciseMode,
    ) -> Result<ExerciseOutcome, ActivityError> {
        if reps <= 0 {
            return Err(ActivityError::validation(
                "reps",
                format!("must be a positive number, got {}", reps),
            ));
        }

        if !mode.is_training() {
            let min_reps = self.minimum_reps();
            if reps < min_reps {
                return Err(ActivityError::validation(
                    "reps",
                    format!(
                        "at least {} reps (30% of the recommended {}) are required to unlock reading, got {}",
                        min_reps,
                        self.recommended_reps(),
                        reps
                    ),
                ));
            }
        }

        let effort_body = exercise.effort_for(reps);
        let stats_before = *self.profile.stats();

        self.user.record_approach(exercise.group(), effort_body);

        let (xp_gained, levels_gained) = match mode {
            ExerciseMode::Standard => {
                let gained = unity_xp(effort_body, stats_before.strength, stats_before.wisdom);
                let outcome = self.profile.gain_xp(gained);
                self.profile.set_gate(self.profile.gate().after_exercise(mode));
                (gained, outcome.levels_gained)
            }
            ExerciseMode::Training => (0, 0),
        };

        self.refresh_derived_stats();

        Ok(ExerciseOutcome {
            mode,
            effort_body,
            xp_gained,
            levels_gained,
        })
    }

    /// Applies a correctly answered quiz: counts it and locks reading.
    pub fn pass_quiz(&mut self) {
        self.user.record_quiz_passed();
        self.profile.set_gate(self.profile.gate().after_quiz());
    }

    /// Credits mind effort for a recognized reading passage.
    ///
    /// Returns the effort gained.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is blank
    pub fn record_reading(&mut self, recognized_text: &str) -> Result<f64, ActivityError> {
        if recognized_text.trim().is_empty() {
            return Err(ValidationError::empty_field("recognized_text").into());
        }
        let effort = mind_effort(recognized_text);
        self.user.record_mind_effort(effort);
        Ok(effort)
    }

    /// Marks this snapshot as persisted by bumping the profile version.
    ///
    /// Called by repositories once a commit has gone through.
    pub fn mark_committed(&mut self) {
        self.profile.advance_version();
    }

    fn refresh_derived_stats(&mut self) {
        let derived = derive_stats(
            self.user.total_mind_effort(),
            self.user.total_body_effort(),
            self.user.quizzes_passed(),
            self.user.approaches_completed(),
        );
        self.profile.apply_derived_stats(derived);
    }
}
