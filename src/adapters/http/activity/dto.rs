//! Request and response DTOs for player and activity endpoints.
//!
//! All bodies use camelCase field names. Request fields are optional at the
//! serde level so missing values surface as `VALIDATION_FAILED` rather than
//! a bare deserialization rejection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::activity::Exercise;
use crate::domain::player::{Player, Profile, User};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/activity/exercise`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExerciseRequest {
    pub exercise_id: Option<i64>,
    pub reps: Option<i64>,
    #[serde(default)]
    pub is_training_mode: bool,
}

/// Body of `POST /api/activity/submit-quiz`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub user_answer: Option<String>,
    pub correct_answer: Option<String>,
}

/// Body of `POST /api/activity/reading`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReadingRequest {
    pub recognized_text: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Public view of a user. Credentials are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub total_mind_effort: f64,
    pub total_body_effort: f64,
    pub quizzes_passed: i64,
    pub approaches_completed: i64,
    pub muscle_tension: BTreeMap<String, f64>,
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_i64(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            total_mind_effort: user.total_mind_effort(),
            total_body_effort: user.total_body_effort(),
            quizzes_passed: user.quizzes_passed(),
            approaches_completed: user.approaches_completed(),
            muscle_tension: user.muscle_tension().as_map().clone(),
        }
    }
}

/// Full profile row plus values the client would otherwise derive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: i64,
    pub level: i32,
    pub current_xp: f64,
    pub xp_to_next_level: f64,
    pub stat_str: i32,
    pub stat_end: i32,
    pub stat_agi: i32,
    pub stat_int: i32,
    pub stat_wis: i32,
    pub stat_foc: i32,
    pub is_reading_unlocked: bool,
    pub recommended_reps: i64,
    pub minimum_reps: i64,
    pub version: i64,
}

impl ProfileResponse {
    pub fn from_player(player: &Player) -> Self {
        let profile: &Profile = player.profile();
        let stats = profile.stats();
        Self {
            user_id: profile.user_id().as_i64(),
            level: profile.level(),
            current_xp: profile.current_xp(),
            xp_to_next_level: profile.xp_to_next_level(),
            stat_str: stats.strength,
            stat_end: stats.endurance,
            stat_agi: stats.agility,
            stat_int: stats.intellect,
            stat_wis: stats.wisdom,
            stat_foc: stats.focus,
            is_reading_unlocked: profile.is_reading_unlocked(),
            recommended_reps: player.recommended_reps(),
            minimum_reps: player.minimum_reps(),
            version: profile.version(),
        }
    }
}

/// `GET /api/profile` body: profile fields with the user nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfileResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub user: UserSummaryResponse,
}

impl From<&Player> for PlayerProfileResponse {
    fn from(player: &Player) -> Self {
        Self {
            profile: ProfileResponse::from_player(player),
            user: UserSummaryResponse::from(player.user()),
        }
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub id: i64,
    pub name: String,
    pub multiplier: f64,
    pub group: String,
}

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id().as_i64(),
            name: exercise.name().to_string(),
            multiplier: exercise.multiplier(),
            group: exercise.group().to_string(),
        }
    }
}

/// Body returned by every activity endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_user: Option<UserSummaryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_profile: Option<ProfileResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_gained: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels_gained: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mind_effort_gained: Option<f64>,
}

impl ActivityResponse {
    /// Successful activity carrying the committed player.
    pub fn committed(message: impl Into<String>, player: &Player) -> Self {
        Self {
            success: true,
            message: message.into(),
            updated_user: Some(UserSummaryResponse::from(player.user())),
            updated_profile: Some(ProfileResponse::from_player(player)),
            xp_gained: None,
            levels_gained: None,
            mind_effort_gained: None,
        }
    }

    /// Non-success outcome that changed nothing.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            updated_user: None,
            updated_profile: None,
            xp_gained: None,
            levels_gained: None,
            mind_effort_gained: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn player() -> Player {
        Player::register(UserId::new(3).unwrap(), "Cha", "cha@example.com").unwrap()
    }

    #[test]
    fn exercise_request_defaults_training_to_false() {
        let request: SubmitExerciseRequest =
            serde_json::from_str(r#"{"exerciseId": 1, "reps": 12}"#).unwrap();
        assert_eq!(request.exercise_id, Some(1));
        assert_eq!(request.reps, Some(12));
        assert!(!request.is_training_mode);
    }

    #[test]
    fn activity_response_uses_camel_case() {
        let json = serde_json::to_value(ActivityResponse::committed("ok", &player())).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["updatedUser"]["totalBodyEffort"], 0.0);
        assert_eq!(json["updatedProfile"]["isReadingUnlocked"], false);
        assert_eq!(json["updatedProfile"]["xpToNextLevel"], 100.0);
        assert!(json.get("xpGained").is_none());
    }

    #[test]
    fn rejected_response_carries_only_message() {
        let json = serde_json::to_value(ActivityResponse::rejected("nope")).unwrap();

        assert_eq!(json, serde_json::json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn player_profile_flattens_profile_fields() {
        let json = serde_json::to_value(PlayerProfileResponse::from(&player())).unwrap();

        assert_eq!(json["level"], 1);
        assert_eq!(json["statStr"], 1);
        assert_eq!(json["user"]["email"], "cha@example.com");
        assert!(json["user"].get("credentialHash").is_none());
    }
}
