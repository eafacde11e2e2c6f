//! User entity - identity plus lifetime effort counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{UserId, ValidationError};

/// Accumulated effort per muscle group.
///
/// Values only ever grow; there is no decay or reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuscleTension(BTreeMap<String, f64>);

impl MuscleTension {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds tension from persisted values, dropping negative or non-finite entries.
    pub fn from_map(values: BTreeMap<String, f64>) -> Self {
        Self(
            values
                .into_iter()
                .filter(|(_, v)| v.is_finite() && *v >= 0.0)
                .collect(),
        )
    }

    /// Adds effort to a group, creating the entry if absent.
    pub fn add(&mut self, group: &str, effort: f64) {
        *self.0.entry(group.to_string()).or_insert(0.0) += effort.max(0.0);
    }

    /// Tension accumulated by a group (0 if never trained).
    pub fn get(&self, group: &str) -> f64 {
        self.0.get(group).copied().unwrap_or(0.0)
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.0
    }
}

/// A registered user and their lifetime counters.
///
/// # Invariants
///
/// - effort totals are non-negative and never decrease
/// - `quizzes_passed` and `approaches_completed` never decrease
///
/// Credentials never enter this type; they stay in the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    total_mind_effort: f64,
    total_body_effort: f64,
    quizzes_passed: i64,
    approaches_completed: i64,
    muscle_tension: MuscleTension,
}

impl User {
    /// Creates a freshly registered user with all counters zeroed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or email is blank
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self {
            id,
            name,
            email,
            total_mind_effort: 0.0,
            total_body_effort: 0.0,
            quizzes_passed: 0,
            approaches_completed: 0,
            muscle_tension: MuscleTension::new(),
        })
    }

    /// Reconstitute a user from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: String,
        total_mind_effort: f64,
        total_body_effort: f64,
        quizzes_passed: i64,
        approaches_completed: i64,
        muscle_tension: MuscleTension,
    ) -> Self {
        Self {
            id,
            name,
            email,
            total_mind_effort,
            total_body_effort,
            quizzes_passed,
            approaches_completed,
            muscle_tension,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn total_mind_effort(&self) -> f64 {
        self.total_mind_effort
    }

    pub fn total_body_effort(&self) -> f64 {
        self.total_body_effort
    }

    pub fn quizzes_passed(&self) -> i64 {
        self.quizzes_passed
    }

    pub fn approaches_completed(&self) -> i64 {
        self.approaches_completed
    }

    pub fn muscle_tension(&self) -> &MuscleTension {
        &self.muscle_tension
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (driven by the Player aggregate)
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn record_approach(&mut self, group: &str, effort_body: f64) {
        let effort_body = effort_body.max(0.0);
        self.total_body_effort += effort_body;
        self.approaches_completed += 1;
        self.muscle_tension.add(group, effort_body);
    }

    pub(crate) fn record_quiz_passed(&mut self) {
        self.quizzes_passed += 1;
    }

    pub(crate) fn record_mind_effort(&mut self, effort: f64) {
        self.total_mind_effort += effort.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(UserId::new(1).unwrap(), "Sung", "sung@example.com").unwrap()
    }

    #[test]
    fn new_user_has_zeroed_counters() {
        let user = test_user();
        assert_eq!(user.total_mind_effort(), 0.0);
        assert_eq!(user.total_body_effort(), 0.0);
        assert_eq!(user.quizzes_passed(), 0);
        assert_eq!(user.approaches_completed(), 0);
        assert!(user.muscle_tension().as_map().is_empty());
    }

    #[test]
    fn new_user_requires_name_and_email() {
        assert!(User::new(UserId::new(1).unwrap(), " ", "a@b.c").is_err());
        assert!(User::new(UserId::new(1).unwrap(), "Sung", "").is_err());
    }

    #[test]
    fn record_approach_accumulates_body_effort_and_tension() {
        let mut user = test_user();
        user.record_approach("push", 12.0);
        user.record_approach("push", 8.0);
        user.record_approach("legs", 4.0);

        assert_eq!(user.total_body_effort(), 24.0);
        assert_eq!(user.approaches_completed(), 3);
        assert_eq!(user.muscle_tension().get("push"), 20.0);
        assert_eq!(user.muscle_tension().get("legs"), 4.0);
        assert_eq!(user.muscle_tension().get("pull"), 0.0);
    }

    #[test]
    fn muscle_tension_from_map_drops_invalid_entries() {
        let mut raw = BTreeMap::new();
        raw.insert("push".to_string(), 3.0);
        raw.insert("pull".to_string(), -1.0);
        raw.insert("legs".to_string(), f64::NAN);

        let tension = MuscleTension::from_map(raw);
        assert_eq!(tension.as_map().len(), 1);
        assert_eq!(tension.get("push"), 3.0);
    }

    #[test]
    fn muscle_tension_serializes_as_plain_object() {
        let mut tension = MuscleTension::new();
        tension.add("pull", 1.5);
        assert_eq!(serde_json::to_string(&tension).unwrap(), r#"{"pull":1.5}"#);
    }
}
