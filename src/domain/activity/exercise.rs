//! Exercise catalog entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExerciseId, ValidationError};

/// A catalog exercise. Read-only from the engine's point of view.
///
/// # Invariants
///
/// - `name` and `group` are non-empty
/// - `multiplier` is finite and strictly positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    id: ExerciseId,
    name: String,
    multiplier: f64,
    group: String,
}

impl Exercise {
    /// Creates a validated catalog entry.
    pub fn new(
        id: ExerciseId,
        name: impl Into<String>,
        multiplier: f64,
        group: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let group = group.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if group.trim().is_empty() {
            return Err(ValidationError::empty_field("group"));
        }
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ValidationError::invalid_format(
                "multiplier",
                format!("must be a positive number, got {}", multiplier),
            ));
        }
        Ok(Self {
            id,
            name,
            multiplier,
            group,
        })
    }

    pub fn id(&self) -> ExerciseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Muscle group tag used for tension tracking.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Body effort produced by `reps` repetitions.
    pub fn effort_for(&self, reps: i64) -> f64 {
        reps.max(0) as f64 * self.multiplier
    }
}

/// Seed data for a catalog entry whose id is assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseSeed {
    pub name: &'static str,
    pub multiplier: f64,
    pub group: &'static str,
}

/// Catalog installed on a fresh database.
pub const DEFAULT_EXERCISES: [ExerciseSeed; 3] = [
    ExerciseSeed {
        name: "Push-ups",
        multiplier: 1.0,
        group: "push",
    },
    ExerciseSeed {
        name: "Pull-ups",
        multiplier: 1.5,
        group: "pull",
    },
    ExerciseSeed {
        name: "Squats",
        multiplier: 0.8,
        group: "legs",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> ExerciseId {
        ExerciseId::new(raw).unwrap()
    }

    #[test]
    fn effort_scales_reps_by_multiplier() {
        let pull_ups = Exercise::new(id(2), "Pull-ups", 1.5, "pull").unwrap();
        assert_eq!(pull_ups.effort_for(10), 15.0);
        assert_eq!(pull_ups.effort_for(0), 0.0);
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        assert!(Exercise::new(id(1), "Plank", 0.0, "core").is_err());
        assert!(Exercise::new(id(1), "Plank", -1.0, "core").is_err());
        assert!(Exercise::new(id(1), "Plank", f64::INFINITY, "core").is_err());
    }

    #[test]
    fn rejects_blank_name_or_group() {
        assert!(Exercise::new(id(1), "", 1.0, "core").is_err());
        assert!(Exercise::new(id(1), "Plank", 1.0, "  ").is_err());
    }

    #[test]
    fn default_catalog_is_valid() {
        for (i, seed) in DEFAULT_EXERCISES.iter().enumerate() {
            let exercise =
                Exercise::new(id(i as i64 + 1), seed.name, seed.multiplier, seed.group);
            assert!(exercise.is_ok(), "invalid seed {}", seed.name);
        }
    }
}
