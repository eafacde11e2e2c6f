//! In-memory implementation of ExerciseCatalog.

use async_trait::async_trait;

use crate::domain::activity::{Exercise, ExerciseSeed, DEFAULT_EXERCISES};
use crate::domain::foundation::{DomainError, ExerciseId};
use crate::ports::ExerciseCatalog;

/// Fixed catalog held in memory, ordered by ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl InMemoryExerciseCatalog {
    pub fn new(mut exercises: Vec<Exercise>) -> Self {
        exercises.sort_by_key(|e| e.id());
        Self { exercises }
    }

    /// Builds a catalog from seeds, numbering them from 1.
    pub fn from_seeds(seeds: &[ExerciseSeed]) -> Result<Self, DomainError> {
        let exercises = seeds
            .iter()
            .zip(1_i64..)
            .map(|(seed, id)| -> Result<Exercise, DomainError> {
                Ok(Exercise::new(
                    ExerciseId::new(id)?,
                    seed.name,
                    seed.multiplier,
                    seed.group,
                )?)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(exercises))
    }

    /// Catalog holding the default exercises.
    pub fn with_defaults() -> Result<Self, DomainError> {
        Self::from_seeds(&DEFAULT_EXERCISES)
    }
}

#[async_trait]
impl ExerciseCatalog for InMemoryExerciseCatalog {
    async fn find(&self, exercise_id: ExerciseId) -> Result<Option<Exercise>, DomainError> {
        Ok(self
            .exercises
            .iter()
            .find(|e| e.id() == exercise_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        Ok(self.exercises.clone())
    }
}
