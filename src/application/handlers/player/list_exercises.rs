//! ListExercisesHandler - Query handler for the exercise catalog.

use std::sync::Arc;

use crate::domain::activity::Exercise;
use crate::domain::player::ActivityError;
use crate::ports::ExerciseCatalog;

/// Handler for listing catalog exercises.
pub struct ListExercisesHandler {
    exercise_catalog: Arc<dyn ExerciseCatalog>,
}

impl ListExercisesHandler {
    pub fn new(exercise_catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self { exercise_catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Exercise>, ActivityError> {
        Ok(self.exercise_catalog.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockExerciseCatalog;

    #[tokio::test]
    async fn lists_whole_catalog() {
        let handler = ListExercisesHandler::new(Arc::new(MockExerciseCatalog::with_defaults()));

        let exercises = handler.handle().await.unwrap();

        let names: Vec<_> = exercises.iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, vec!["Push-ups", "Pull-ups", "Squats"]);
    }
}
