//! ExerciseCatalog port - read-only access to catalog exercises.

use async_trait::async_trait;

use crate::domain::{
    activity::Exercise,
    foundation::{DomainError, ExerciseId},
};

/// Read-only exercise catalog. Results may be cached by implementations.
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Find an exercise by ID.
    async fn find(&self, exercise_id: ExerciseId) -> Result<Option<Exercise>, DomainError>;

    /// All exercises, ordered by ID.
    async fn list(&self) -> Result<Vec<Exercise>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}

    #[test]
    fn exercise_catalog_is_object_safe() {
        assert_send_sync::<dyn ExerciseCatalog>();
    }
}
