//! PostgreSQL implementation of ExerciseCatalog.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::activity::{Exercise, ExerciseSeed};
use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId};
use crate::ports::ExerciseCatalog;

/// PostgreSQL implementation of the ExerciseCatalog port.
pub struct PostgresExerciseCatalog {
    pool: PgPool,
}

impl PostgresExerciseCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts seed exercises that are not present yet (matched by name).
    ///
    /// Returns the number of rows inserted.
    pub async fn install(&self, seeds: &[ExerciseSeed]) -> Result<u64, DomainError> {
        let mut inserted = 0;
        for seed in seeds {
            let result = sqlx::query(
                r#"
                INSERT INTO exercises (name, multiplier, muscle_group)
                VALUES ($1, $2, $3)
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(seed.name)
            .bind(seed.multiplier)
            .bind(seed.group)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to seed exercise", e))?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExerciseRow {
    id: i64,
    name: String,
    multiplier: f64,
    muscle_group: String,
}

impl TryFrom<ExerciseRow> for Exercise {
    type Error = DomainError;

    fn try_from(row: ExerciseRow) -> Result<Self, Self::Error> {
        let id = ExerciseId::new(row.id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid exercise id: {}", e))
        })?;
        Exercise::new(id, row.name, row.multiplier, row.muscle_group).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid exercise row {}: {}", row.id, e),
            )
        })
    }
}

#[async_trait]
impl ExerciseCatalog for PostgresExerciseCatalog {
    async fn find(&self, exercise_id: ExerciseId) -> Result<Option<Exercise>, DomainError> {
        let row: Option<ExerciseRow> = sqlx::query_as(
            "SELECT id, name, multiplier, muscle_group FROM exercises WHERE id = $1",
        )
        .bind(exercise_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find exercise", e))?;

        row.map(Exercise::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        let rows: Vec<ExerciseRow> =
            sqlx::query_as("SELECT id, name, multiplier, muscle_group FROM exercises ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list exercises", e))?;

        rows.into_iter().map(Exercise::try_from).collect()
    }
}
