//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPlayerRepository` - Users + profiles with version-checked commits
//! - `PostgresExerciseCatalog` - Exercise catalog and default seeding

mod exercise_catalog;
mod player_repository;

pub use exercise_catalog::PostgresExerciseCatalog;
pub use player_repository::PostgresPlayerRepository;
