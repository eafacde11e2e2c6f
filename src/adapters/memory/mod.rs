//! In-memory adapters for tests and local development.

mod exercise_catalog;
mod player_store;

pub use exercise_catalog::InMemoryExerciseCatalog;
pub use player_store::InMemoryPlayerStore;
