//! Activity module - exercise catalog entries and the activity log.

mod exercise;
mod log;

pub use exercise::{Exercise, ExerciseSeed, DEFAULT_EXERCISES};
pub use log::{ActivityLogEntry, ActivityType};
