//! Activity command handlers.
//!
//! Each handler is one atomic read-modify-write over the player aggregate:
//! validate, apply the transition in memory, then commit user, profile and
//! the activity log entry in a single unit.

mod record_reading;
mod submit_exercise;
mod submit_quiz;

pub use record_reading::{RecordReadingCommand, RecordReadingHandler, RecordReadingResult};
pub use submit_exercise::{SubmitExerciseCommand, SubmitExerciseHandler, SubmitExerciseResult};
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult};
