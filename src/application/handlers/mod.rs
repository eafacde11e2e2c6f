//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod activity;
pub mod player;

#[cfg(test)]
pub(crate) mod test_support;

pub use activity::{
    RecordReadingCommand, RecordReadingHandler, RecordReadingResult, SubmitExerciseCommand,
    SubmitExerciseHandler, SubmitExerciseResult, SubmitQuizCommand, SubmitQuizHandler,
    SubmitQuizResult,
};
pub use player::{GetPlayerHandler, GetPlayerQuery, ListExercisesHandler};
