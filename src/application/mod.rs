//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers apply activities to the player aggregate; query handlers
//! read profiles and the exercise catalog.

pub mod handlers;

pub use handlers::{
    // Activity handlers
    RecordReadingCommand, RecordReadingHandler, RecordReadingResult,
    SubmitExerciseCommand, SubmitExerciseHandler, SubmitExerciseResult,
    SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult,
    // Player queries
    GetPlayerHandler, GetPlayerQuery, ListExercisesHandler,
};
