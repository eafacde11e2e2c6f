//! Player query handlers.

mod get_player;
mod list_exercises;

pub use get_player::{GetPlayerHandler, GetPlayerQuery};
pub use list_exercises::ListExercisesHandler;
