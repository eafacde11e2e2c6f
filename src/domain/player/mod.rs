//! Player module - the User/Profile aggregate and its activity transitions.
//!
//! - `user` - identity and lifetime effort counters
//! - `profile` - level, experience, stats and the reading gate
//! - `gate` - reading gate state machine
//! - `aggregate` - [`Player`], which applies activities to both atomically

mod aggregate;
mod errors;
mod gate;
mod profile;
mod user;

pub use aggregate::{ExerciseMode, ExerciseOutcome, Player};
pub use errors::ActivityError;
pub use gate::ReadingGate;
pub use profile::{Profile, Stats};
pub use user::{MuscleTension, User};
