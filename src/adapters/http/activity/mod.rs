//! HTTP adapter for player and activity endpoints.
//!
//! - `GET /api/profile` - Current player's profile with user summary
//! - `GET /api/exercises` - Exercise catalog
//! - `POST /api/activity/exercise` - Log an exercise set
//! - `POST /api/activity/submit-quiz` - Check a quiz answer
//! - `POST /api/activity/reading` - Credit a recognized reading passage

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::ActivityAppState;
pub use routes::activity_routes;
