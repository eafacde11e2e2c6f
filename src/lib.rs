//! Solo Mind - a progression engine that turns exercise and study into RPG
//! levels.
//!
//! Players log exercise sets, pass quizzes and record readings; the engine
//! converts them into experience, level-ups, derived stats and the reading
//! gate that alternates body and mind work.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
