//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `progression` - Pure game mechanics (XP curve, rep targets, stat derivation)
//! - `activity` - Exercise catalog entries and activity log records
//! - `player` - User/Profile aggregate and activity state transitions

pub mod activity;
pub mod foundation;
pub mod player;
pub mod progression;
