//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `PlayerRepository` - Loads and atomically commits the User/Profile pair
//! - `ExerciseCatalog` - Read-only exercise catalog
//!
//! ## Authentication Ports
//!
//! - `TokenVerifier` - Validates bearer tokens and resolves the caller

mod exercise_catalog;
mod player_repository;
mod token_verifier;

pub use exercise_catalog::ExerciseCatalog;
pub use player_repository::PlayerRepository;
pub use token_verifier::TokenVerifier;
