//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token verification (HS256 JWT, mock)
//! - `http` - REST API (axum)
//! - `memory` - In-process stores for tests and local runs
//! - `postgres` - PostgreSQL persistence (sqlx)

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtTokenVerifier, MockTokenVerifier};
pub use memory::{InMemoryExerciseCatalog, InMemoryPlayerStore};
pub use postgres::{PostgresExerciseCatalog, PostgresPlayerRepository};
