//! Authentication adapters.
//!
//! Implementations of the `TokenVerifier` port:
//!
//! - `jwt` - HS256 shared-secret verification used in production
//! - `mock` - Fixed token table for tests and local development

mod jwt;
mod mock;

pub use jwt::{AccessClaims, JwtTokenVerifier};
pub use mock::MockTokenVerifier;
