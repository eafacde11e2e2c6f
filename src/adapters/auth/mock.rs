//! Mock token verifier for tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use solo_mind::adapters::auth::MockTokenVerifier;
//!
//! let verifier = MockTokenVerifier::new().with_test_user("valid-token", 1);
//! let user = verifier.verify("valid-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Maps fixed tokens to users. Unknown tokens return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockTokenVerifier {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every verification when set.
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a token for the user with the given numeric ID.
    ///
    /// Panics if `user_id` is not positive.
    pub fn with_test_user(self, token: impl Into<String>, user_id: i64) -> Self {
        let user = AuthenticatedUser::new(
            UserId::new(user_id).expect("test user id must be positive"),
            Some(format!("Test User {}", user_id)),
        );
        self.with_user(token, user)
    }

    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let forced = self
            .force_error
            .read()
            .map_err(|_| AuthError::service_unavailable("mock verifier lock poisoned"))?
            .clone();
        if let Some(error) = forced {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| AuthError::service_unavailable("mock verifier lock poisoned"))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_user() {
        let verifier = MockTokenVerifier::new().with_test_user("t1", 5);

        let user = verifier.verify("t1").await.unwrap();

        assert_eq!(user.id.as_i64(), 5);
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let verifier = MockTokenVerifier::new()
            .with_test_user("t1", 5)
            .with_error(AuthError::TokenExpired);

        assert_eq!(verifier.verify("t1").await, Err(AuthError::TokenExpired));
    }
}
