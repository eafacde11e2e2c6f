//! Token verification port.
//!
//! HTTP middleware uses this to turn a bearer token into the
//! [`AuthenticatedUser`] whose `id` selects the player for the request.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Return `AuthError::InvalidToken` for malformed tokens, bad signatures
///   or a missing/invalid `userId` claim
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct TestTokenVerifier {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    impl TestTokenVerifier {
        fn new() -> Self {
            Self {
                tokens: RwLock::new(HashMap::new()),
            }
        }

        fn add_valid_token(&self, token: &str, user: AuthenticatedUser) {
            self.tokens.write().unwrap().insert(token.to_string(), user);
        }
    }

    #[async_trait]
    impl TokenVerifier for TestTokenVerifier {
        async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn returns_user_for_known_token() {
        let verifier = TestTokenVerifier::new();
        verifier.add_valid_token("good", AuthenticatedUser::new(UserId::new(7).unwrap(), None));

        let user = verifier.verify("good").await.unwrap();
        assert_eq!(user.id.as_i64(), 7);
    }

    #[tokio::test]
    async fn rejects_unknown_token() {
        let verifier = TestTokenVerifier::new();
        assert_eq!(verifier.verify("nope").await, Err(AuthError::InvalidToken));
    }

    #[test]
    fn token_verifier_is_object_safe() {
        fn _accepts_dyn(_verifier: &dyn TokenVerifier) {}
    }
}
