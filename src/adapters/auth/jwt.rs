//! HS256 JWT adapter for bearer token verification.
//!
//! Tokens are signed with a shared secret and carry the numeric `userId`
//! claim set at login, plus the standard `exp` claim.
//!
//! # Example
//!
//! ```ignore
//! use secrecy::SecretString;
//! use solo_mind::adapters::auth::JwtTokenVerifier;
//! use solo_mind::ports::TokenVerifier;
//!
//! let verifier = JwtTokenVerifier::new(SecretString::new("s3cret".into()), 30);
//! let user = verifier.verify("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Verifies HS256-signed access tokens.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Creates a verifier for tokens signed with `secret`.
    ///
    /// `leeway_secs` is the clock skew tolerated on `exp`.
    pub fn new(secret: SecretString, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })?;
        let claims = token_data.claims;

        let user_id = UserId::new(claims.user_id).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.user_id);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.name))
    }
}

impl std::fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn sign(claims: &AccessClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(SecretString::new(SECRET.to_string()), 0)
    }

    #[tokio::test]
    async fn accepts_valid_token() {
        let token = sign(
            &AccessClaims {
                user_id: 42,
                exp: now() + 3600,
                name: Some("Jin-Woo".to_string()),
            },
            SECRET,
        );

        let user = verifier().verify(&token).await.unwrap();

        assert_eq!(user.id.as_i64(), 42);
        assert_eq!(user.display_name.as_deref(), Some("Jin-Woo"));
    }

    #[tokio::test]
    async fn rejects_wrong_signature() {
        let token = sign(
            &AccessClaims {
                user_id: 42,
                exp: now() + 3600,
                name: None,
            },
            "some-other-secret",
        );

        assert_eq!(verifier().verify(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn reports_expired_token() {
        let token = sign(
            &AccessClaims {
                user_id: 42,
                exp: now() - 3600,
                name: None,
            },
            SECRET,
        );

        assert_eq!(verifier().verify(&token).await, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn rejects_non_positive_user_id() {
        let token = sign(
            &AccessClaims {
                user_id: 0,
                exp: now() + 3600,
                name: None,
            },
            SECRET,
        );

        assert_eq!(verifier().verify(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn rejects_garbage() {
        assert_eq!(
            verifier().verify("not-a-jwt").await,
            Err(AuthError::InvalidToken)
        );
    }
}
