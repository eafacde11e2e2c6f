//! PlayerRepository port for loading and committing the player aggregate.

use async_trait::async_trait;

use crate::domain::{
    activity::ActivityLogEntry,
    foundation::{DomainError, UserId},
    player::Player,
};

/// Persistence of the User/Profile pair.
///
/// # Contract
///
/// Implementations must:
/// - Load user and profile together, returning `None` if either is missing
/// - Write user, profile and the optional log entry as one atomic unit
/// - Reject a commit whose `player.version()` no longer matches the stored
///   profile version with `ErrorCode::ConcurrentModification`, writing nothing
/// - Increment the stored version on every successful commit
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find the player owned by a user.
    async fn load(&self, user_id: UserId) -> Result<Option<Player>, DomainError>;

    /// Atomically persist a mutated player and its log entry.
    ///
    /// Returns the player as stored, carrying the new version.
    async fn commit(
        &self,
        player: &Player,
        log_entry: Option<&ActivityLogEntry>,
    ) -> Result<Player, DomainError>;

    /// Create a user with a default profile.
    ///
    /// The credential hash is stored but never loaded back into the domain.
    async fn create(
        &self,
        name: &str,
        email: &str,
        credential_hash: &str,
    ) -> Result<Player, DomainError>;
}
