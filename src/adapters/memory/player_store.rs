//! In-memory implementation of PlayerRepository.
//!
//! Keeps the same contract as the PostgreSQL adapter: commits are
//! version-checked and write player and log entry under one lock.
//! Credential hashes are not kept; nothing in process authenticates
//! against them.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::activity::ActivityLogEntry;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::player::Player;
use crate::ports::PlayerRepository;

#[derive(Debug, Default)]
struct StoreState {
    players: HashMap<UserId, Player>,
    emails: HashMap<String, UserId>,
    logs: Vec<ActivityLogEntry>,
    next_id: i64,
}

/// Mutex-guarded player store for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    state: Mutex<StoreState>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log entries committed so far, oldest first.
    pub fn activity_log(&self) -> Result<Vec<ActivityLogEntry>, DomainError> {
        Ok(self.lock()?.logs.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, DomainError> {
        self.state.lock().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "Player store lock poisoned")
        })
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerStore {
    async fn load(&self, user_id: UserId) -> Result<Option<Player>, DomainError> {
        Ok(self.lock()?.players.get(&user_id).cloned())
    }

    async fn commit(
        &self,
        player: &Player,
        log_entry: Option<&ActivityLogEntry>,
    ) -> Result<Player, DomainError> {
        let mut state = self.lock()?;

        let stored_version = state
            .players
            .get(&player.id())
            .map(Player::version)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("Profile for user {} not found", player.id()),
                )
            })?;

        if stored_version != player.version() {
            tracing::warn!(
                user_id = %player.id(),
                expected_version = player.version(),
                stored_version,
                "Concurrent profile modification detected"
            );
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!("Profile for user {} was modified concurrently", player.id()),
            )
            .with_detail("expected_version", player.version().to_string()));
        }

        let mut committed = player.clone();
        committed.mark_committed();
        state.players.insert(committed.id(), committed.clone());
        if let Some(entry) = log_entry {
            state.logs.push(entry.clone());
        }

        Ok(committed)
    }

    async fn create(
        &self,
        name: &str,
        email: &str,
        _credential_hash: &str,
    ) -> Result<Player, DomainError> {
        let mut state = self.lock()?;

        if state.emails.contains_key(email) {
            return Err(DomainError::validation(
                "email",
                "A user with this email already exists",
            ));
        }

        state.next_id += 1;
        let user_id = UserId::new(state.next_id)?;
        let player = Player::register(user_id, name, email)?;

        state.emails.insert(email.to_string(), user_id);
        state.players.insert(user_id, player.clone());

        Ok(player)
    }
}
