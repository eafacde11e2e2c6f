//! Mutex-backed port mocks shared by handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::activity::{ActivityLogEntry, Exercise, DEFAULT_EXERCISES};
use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId, UserId};
use crate::domain::player::Player;
use crate::ports::{ExerciseCatalog, PlayerRepository};

pub(crate) fn user_id() -> UserId {
    UserId::new(1).unwrap()
}

pub(crate) fn exercise_id(raw: i64) -> ExerciseId {
    ExerciseId::new(raw).unwrap()
}

pub(crate) fn fresh_player() -> Player {
    Player::register(user_id(), "Jin-Woo", "jinwoo@example.com").unwrap()
}

// ─────────────────────────────────────────────────────────────────────
// Player repository
// ─────────────────────────────────────────────────────────────────────

pub(crate) struct MockPlayerRepository {
    players: Mutex<HashMap<UserId, Player>>,
    logs: Mutex<Vec<ActivityLogEntry>>,
    loads: Mutex<usize>,
    fail_commit: Option<ErrorCode>,
}

impl MockPlayerRepository {
    pub(crate) fn empty() -> Self {
        Self {
            players: Mutex::new(HashMap::new()),
            logs: Mutex::new(Vec::new()),
            loads: Mutex::new(0),
            fail_commit: None,
        }
    }

    pub(crate) fn with_player(player: Player) -> Self {
        let repo = Self::empty();
        repo.players.lock().unwrap().insert(player.id(), player);
        repo
    }

    pub(crate) fn failing_commit(player: Player, code: ErrorCode) -> Self {
        let mut repo = Self::with_player(player);
        repo.fail_commit = Some(code);
        repo
    }

    pub(crate) fn stored(&self, user_id: UserId) -> Option<Player> {
        self.players.lock().unwrap().get(&user_id).cloned()
    }

    pub(crate) fn logs(&self) -> Vec<ActivityLogEntry> {
        self.logs.lock().unwrap().clone()
    }

    pub(crate) fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

#[async_trait]
impl PlayerRepository for MockPlayerRepository {
    async fn load(&self, user_id: UserId) -> Result<Option<Player>, DomainError> {
        *self.loads.lock().unwrap() += 1;
        Ok(self.players.lock().unwrap().get(&user_id).cloned())
    }

    async fn commit(
        &self,
        player: &Player,
        log_entry: Option<&ActivityLogEntry>,
    ) -> Result<Player, DomainError> {
        if let Some(code) = self.fail_commit {
            return Err(DomainError::new(code, "Simulated commit failure"));
        }
        let mut stored = player.clone();
        stored.mark_committed();
        self.players
            .lock()
            .unwrap()
            .insert(stored.id(), stored.clone());
        if let Some(entry) = log_entry {
            self.logs.lock().unwrap().push(entry.clone());
        }
        Ok(stored)
    }

    async fn create(
        &self,
        _name: &str,
        _email: &str,
        _credential_hash: &str,
    ) -> Result<Player, DomainError> {
        Err(DomainError::new(
            ErrorCode::InternalError,
            "Not supported by mock",
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Exercise catalog
// ─────────────────────────────────────────────────────────────────────

pub(crate) struct MockExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl MockExerciseCatalog {
    pub(crate) fn with_defaults() -> Self {
        let exercises = DEFAULT_EXERCISES
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                Exercise::new(exercise_id(i as i64 + 1), seed.name, seed.multiplier, seed.group)
                    .unwrap()
            })
            .collect();
        Self { exercises }
    }
}

#[async_trait]
impl ExerciseCatalog for MockExerciseCatalog {
    async fn find(&self, exercise_id: ExerciseId) -> Result<Option<Exercise>, DomainError> {
        Ok(self
            .exercises
            .iter()
            .find(|e| e.id() == exercise_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        Ok(self.exercises.clone())
    }
}
