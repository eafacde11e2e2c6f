//! PostgreSQL implementation of PlayerRepository.
//!
//! A player spans the `users` and `profiles` rows of one user. Commits run
//! in a single transaction guarded by the profile `version` column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::activity::ActivityLogEntry;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::player::{MuscleTension, Player, Profile, ReadingGate, Stats, User};
use crate::ports::PlayerRepository;

/// PostgreSQL implementation of the PlayerRepository port.
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Joined `users` + `profiles` row.
#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    name: String,
    email: String,
    total_mind_effort: f64,
    total_body_effort: f64,
    quizzes_passed: i64,
    approaches_completed: i64,
    muscle_tension: Json<BTreeMap<String, f64>>,
    level: i32,
    current_xp: f64,
    stat_str: i32,
    stat_end: i32,
    stat_agi: i32,
    stat_int: i32,
    stat_wis: i32,
    stat_foc: i32,
    is_reading_unlocked: bool,
    version: i64,
}

impl TryFrom<PlayerRow> for Player {
    type Error = DomainError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
        })?;

        let user = User::reconstitute(
            user_id,
            row.name,
            row.email,
            row.total_mind_effort,
            row.total_body_effort,
            row.quizzes_passed,
            row.approaches_completed,
            MuscleTension::from_map(row.muscle_tension.0),
        );
        let stats = Stats {
            strength: row.stat_str,
            endurance: row.stat_end,
            agility: row.stat_agi,
            intellect: row.stat_int,
            wisdom: row.stat_wis,
            focus: row.stat_foc,
        };
        let profile = Profile::reconstitute(
            user_id,
            row.level,
            row.current_xp,
            stats,
            ReadingGate::from_flag(row.is_reading_unlocked),
            row.version,
        );

        Player::new(user, profile)
    }
}

const SELECT_PLAYER: &str = r#"
    SELECT
        u.id, u.name, u.email,
        u.total_mind_effort, u.total_body_effort,
        u.quizzes_passed, u.approaches_completed, u.muscle_tension,
        p.level, p.current_xp,
        p.stat_str, p.stat_end, p.stat_agi, p.stat_int, p.stat_wis, p.stat_foc,
        p.is_reading_unlocked, p.version
    FROM users u
    JOIN profiles p ON p.user_id = u.id
    WHERE u.id = $1
"#;

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn load(&self, user_id: UserId) -> Result<Option<Player>, DomainError> {
        let row: Option<PlayerRow> = sqlx::query_as(SELECT_PLAYER)
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to load player", e))?;

        row.map(Player::try_from).transpose()
    }

    async fn commit(
        &self,
        player: &Player,
        log_entry: Option<&ActivityLogEntry>,
    ) -> Result<Player, DomainError> {
        let user = player.user();
        let profile = player.profile();
        let stats = profile.stats();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        // 1. Profile first: the version check decides whether anything is written
        let updated = sqlx::query(
            r#"
            UPDATE profiles SET
                level = $3,
                current_xp = $4,
                stat_str = $5,
                stat_end = $6,
                stat_agi = $7,
                stat_int = $8,
                stat_wis = $9,
                stat_foc = $10,
                is_reading_unlocked = $11,
                version = version + 1,
                updated_at = NOW()
            WHERE user_id = $1 AND version = $2
            "#,
        )
        .bind(player.id().as_i64())
        .bind(player.version())
        .bind(profile.level())
        .bind(profile.current_xp())
        .bind(stats.strength)
        .bind(stats.endurance)
        .bind(stats.agility)
        .bind(stats.intellect)
        .bind(stats.wisdom)
        .bind(stats.focus)
        .bind(profile.is_reading_unlocked())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update profile", e))?;

        if updated.rows_affected() == 0 {
            return Err(self.stale_commit_error(&mut tx, player).await);
        }

        // 2. User counters
        sqlx::query(
            r#"
            UPDATE users SET
                total_mind_effort = $2,
                total_body_effort = $3,
                quizzes_passed = $4,
                approaches_completed = $5,
                muscle_tension = $6
            WHERE id = $1
            "#,
        )
        .bind(player.id().as_i64())
        .bind(user.total_mind_effort())
        .bind(user.total_body_effort())
        .bind(user.quizzes_passed())
        .bind(user.approaches_completed())
        .bind(Json(user.muscle_tension().as_map()))
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update user", e))?;

        // 3. Activity log
        if let Some(entry) = log_entry {
            sqlx::query(
                r#"
                INSERT INTO activity_logs (
                    id, user_id, activity_type, description, xp_gained, stat_affected, recorded_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(*entry.id.as_uuid())
            .bind(entry.user_id.as_i64())
            .bind(entry.activity_type.as_str())
            .bind(&entry.description)
            .bind(entry.xp_gained)
            .bind(&entry.stat_affected)
            .bind(*entry.recorded_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert activity log", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        let mut committed = player.clone();
        committed.mark_committed();
        Ok(committed)
    }

    async fn create(
        &self,
        name: &str,
        email: &str,
        credential_hash: &str,
    ) -> Result<Player, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, credential_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(credential_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_key") {
                    return DomainError::validation("email", "A user with this email already exists");
                }
            }
            DomainError::database("Failed to create user", e)
        })?;

        sqlx::query("INSERT INTO profiles (user_id) VALUES ($1)")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to create profile", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        let user_id = UserId::new(id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
        })?;
        Player::register(user_id, name, email).map_err(DomainError::from)
    }
}

impl PostgresPlayerRepository {
    /// Distinguishes a vanished profile from a lost version race.
    async fn stale_commit_error(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        player: &Player,
    ) -> DomainError {
        let exists: Result<bool, sqlx::Error> =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM profiles WHERE user_id = $1)")
                .bind(player.id().as_i64())
                .fetch_one(&mut **tx)
                .await;

        match exists {
            Ok(false) => DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile for user {} not found", player.id()),
            ),
            Ok(true) => {
                tracing::warn!(
                    user_id = %player.id(),
                    expected_version = player.version(),
                    "Concurrent profile modification detected"
                );
                DomainError::new(
                    ErrorCode::ConcurrentModification,
                    format!(
                        "Profile for user {} was modified concurrently",
                        player.id()
                    ),
                )
                .with_detail("expected_version", player.version().to_string())
            }
            Err(e) => DomainError::database("Failed to check profile", e),
        }
    }
}
