//! GetPlayerHandler - Query handler for a player's profile view.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::player::{ActivityError, Player};
use crate::ports::PlayerRepository;

/// Query for the caller's own player.
#[derive(Debug, Clone)]
pub struct GetPlayerQuery {
    pub user_id: UserId,
}

/// Handler for retrieving a player.
pub struct GetPlayerHandler {
    player_repository: Arc<dyn PlayerRepository>,
}

impl GetPlayerHandler {
    pub fn new(player_repository: Arc<dyn PlayerRepository>) -> Self {
        Self { player_repository }
    }

    pub async fn handle(&self, query: GetPlayerQuery) -> Result<Player, ActivityError> {
        self.player_repository
            .load(query.user_id)
            .await?
            .ok_or(ActivityError::UserNotFound(query.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        fresh_player, user_id, MockPlayerRepository,
    };

    #[tokio::test]
    async fn returns_stored_player() {
        let repo = Arc::new(MockPlayerRepository::with_player(fresh_player()));
        let handler = GetPlayerHandler::new(repo);

        let player = handler
            .handle(GetPlayerQuery { user_id: user_id() })
            .await
            .unwrap();

        assert_eq!(player, fresh_player());
    }

    #[tokio::test]
    async fn missing_player_is_not_found() {
        let handler = GetPlayerHandler::new(Arc::new(MockPlayerRepository::empty()));

        let result = handler.handle(GetPlayerQuery { user_id: user_id() }).await;

        assert_eq!(result.unwrap_err(), ActivityError::UserNotFound(user_id()));
    }
}
