use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError};

/// Add player input
pub struct AddPlayerInput {
    pub name: String,
    pub photo: Option<String>,
}

/// Add player use case - new players start unassigned and non-captain
pub struct AddPlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> AddPlayer<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, input: AddPlayerInput) -> Result<Player, AddPlayerError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AddPlayerError::Validation("Player name is required".into()));
        }

        let player = Player::new(Uuid::new_v4().to_string(), name, input.photo);
        self.player_repo.save(&player).await?;

        Ok(player)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddPlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
