use std::sync::Arc;

use crate::domain::repositories::{RepositoryError, RosterRepository};

/// Delete player use case - clears any captain seat referencing the player
/// in the same transaction
pub struct DeletePlayer<R: RosterRepository> {
    roster_repo: Arc<R>,
}

impl<R: RosterRepository> DeletePlayer<R> {
    pub fn new(roster_repo: Arc<R>) -> Self {
        Self { roster_repo }
    }

    pub async fn execute(&self, player_id: &str) -> Result<(), DeletePlayerError> {
        if !self.roster_repo.delete_player_cascade(player_id).await? {
            return Err(DeletePlayerError::PlayerNotFound);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePlayerError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
