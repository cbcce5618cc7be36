use async_trait::async_trait;

use crate::domain::entities::Player;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(String),
}

/// Partial update for a player. `None` leaves a field unchanged; the nested
/// `Option` distinguishes "set to null" from "leave alone".
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub photo: Option<Option<String>>,
    pub team_id: Option<Option<String>>,
    pub sold_price: Option<Option<i64>>,
    pub is_captain: Option<bool>,
}

/// Player repository trait
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// All players in creation order
    async fn list(&self) -> Result<Vec<Player>, RepositoryError>;

    /// Find player by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError>;

    /// Insert a freshly-created player
    async fn save(&self, player: &Player) -> Result<(), RepositoryError>;

    /// Partial-merge update; returns the merged player, None when missing
    async fn update(&self, id: &str, update: PlayerUpdate)
        -> Result<Option<Player>, RepositoryError>;

    /// Delete one player; false when the id did not resolve
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Bulk reset
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
