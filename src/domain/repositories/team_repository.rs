use async_trait::async_trait;

use crate::domain::entities::Team;
use crate::domain::repositories::RepositoryError;

/// Partial update for a team. The nested `Option` on `captain_id`
/// distinguishes "set to null" from "leave alone".
///
/// `beer_pong_add_player_id` is not a field overwrite: the id is appended to
/// the played-player set, preserving the additive semantics of the original
/// endpoint's `$push`.
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub captain_id: Option<Option<String>>,
    pub budget: Option<i64>,
    pub score: Option<i64>,
    pub guess_the_word_rounds: Option<u32>,
    pub dumb_charades_rounds: Option<u32>,
    pub pictionary_rounds: Option<u32>,
    pub pen_fight_rounds: Option<u32>,
    pub beer_pong_rounds: Option<u32>,
    pub beer_pong_players_played: Option<u32>,
    pub beer_pong_total_score: Option<i64>,
    pub beer_pong_add_player_id: Option<String>,
}

/// Team repository trait
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All teams in creation order
    async fn list(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Find team by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, RepositoryError>;

    /// Insert a freshly-created team
    async fn save(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Partial-merge update; returns the merged team, None when missing
    async fn update(&self, id: &str, update: TeamUpdate) -> Result<Option<Team>, RepositoryError>;

    /// Delete one team; false when the id did not resolve
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Bulk reset
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
