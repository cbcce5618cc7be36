use async_trait::async_trait;

use crate::domain::repositories::RepositoryError;

/// Settlement operations spanning more than one entity.
///
/// Each call runs inside a single database transaction so a failure cannot
/// leave the roster half-updated (a sold player with an undebited budget, a
/// one-sided trade). Callers validate preconditions through the entity
/// repositories first; these methods still surface `NotFound` when a row
/// vanishes between the check and the write.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Sale: assign the player to the team at the hammer price and debit the
    /// budget by exactly that price. No floor - the budget may go negative.
    async fn settle_sale(
        &self,
        player_id: &str,
        team_id: &str,
        price: i64,
    ) -> Result<(), RepositoryError>;

    /// Swap the team assignments of two players; sold prices are untouched
    async fn swap_players(&self, player1_id: &str, player2_id: &str)
        -> Result<(), RepositoryError>;

    /// Pin the player as the team's captain, demoting the team's previous
    /// captain (if any, and if different)
    async fn assign_captain(&self, team_id: &str, player_id: &str)
        -> Result<(), RepositoryError>;

    /// Delete the team and release its members back to the pool
    /// (team and sold price cleared); false when the id did not resolve
    async fn delete_team_cascade(&self, team_id: &str) -> Result<bool, RepositoryError>;

    /// Delete the player and clear any captain reference to it;
    /// false when the id did not resolve
    async fn delete_player_cascade(&self, player_id: &str) -> Result<bool, RepositoryError>;

    /// Return every non-captain player to the pool, restore every budget to
    /// the default and the settings record to its defaults
    async fn reset_auction(&self, default_budget: i64) -> Result<(), RepositoryError>;

    /// Apply pen-fight deltas to both teams and bump both round counters
    async fn apply_pen_fight(
        &self,
        team1_id: &str,
        delta1: i64,
        team2_id: &str,
        delta2: i64,
    ) -> Result<(), RepositoryError>;

    /// Apply popular-song deltas per team and mark the album played
    async fn apply_song_scores(
        &self,
        album_id: &str,
        deltas: &[(String, i64)],
    ) -> Result<(), RepositoryError>;
}
