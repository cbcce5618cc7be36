use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::repositories::{
    PlayerRepository, RepositoryError, SettingsRepository, SettingsUpdate,
};
use crate::domain::value_objects::{AuctionQueue, BidLadder};

/// Skip player output
pub struct SkipPlayerOutput {
    pub current_player_index: u32,
}

/// Skip player use case. Advances the rotating cursor by one, wrapping at
/// the end of the unsold queue, and discards any standing bid. The skipped
/// player stays in place in the queue; only the cursor moves.
pub struct SkipPlayer<P: PlayerRepository, S: SettingsRepository> {
    player_repo: Arc<P>,
    settings_repo: Arc<S>,
    bid_ladder: Arc<RwLock<BidLadder>>,
}

impl<P: PlayerRepository, S: SettingsRepository> SkipPlayer<P, S> {
    pub fn new(
        player_repo: Arc<P>,
        settings_repo: Arc<S>,
        bid_ladder: Arc<RwLock<BidLadder>>,
    ) -> Self {
        Self {
            player_repo,
            settings_repo,
            bid_ladder,
        }
    }

    pub async fn execute(&self) -> Result<SkipPlayerOutput, RepositoryError> {
        let settings = self.settings_repo.get_or_create().await?;
        let players = self.player_repo.list().await?;
        let queue = AuctionQueue::from_players(&players);

        let next_index = queue.advanced(settings.current_player_index);
        self.settings_repo
            .update(SettingsUpdate {
                current_player_index: Some(next_index),
                ..Default::default()
            })
            .await?;

        self.bid_ladder.write().await.clear();

        Ok(SkipPlayerOutput {
            current_player_index: next_index,
        })
    }
}
