use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{AuctionStatus, Settings};
use crate::domain::repositories::{RepositoryError, SettingsRepository, SettingsUpdate};
use crate::domain::value_objects::BidLadder;

/// Finish auction use case - forces completion regardless of how many
/// players remain unsold
pub struct FinishAuction<S: SettingsRepository> {
    settings_repo: Arc<S>,
    bid_ladder: Arc<RwLock<BidLadder>>,
}

impl<S: SettingsRepository> FinishAuction<S> {
    pub fn new(settings_repo: Arc<S>, bid_ladder: Arc<RwLock<BidLadder>>) -> Self {
        Self {
            settings_repo,
            bid_ladder,
        }
    }

    pub async fn execute(&self) -> Result<Settings, RepositoryError> {
        let settings = self
            .settings_repo
            .update(SettingsUpdate {
                auction_status: Some(AuctionStatus::Completed),
                ..Default::default()
            })
            .await?;

        self.bid_ladder.write().await.clear();

        Ok(settings)
    }
}
