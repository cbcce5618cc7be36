use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::DEFAULT_BUDGET;
use crate::domain::repositories::{RepositoryError, RosterRepository};
use crate::domain::value_objects::BidLadder;

/// Reset auction use case. One transaction returns every non-captain player
/// to the pool, restores every budget to the default and the settings to
/// their defaults; the bid ladder is discarded with it.
pub struct ResetAuction<R: RosterRepository> {
    roster_repo: Arc<R>,
    bid_ladder: Arc<RwLock<BidLadder>>,
}

impl<R: RosterRepository> ResetAuction<R> {
    pub fn new(roster_repo: Arc<R>, bid_ladder: Arc<RwLock<BidLadder>>) -> Self {
        Self {
            roster_repo,
            bid_ladder,
        }
    }

    pub async fn execute(&self) -> Result<(), RepositoryError> {
        self.roster_repo.reset_auction(DEFAULT_BUDGET).await?;
        self.bid_ladder.write().await.clear();
        Ok(())
    }
}
