use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::repositories::{RepositoryError, RosterRepository};
use crate::domain::value_objects::BidLadder;

/// Confirm sale output
pub struct ConfirmSaleOutput {
    pub player_id: String,
    pub team_id: String,
    pub price: i64,
}

/// Confirm sale use case. Settles the standing bid: player assignment and
/// budget debit land in one transaction, then the ladder is discarded. The
/// budget is deliberately not re-checked here - the ladder enforced it when
/// the bid was accepted, and the debit is exact even if it goes negative.
pub struct ConfirmSale<R: RosterRepository> {
    roster_repo: Arc<R>,
    bid_ladder: Arc<RwLock<BidLadder>>,
}

impl<R: RosterRepository> ConfirmSale<R> {
    pub fn new(roster_repo: Arc<R>, bid_ladder: Arc<RwLock<BidLadder>>) -> Self {
        Self {
            roster_repo,
            bid_ladder,
        }
    }

    pub async fn execute(&self) -> Result<ConfirmSaleOutput, ConfirmSaleError> {
        let mut ladder = self.bid_ladder.write().await;

        let (player_id, team_id) = match (&ladder.player_id, &ladder.highest_bidder) {
            (Some(player_id), Some(team_id)) => (player_id.clone(), team_id.clone()),
            _ => return Err(ConfirmSaleError::NoStandingBid),
        };
        let price = ladder.amount;

        self.roster_repo
            .settle_sale(&player_id, &team_id, price)
            .await?;

        ladder.clear();

        Ok(ConfirmSaleOutput {
            player_id,
            team_id,
            price,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfirmSaleError {
    #[error("No standing bid to settle")]
    NoStandingBid,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
