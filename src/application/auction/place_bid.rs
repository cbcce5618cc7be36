use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::AuctionStatus;
use crate::domain::repositories::{
    PlayerRepository, RepositoryError, SettingsRepository, TeamRepository,
};
use crate::domain::value_objects::{AuctionQueue, BidLadder};

/// Place bid input
pub struct PlaceBidInput {
    pub team_id: String,
}

/// Place bid output
pub struct PlaceBidOutput {
    pub player_id: String,
    pub team_id: String,
    pub amount: i64,
}

/// Place bid use case. Only the in-memory bid ladder changes; nothing is
/// persisted until the sale is confirmed.
pub struct PlaceBid<P: PlayerRepository, T: TeamRepository, S: SettingsRepository> {
    player_repo: Arc<P>,
    team_repo: Arc<T>,
    settings_repo: Arc<S>,
    bid_ladder: Arc<RwLock<BidLadder>>,
}

impl<P: PlayerRepository, T: TeamRepository, S: SettingsRepository> PlaceBid<P, T, S> {
    pub fn new(
        player_repo: Arc<P>,
        team_repo: Arc<T>,
        settings_repo: Arc<S>,
        bid_ladder: Arc<RwLock<BidLadder>>,
    ) -> Self {
        Self {
            player_repo,
            team_repo,
            settings_repo,
            bid_ladder,
        }
    }

    pub async fn execute(&self, input: PlaceBidInput) -> Result<PlaceBidOutput, PlaceBidError> {
        let settings = self.settings_repo.get_or_create().await?;
        if settings.auction_status == AuctionStatus::Completed {
            return Err(PlaceBidError::AuctionCompleted);
        }

        let players = self.player_repo.list().await?;
        let queue = AuctionQueue::from_players(&players);
        let current = queue
            .current(settings.current_player_index)
            .ok_or(PlaceBidError::NoPlayerOnBlock)?;

        let team = self
            .team_repo
            .find_by_id(&input.team_id)
            .await?
            .ok_or(PlaceBidError::TeamNotFound)?;

        let mut ladder = self.bid_ladder.write().await;

        if ladder.tracks(&current.id) && ladder.highest_bidder.as_deref() == Some(team.id.as_str())
        {
            return Err(PlaceBidError::AlreadyHighestBidder);
        }

        let amount = ladder.next_bid_for(&current.id, settings.base_price, settings.bid_increment);
        if amount > team.budget {
            return Err(PlaceBidError::InsufficientBudget {
                required: amount,
                budget: team.budget,
            });
        }

        ladder.record(&current.id, amount, &team.id);

        Ok(PlaceBidOutput {
            player_id: current.id.clone(),
            team_id: team.id,
            amount,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaceBidError {
    #[error("Auction is already completed")]
    AuctionCompleted,
    #[error("No player is up for auction")]
    NoPlayerOnBlock,
    #[error("Team not found")]
    TeamNotFound,
    #[error("Team is already the highest bidder")]
    AlreadyHighestBidder,
    #[error("Bid of {required} exceeds remaining budget {budget}")]
    InsufficientBudget { required: i64, budget: i64 },
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
