use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{AuctionStatus, Player, Settings};
use crate::domain::repositories::{PlayerRepository, RepositoryError, SettingsRepository};
use crate::domain::value_objects::{AuctionQueue, BidLadder};

/// Auction state output - everything the auction view renders
pub struct AuctionStateOutput {
    pub settings: Settings,
    /// Unsold players in creation order
    pub queue: Vec<Player>,
    /// Player currently on the block
    pub current_player: Option<Player>,
    /// What the next bid would cost the first/next bidder
    pub next_bid: i64,
    pub current_bid: Option<i64>,
    pub highest_bidder_id: Option<String>,
    pub completed: bool,
}

/// Auction state snapshot use case
pub struct GetAuctionState<P: PlayerRepository, S: SettingsRepository> {
    player_repo: Arc<P>,
    settings_repo: Arc<S>,
    bid_ladder: Arc<RwLock<BidLadder>>,
}

impl<P: PlayerRepository, S: SettingsRepository> GetAuctionState<P, S> {
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

    pub async fn execute(&self) -> Result<AuctionStateOutput, RepositoryError> {
        let settings = self.settings_repo.get_or_create().await?;
        let players = self.player_repo.list().await?;
        let queue = AuctionQueue::from_players(&players);

        let current_player = queue.current(settings.current_player_index).cloned();

        let ladder = self.bid_ladder.read().await;
        let (next_bid, current_bid, highest_bidder_id) = match &current_player {
            Some(player) => {
                let next =
                    ladder.next_bid_for(&player.id, settings.base_price, settings.bid_increment);
                if ladder.tracks(&player.id) && ladder.has_bidder() {
                    (next, Some(ladder.amount), ladder.highest_bidder.clone())
                } else {
                    (next, None, None)
                }
            }
            None => (settings.base_price, None, None),
        };

        let completed =
            queue.is_empty() || settings.auction_status == AuctionStatus::Completed;

        Ok(AuctionStateOutput {
            settings,
            queue: queue.players().to_vec(),
            current_player,
            next_bid,
            current_bid,
            highest_bidder_id,
            completed,
        })
    }
}
