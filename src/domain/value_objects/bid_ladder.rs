use serde::Serialize;

use crate::domain::services::scoring;

/// The transient bid ladder for the player currently on the block.
///
/// Owned by the session controller, never persisted: a sale writes the final
/// price through the roster store and the ladder is discarded. Skip, reset
/// and finish also discard it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidLadder {
    /// Player the ladder is tracking, None when no bidding has happened yet
    pub player_id: Option<String>,
    /// Current highest bid; meaningless unless `highest_bidder` is set
    pub amount: i64,
    pub highest_bidder: Option<String>,
}

impl BidLadder {
    /// Whether the ladder already tracks bids for the given player
    pub fn tracks(&self, player_id: &str) -> bool {
        self.player_id.as_deref() == Some(player_id)
    }

    pub fn has_bidder(&self) -> bool {
        self.highest_bidder.is_some()
    }

    /// The amount the next bid would cost for the given player
    pub fn next_bid_for(&self, player_id: &str, base_price: i64, bid_increment: i64) -> i64 {
        let has_bidder = self.tracks(player_id) && self.has_bidder();
        scoring::next_bid(has_bidder, self.amount, base_price, bid_increment)
    }

    /// Record an accepted bid, retargeting the ladder if the player changed
    pub fn record(&mut self, player_id: &str, amount: i64, team_id: &str) {
        self.player_id = Some(player_id.to_string());
        self.amount = amount;
        self.highest_bidder = Some(team_id.to_string());
    }

    pub fn clear(&mut self) {
        self.player_id = None;
        self.amount = 0;
        self.highest_bidder = None;
    }
}
