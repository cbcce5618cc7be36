use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_PRICE: i64 = 100;
pub const DEFAULT_BID_INCREMENT: i64 = 10;

/// Auction run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuctionStatus {
    Pending,
    InProgress,
    Completed,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Pending => "pending",
            AuctionStatus::InProgress => "in-progress",
            AuctionStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(AuctionStatus::Pending),
            "in-progress" => Some(AuctionStatus::InProgress),
            "completed" => Some(AuctionStatus::Completed),
            _ => None,
        }
    }
}

/// Auction run-state singleton; created lazily with defaults when absent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_price: i64,
    pub bid_increment: i64,
    pub auction_status: AuctionStatus,
    /// Pointer into the recomputed unsold queue, wrapped modulo its length
    pub current_player_index: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            bid_increment: DEFAULT_BID_INCREMENT,
            auction_status: AuctionStatus::Pending,
            current_player_index: 0,
        }
    }
}
