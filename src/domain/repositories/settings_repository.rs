use async_trait::async_trait;

use crate::domain::entities::{AuctionStatus, Settings};
use crate::domain::repositories::RepositoryError;

/// Partial update for the settings singleton
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub base_price: Option<i64>,
    pub bid_increment: Option<i64>,
    pub auction_status: Option<AuctionStatus>,
    pub current_player_index: Option<u32>,
}

/// Settings repository trait. Exactly one record exists; reads create it
/// with defaults when absent.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The singleton, created with defaults on first access
    async fn get_or_create(&self) -> Result<Settings, RepositoryError>;

    /// Partial-merge update (creating the record first when absent)
    async fn update(&self, update: SettingsUpdate) -> Result<Settings, RepositoryError>;

    /// Restore defaults
    async fn reset(&self) -> Result<Settings, RepositoryError>;
}
