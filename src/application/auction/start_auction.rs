use std::sync::Arc;

use crate::domain::entities::{AuctionStatus, Settings};
use crate::domain::repositories::{
    RepositoryError, SettingsRepository, SettingsUpdate, TeamRepository,
};

/// Start auction use case. The party is ready once there are at least two
/// teams and every team has a captain pinned.
pub struct StartAuction<T: TeamRepository, S: SettingsRepository> {
    team_repo: Arc<T>,
    settings_repo: Arc<S>,
}

impl<T: TeamRepository, S: SettingsRepository> StartAuction<T, S> {
    pub fn new(team_repo: Arc<T>, settings_repo: Arc<S>) -> Self {
        Self {
            team_repo,
            settings_repo,
        }
    }

    pub async fn execute(&self) -> Result<Settings, StartAuctionError> {
        let teams = self.team_repo.list().await?;
        if teams.len() < 2 {
            return Err(StartAuctionError::NotEnoughTeams);
        }
        if teams.iter().any(|t| t.captain_id.is_none()) {
            return Err(StartAuctionError::MissingCaptains);
        }

        let settings = self.settings_repo.get_or_create().await?;
        if settings.auction_status == AuctionStatus::Completed {
            return Err(StartAuctionError::AlreadyCompleted);
        }

        let settings = self
            .settings_repo
            .update(SettingsUpdate {
                auction_status: Some(AuctionStatus::InProgress),
                ..Default::default()
            })
            .await?;

        Ok(settings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartAuctionError {
    #[error("At least 2 teams are required")]
    NotEnoughTeams,
    #[error("All teams need a captain")]
    MissingCaptains,
    #[error("Auction is already completed")]
    AlreadyCompleted,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
