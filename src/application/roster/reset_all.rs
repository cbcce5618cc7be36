use std::sync::Arc;

use crate::domain::repositories::{
    AlbumRepository, PlayerRepository, RepositoryError, SettingsRepository, TeamRepository,
};

/// Reset all use case - wipes players, teams and albums and restores the
/// settings defaults. Ends the whole party session.
pub struct ResetAll<P, T, A, S>
where
    P: PlayerRepository,
    T: TeamRepository,
    A: AlbumRepository,
    S: SettingsRepository,
{
    player_repo: Arc<P>,
    team_repo: Arc<T>,
    album_repo: Arc<A>,
    settings_repo: Arc<S>,
}

impl<P, T, A, S> ResetAll<P, T, A, S>
where
    P: PlayerRepository,
    T: TeamRepository,
    A: AlbumRepository,
    S: SettingsRepository,
{
    pub fn new(
        player_repo: Arc<P>,
        team_repo: Arc<T>,
        album_repo: Arc<A>,
        settings_repo: Arc<S>,
    ) -> Self {
        Self {
            player_repo,
            team_repo,
            album_repo,
            settings_repo,
        }
    }

    pub async fn execute(&self) -> Result<(), RepositoryError> {
        self.player_repo.delete_all().await?;
        self.team_repo.delete_all().await?;
        self.album_repo.delete_all().await?;
        self.settings_repo.reset().await?;
        Ok(())
    }
}
