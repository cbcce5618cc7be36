use std::sync::Arc;

use crate::domain::repositories::{RepositoryError, RosterRepository};

/// Delete team use case - members return to the pool with their sold price
/// cleared, in the same transaction
pub struct DeleteTeam<R: RosterRepository> {
    roster_repo: Arc<R>,
}

impl<R: RosterRepository> DeleteTeam<R> {
    pub fn new(roster_repo: Arc<R>) -> Self {
        Self { roster_repo }
    }

    pub async fn execute(&self, team_id: &str) -> Result<(), DeleteTeamError> {
        if !self.roster_repo.delete_team_cascade(team_id).await? {
            return Err(DeleteTeamError::TeamNotFound);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteTeamError {
    #[error("Team not found")]
    TeamNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
