use std::sync::Arc;

use crate::domain::entities::Team;
use crate::domain::repositories::{RepositoryError, TeamRepository, TeamUpdate};

/// Set team score input
pub struct SetTeamScoreInput {
    pub team_id: String,
    pub score: i64,
}

/// Scoreboard manual adjust - sets the score to an absolute value, floored
/// at zero. Mini-game deltas do not go through here and are not clamped.
pub struct SetTeamScore<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> SetTeamScore<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, input: SetTeamScoreInput) -> Result<Team, SetTeamScoreError> {
        let team = self
            .team_repo
            .update(
                &input.team_id,
                TeamUpdate {
                    score: Some(input.score.max(0)),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(SetTeamScoreError::TeamNotFound)?;

        Ok(team)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetTeamScoreError {
    #[error("Team not found")]
    TeamNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
