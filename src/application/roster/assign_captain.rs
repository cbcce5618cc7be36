use std::sync::Arc;

use crate::domain::entities::{Player, Team};
use crate::domain::repositories::{
    PlayerRepository, RepositoryError, RosterRepository, TeamRepository,
};

/// Assign captain input
pub struct AssignCaptainInput {
    pub team_id: String,
    pub player_id: String,
}

/// Assign captain output
pub struct AssignCaptainOutput {
    pub team: Team,
    pub captain: Player,
}

/// Assign captain use case. Pins the player to the team ahead of the
/// auction, demoting the team's previous captain if the seat changes hands.
pub struct AssignCaptain<P: PlayerRepository, T: TeamRepository, R: RosterRepository> {
    player_repo: Arc<P>,
    team_repo: Arc<T>,
    roster_repo: Arc<R>,
}

impl<P: PlayerRepository, T: TeamRepository, R: RosterRepository> AssignCaptain<P, T, R> {
    pub fn new(player_repo: Arc<P>, team_repo: Arc<T>, roster_repo: Arc<R>) -> Self {
        Self {
            player_repo,
            team_repo,
            roster_repo,
        }
    }

    pub async fn execute(
        &self,
        input: AssignCaptainInput,
    ) -> Result<AssignCaptainOutput, AssignCaptainError> {
        let team = self
            .team_repo
            .find_by_id(&input.team_id)
            .await?
            .ok_or(AssignCaptainError::TeamNotFound)?;

        self.player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(AssignCaptainError::PlayerNotFound)?;

        // At most one team may claim a given player as captain
        let teams = self.team_repo.list().await?;
        if teams
            .iter()
            .any(|t| t.id != team.id && t.captain_id.as_deref() == Some(input.player_id.as_str()))
        {
            return Err(AssignCaptainError::AlreadyCaptainElsewhere);
        }

        self.roster_repo
            .assign_captain(&input.team_id, &input.player_id)
            .await?;

        // Re-read so the output reflects the settled state
        let team = self
            .team_repo
            .find_by_id(&input.team_id)
            .await?
            .ok_or(AssignCaptainError::TeamNotFound)?;
        let captain = self
            .player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(AssignCaptainError::PlayerNotFound)?;

        Ok(AssignCaptainOutput { team, captain })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssignCaptainError {
    #[error("Team not found")]
    TeamNotFound,
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Player is already captain of another team")]
    AlreadyCaptainElsewhere,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
