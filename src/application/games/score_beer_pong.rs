use std::sync::Arc;

use crate::domain::entities::Team;
use crate::domain::repositories::{
    PlayerRepository, RepositoryError, TeamRepository, TeamUpdate,
};
use crate::domain::services::scoring;

/// Beer-pong score input
pub struct ScoreBeerPongInput {
    pub team_id: String,
    pub player_id: String,
    pub correct_throws: u32,
}

/// Beer-pong score output
pub struct ScoreBeerPongOutput {
    pub delta: i64,
    pub team: Team,
}

/// Beer-pong score applier. Every team member throws once per session; the
/// played-player set guards against scoring the same player twice, and that
/// guard is enforced here rather than trusted to the client.
pub struct ScoreBeerPong<P: PlayerRepository, T: TeamRepository> {
    player_repo: Arc<P>,
    team_repo: Arc<T>,
}

impl<P: PlayerRepository, T: TeamRepository> ScoreBeerPong<P, T> {
    pub fn new(player_repo: Arc<P>, team_repo: Arc<T>) -> Self {
        Self {
            player_repo,
            team_repo,
        }
    }

    pub async fn execute(
        &self,
        input: ScoreBeerPongInput,
    ) -> Result<ScoreBeerPongOutput, ScoreBeerPongError> {
        if input.correct_throws > scoring::THROWS_PER_ROUND {
            return Err(ScoreBeerPongError::Validation(format!(
                "Correct throws must be between 0 and {}",
                scoring::THROWS_PER_ROUND
            )));
        }

        let team = self
            .team_repo
            .find_by_id(&input.team_id)
            .await?
            .ok_or(ScoreBeerPongError::TeamNotFound)?;

        let player = self
            .player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(ScoreBeerPongError::PlayerNotFound)?;

        if player.team_id.as_deref() != Some(input.team_id.as_str()) {
            return Err(ScoreBeerPongError::Validation(
                "Player is not on this team".into(),
            ));
        }

        if team.has_played_beer_pong(&input.player_id) {
            return Err(ScoreBeerPongError::PlayerAlreadyScored);
        }

        let delta = scoring::score_beer_pong_throws(input.correct_throws);

        let team = self
            .team_repo
            .update(
                &input.team_id,
                TeamUpdate {
                    score: Some(team.score + delta),
                    beer_pong_players_played: Some(team.beer_pong_players_played + 1),
                    beer_pong_total_score: Some(team.beer_pong_total_score + delta),
                    beer_pong_add_player_id: Some(input.player_id.clone()),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(ScoreBeerPongError::TeamNotFound)?;

        Ok(ScoreBeerPongOutput { delta, team })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreBeerPongError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Team not found")]
    TeamNotFound,
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Player has already been scored this session")]
    PlayerAlreadyScored,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
