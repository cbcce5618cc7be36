use std::sync::Arc;

use crate::domain::entities::Team;
use crate::domain::repositories::{RepositoryError, TeamRepository, TeamUpdate};
use crate::domain::services::scoring::{self, CharadesMethod, CharadesScore};

/// Dumb-charades score input
pub struct ScoreDumbCharadesInput {
    pub team_id: String,
    pub method: CharadesMethod,
    pub elapsed_seconds: u32,
    /// The 120-second timer ran out before a guess; zeroes the round
    pub timed_out: bool,
}

/// Dumb-charades score output
pub struct ScoreDumbCharadesOutput {
    pub score: CharadesScore,
    pub team: Team,
}

/// Dumb-charades score applier. No round limit - teams may keep playing.
pub struct ScoreDumbCharades<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> ScoreDumbCharades<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(
        &self,
        input: ScoreDumbCharadesInput,
    ) -> Result<ScoreDumbCharadesOutput, ScoreDumbCharadesError> {
        let team = self
            .team_repo
            .find_by_id(&input.team_id)
            .await?
            .ok_or(ScoreDumbCharadesError::TeamNotFound)?;

        let score =
            scoring::score_charades_round(input.method, input.elapsed_seconds, input.timed_out);

        let team = self
            .team_repo
            .update(
                &input.team_id,
                TeamUpdate {
                    score: Some(team.score + score.total),
                    dumb_charades_rounds: Some(team.dumb_charades_rounds + 1),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(ScoreDumbCharadesError::TeamNotFound)?;

        Ok(ScoreDumbCharadesOutput { score, team })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreDumbCharadesError {
    #[error("Team not found")]
    TeamNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
