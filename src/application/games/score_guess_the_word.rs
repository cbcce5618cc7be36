use std::sync::Arc;

use crate::domain::entities::Team;
use crate::domain::repositories::{RepositoryError, TeamRepository, TeamUpdate};
use crate::domain::services::scoring;

/// Guess-the-word score input
pub struct ScoreGuessTheWordInput {
    pub team_id: String,
    pub correct_count: u32,
}

/// Guess-the-word score output
pub struct ScoreGuessTheWordOutput {
    pub delta: i64,
    pub team: Team,
}

/// Guess-the-word score applier. Each team gets a fixed number of rounds;
/// a full sweep is worth 30 instead of 25.
pub struct ScoreGuessTheWord<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> ScoreGuessTheWord<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(
        &self,
        input: ScoreGuessTheWordInput,
    ) -> Result<ScoreGuessTheWordOutput, ScoreGuessTheWordError> {
        if input.correct_count > scoring::THROWS_PER_ROUND {
            return Err(ScoreGuessTheWordError::Validation(format!(
                "Correct count must be between 0 and {}",
                scoring::THROWS_PER_ROUND
            )));
        }

        let team = self
            .team_repo
            .find_by_id(&input.team_id)
            .await?
            .ok_or(ScoreGuessTheWordError::TeamNotFound)?;

        if team.guess_the_word_rounds >= scoring::GUESS_THE_WORD_ROUND_LIMIT {
            return Err(ScoreGuessTheWordError::RoundLimitReached);
        }

        let delta = scoring::score_guess_the_word(input.correct_count);

        let team = self
            .team_repo
            .update(
                &input.team_id,
                TeamUpdate {
                    score: Some(team.score + delta),
                    guess_the_word_rounds: Some(team.guess_the_word_rounds + 1),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(ScoreGuessTheWordError::TeamNotFound)?;

        Ok(ScoreGuessTheWordOutput { delta, team })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreGuessTheWordError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Team not found")]
    TeamNotFound,
    #[error("Team has played all its rounds")]
    RoundLimitReached,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
