use std::sync::Arc;

use crate::domain::repositories::{RepositoryError, RosterRepository, TeamRepository};
use crate::domain::services::scoring::{self, PenFightOutcome};

/// Slots per side in a pen-fight round
pub const PEN_FIGHT_SLOTS: usize = 3;

/// Pen-fight score input - one outcome per slot per side
pub struct ScorePenFightInput {
    pub team1_id: String,
    pub team2_id: String,
    pub team1_outcomes: Vec<PenFightOutcome>,
    pub team2_outcomes: Vec<PenFightOutcome>,
}

/// Pen-fight score output
pub struct ScorePenFightOutput {
    pub team1_delta: i64,
    pub team2_delta: i64,
}

/// Pen-fight score applier. Deltas may be negative and are applied to both
/// teams unclamped, in one transaction.
pub struct ScorePenFight<T: TeamRepository, R: RosterRepository> {
    team_repo: Arc<T>,
    roster_repo: Arc<R>,
}

impl<T: TeamRepository, R: RosterRepository> ScorePenFight<T, R> {
    pub fn new(team_repo: Arc<T>, roster_repo: Arc<R>) -> Self {
        Self {
            team_repo,
            roster_repo,
        }
    }

    pub async fn execute(
        &self,
        input: ScorePenFightInput,
    ) -> Result<ScorePenFightOutput, ScorePenFightError> {
        if input.team1_id == input.team2_id {
            return Err(ScorePenFightError::Validation(
                "A team cannot fight itself".into(),
            ));
        }
        if input.team1_outcomes.len() != PEN_FIGHT_SLOTS
            || input.team2_outcomes.len() != PEN_FIGHT_SLOTS
        {
            return Err(ScorePenFightError::Validation(format!(
                "Each side needs exactly {} outcomes",
                PEN_FIGHT_SLOTS
            )));
        }

        for team_id in [&input.team1_id, &input.team2_id] {
            self.team_repo
                .find_by_id(team_id)
                .await?
                .ok_or(ScorePenFightError::TeamNotFound)?;
        }

        let (team1_delta, team2_delta) =
            scoring::score_pen_fight(&input.team1_outcomes, &input.team2_outcomes);

        self.roster_repo
            .apply_pen_fight(&input.team1_id, team1_delta, &input.team2_id, team2_delta)
            .await?;

        Ok(ScorePenFightOutput {
            team1_delta,
            team2_delta,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScorePenFightError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Team not found")]
    TeamNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
