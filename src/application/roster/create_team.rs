use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Team, DEFAULT_BUDGET, DEFAULT_COLOR};
use crate::domain::repositories::{RepositoryError, TeamRepository};

/// Create team input
pub struct CreateTeamInput {
    pub name: String,
    pub color: Option<String>,
    pub budget: Option<i64>,
}

/// Create team use case
pub struct CreateTeam<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> CreateTeam<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, input: CreateTeamInput) -> Result<Team, CreateTeamError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CreateTeamError::Validation("Team name is required".into()));
        }

        let team = Team::new(
            Uuid::new_v4().to_string(),
            name,
            input.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            input.budget.unwrap_or(DEFAULT_BUDGET),
        );
        self.team_repo.save(&team).await?;

        Ok(team)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTeamError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
