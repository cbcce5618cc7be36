use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::routes::players::PlayerResponse;
use crate::api::routes::{double_option, timestamp_to_rfc3339, ErrorResponse};
use crate::api::AppState;
use crate::application::games::{SetTeamScore, SetTeamScoreError, SetTeamScoreInput};
use crate::application::roster::{
    AssignCaptain, AssignCaptainError, AssignCaptainInput, CreateTeam, CreateTeamError,
    CreateTeamInput, DeleteTeam, DeleteTeamError,
};
use crate::domain::entities::Team;
use crate::domain::repositories::{TeamRepository, TeamUpdate};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    pub color: Option<String>,
    pub budget: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub captain_id: Option<Option<String>>,
    pub budget: Option<i64>,
    pub score: Option<i64>,
    pub guess_the_word_rounds: Option<u32>,
    pub dumb_charades_rounds: Option<u32>,
    pub pictionary_rounds: Option<u32>,
    pub pen_fight_rounds: Option<u32>,
    pub beer_pong_rounds: Option<u32>,
    pub beer_pong_players_played: Option<u32>,
    pub beer_pong_total_score: Option<i64>,
    /// Appended to the played set, not a field overwrite
    pub beer_pong_add_player_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCaptainRequest {
    pub player_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScoreRequest {
    pub score: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    pub captain_id: Option<String>,
    pub budget: i64,
    pub score: i64,
    pub guess_the_word_rounds: u32,
    pub dumb_charades_rounds: u32,
    pub pictionary_rounds: u32,
    pub pen_fight_rounds: u32,
    pub beer_pong_rounds: u32,
    pub beer_pong_players_played: u32,
    pub beer_pong_played_player_ids: Vec<String>,
    pub beer_pong_total_score: i64,
    pub created_at: String,
}

impl TeamResponse {
    pub(crate) fn from_team(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            color: team.color,
            captain_id: team.captain_id,
            budget: team.budget,
            score: team.score,
            guess_the_word_rounds: team.guess_the_word_rounds,
            dumb_charades_rounds: team.dumb_charades_rounds,
            pictionary_rounds: team.pictionary_rounds,
            pen_fight_rounds: team.pen_fight_rounds,
            beer_pong_rounds: team.beer_pong_rounds,
            beer_pong_players_played: team.beer_pong_players_played,
            beer_pong_played_player_ids: team.beer_pong_played_player_ids,
            beer_pong_total_score: team.beer_pong_total_score,
            created_at: timestamp_to_rfc3339(team.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCaptainResponse {
    pub success: bool,
    pub team: TeamResponse,
    pub captain: PlayerResponse,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/teams - All teams in creation order
pub async fn list_teams(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeamResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let teams = state.team_repo.list().await.map_err(|e| {
        tracing::error!("Failed to fetch teams: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to fetch teams", "FETCH_TEAMS_ERROR")),
        )
    })?;

    Ok(Json(teams.into_iter().map(TeamResponse::from_team).collect()))
}

/// POST /api/teams - Create a team
pub async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateTeam::new(state.team_repo.clone());
    let team = use_case
        .execute(CreateTeamInput {
            name: body.name,
            color: body.color,
            budget: body.budget,
        })
        .await
        .map_err(|e| match e {
            CreateTeamError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "MISSING_NAME")),
            ),
            CreateTeamError::Repository(e) => {
                tracing::error!("Failed to create team: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to create team", "CREATE_TEAM_ERROR")),
                )
            }
        })?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from_team(team))))
}

/// PATCH /api/teams/:teamId - Partial-merge update; `beerPongAddPlayerId`
/// appends to the played set instead of overwriting it
pub async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
    Json(body): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, (StatusCode, Json<ErrorResponse>)> {
    let update = TeamUpdate {
        name: body.name,
        color: body.color,
        captain_id: body.captain_id,
        budget: body.budget,
        score: body.score,
        guess_the_word_rounds: body.guess_the_word_rounds,
        dumb_charades_rounds: body.dumb_charades_rounds,
        pictionary_rounds: body.pictionary_rounds,
        pen_fight_rounds: body.pen_fight_rounds,
        beer_pong_rounds: body.beer_pong_rounds,
        beer_pong_players_played: body.beer_pong_players_played,
        beer_pong_total_score: body.beer_pong_total_score,
        beer_pong_add_player_id: body.beer_pong_add_player_id,
    };

    let team = state
        .team_repo
        .update(&team_id, update)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update team {}: {}", team_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to update team", "UPDATE_TEAM_ERROR")),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            )
        })?;

    Ok(Json(TeamResponse::from_team(team)))
}

/// DELETE /api/teams/:teamId - Remove a team, releasing its members
pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = DeleteTeam::new(state.roster_repo.clone());
    use_case.execute(&team_id).await.map_err(|e| match e {
        DeleteTeamError::TeamNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
        ),
        DeleteTeamError::Repository(e) => {
            tracing::error!("Failed to delete team {}: {}", team_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to delete team", "DELETE_TEAM_ERROR")),
            )
        }
    })?;

    Ok(Json(serde_json::json!({
        "message": "Team deleted",
        "id": team_id,
    })))
}

/// DELETE /api/teams - Bulk reset
pub async fn delete_all_teams(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.team_repo.delete_all().await.map_err(|e| {
        tracing::error!("Failed to delete teams: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete teams", "DELETE_TEAMS_ERROR")),
        )
    })?;

    Ok(Json(serde_json::json!({ "message": "All teams deleted" })))
}

/// POST /api/teams/:teamId/captain - Pin a player as the team's captain
pub async fn assign_captain(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
    Json(body): Json<AssignCaptainRequest>,
) -> Result<Json<AssignCaptainResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = AssignCaptain::new(
        state.player_repo.clone(),
        state.team_repo.clone(),
        state.roster_repo.clone(),
    );
    let result = use_case
        .execute(AssignCaptainInput {
            team_id,
            player_id: body.player_id,
        })
        .await
        .map_err(|e| match e {
            AssignCaptainError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            AssignCaptainError::PlayerNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Player not found", "PLAYER_NOT_FOUND")),
            ),
            AssignCaptainError::AlreadyCaptainElsewhere => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Player is already captain of another team",
                    "ALREADY_CAPTAIN",
                )),
            ),
            AssignCaptainError::Repository(e) => {
                tracing::error!("Failed to assign captain: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to assign captain", "ASSIGN_CAPTAIN_ERROR")),
                )
            }
        })?;

    Ok(Json(AssignCaptainResponse {
        success: true,
        team: TeamResponse::from_team(result.team),
        captain: PlayerResponse::from_player(result.captain),
    }))
}

/// POST /api/teams/:teamId/score - Scoreboard manual set, floored at zero
pub async fn set_score(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
    Json(body): Json<SetScoreRequest>,
) -> Result<Json<TeamResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SetTeamScore::new(state.team_repo.clone());
    let team = use_case
        .execute(SetTeamScoreInput {
            team_id,
            score: body.score,
        })
        .await
        .map_err(|e| match e {
            SetTeamScoreError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            SetTeamScoreError::Repository(e) => {
                tracing::error!("Failed to set team score: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to set team score", "SET_SCORE_ERROR")),
                )
            }
        })?;

    Ok(Json(TeamResponse::from_team(team)))
}
