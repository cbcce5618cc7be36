use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::routes::{double_option, timestamp_to_rfc3339, ErrorResponse};
use crate::api::AppState;
use crate::application::roster::{AddPlayer, AddPlayerError, AddPlayerInput, DeletePlayer, DeletePlayerError};
use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, PlayerUpdate};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub photo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub team_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub sold_price: Option<Option<i64>>,
    pub is_captain: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub photo: Option<String>,
    pub team_id: Option<String>,
    pub sold_price: Option<i64>,
    pub is_captain: bool,
    pub created_at: String,
}

impl PlayerResponse {
    pub(crate) fn from_player(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            photo: player.photo,
            team_id: player.team_id,
            sold_price: player.sold_price,
            is_captain: player.is_captain,
            created_at: timestamp_to_rfc3339(player.created_at),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/players - All players in creation order
pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let players = state.player_repo.list().await.map_err(|e| {
        tracing::error!("Failed to fetch players: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to fetch players", "FETCH_PLAYERS_ERROR")),
        )
    })?;

    Ok(Json(players.into_iter().map(PlayerResponse::from_player).collect()))
}

/// POST /api/players - Register a new player
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = AddPlayer::new(state.player_repo.clone());
    let player = use_case
        .execute(AddPlayerInput {
            name: body.name,
            photo: body.photo,
        })
        .await
        .map_err(|e| match e {
            AddPlayerError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "MISSING_NAME")),
            ),
            AddPlayerError::Repository(e) => {
                tracing::error!("Failed to create player: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to create player", "CREATE_PLAYER_ERROR")),
                )
            }
        })?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from_player(player))))
}

/// PATCH /api/players/:playerId - Partial-merge update
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Json(body): Json<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, (StatusCode, Json<ErrorResponse>)> {
    let update = PlayerUpdate {
        name: body.name,
        photo: body.photo,
        team_id: body.team_id,
        sold_price: body.sold_price,
        is_captain: body.is_captain,
    };

    let player = state
        .player_repo
        .update(&player_id, update)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update player {}: {}", player_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to update player", "UPDATE_PLAYER_ERROR")),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Player not found", "PLAYER_NOT_FOUND")),
            )
        })?;

    Ok(Json(PlayerResponse::from_player(player)))
}

/// DELETE /api/players/:playerId - Remove a player, clearing any captain seat
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = DeletePlayer::new(state.roster_repo.clone());
    use_case.execute(&player_id).await.map_err(|e| match e {
        DeletePlayerError::PlayerNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Player not found", "PLAYER_NOT_FOUND")),
        ),
        DeletePlayerError::Repository(e) => {
            tracing::error!("Failed to delete player {}: {}", player_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to delete player", "DELETE_PLAYER_ERROR")),
            )
        }
    })?;

    Ok(Json(serde_json::json!({
        "message": "Player deleted",
        "id": player_id,
    })))
}

/// DELETE /api/players - Bulk reset
pub async fn delete_all_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.player_repo.delete_all().await.map_err(|e| {
        tracing::error!("Failed to delete players: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete players", "DELETE_PLAYERS_ERROR")),
        )
    })?;

    Ok(Json(serde_json::json!({ "message": "All players deleted" })))
}
