use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::ErrorResponse;
use crate::api::AppState;
use crate::domain::entities::{AuctionStatus, Settings};
use crate::domain::repositories::{SettingsRepository, SettingsUpdate};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub base_price: Option<i64>,
    pub bid_increment: Option<i64>,
    pub auction_status: Option<String>,
    pub current_player_index: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub base_price: i64,
    pub bid_increment: i64,
    pub auction_status: String,
    pub current_player_index: u32,
}

impl SettingsResponse {
    pub(crate) fn from_settings(settings: Settings) -> Self {
        Self {
            base_price: settings.base_price,
            bid_increment: settings.bid_increment,
            auction_status: settings.auction_status.as_str().to_string(),
            current_player_index: settings.current_player_index,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/settings - The singleton, created with defaults when absent
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let settings = state.settings_repo.get_or_create().await.map_err(|e| {
        tracing::error!("Failed to fetch settings: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to fetch settings", "FETCH_SETTINGS_ERROR")),
        )
    })?;

    Ok(Json(SettingsResponse::from_settings(settings)))
}

/// PATCH /api/settings - Partial-merge update
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let auction_status = match body.auction_status.as_deref() {
        Some(raw) => Some(AuctionStatus::from_str(raw).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    format!("Unknown auction status '{}'", raw),
                    "INVALID_STATUS",
                )),
            )
        })?),
        None => None,
    };

    let settings = state
        .settings_repo
        .update(SettingsUpdate {
            base_price: body.base_price,
            bid_increment: body.bid_increment,
            auction_status,
            current_player_index: body.current_player_index,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to update settings: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to update settings", "UPDATE_SETTINGS_ERROR")),
            )
        })?;

    Ok(Json(SettingsResponse::from_settings(settings)))
}

/// DELETE /api/settings - Reset to defaults
pub async fn reset_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let settings = state.settings_repo.reset().await.map_err(|e| {
        tracing::error!("Failed to reset settings: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to reset settings", "RESET_SETTINGS_ERROR")),
        )
    })?;

    Ok(Json(SettingsResponse::from_settings(settings)))
}
