use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::api::routes::ErrorResponse;
use crate::api::AppState;
use crate::application::roster::ResetAll;

/// POST /api/reset - Wipe the whole party session
pub async fn reset_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ResetAll::new(
        state.player_repo.clone(),
        state.team_repo.clone(),
        state.album_repo.clone(),
        state.settings_repo.clone(),
    );
    use_case.execute().await.map_err(|e| {
        tracing::error!("Failed to reset party: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to reset party", "RESET_ERROR")),
        )
    })?;

    state.bid_ladder.write().await.clear();

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Party reset",
    })))
}
