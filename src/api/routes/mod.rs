pub mod albums;
pub mod auction;
pub mod games;
pub mod health;
pub mod players;
pub mod reset;
pub mod settings;
pub mod teams;

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::AppState;

/// Create the main API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/players", create_players_router())
        .nest("/teams", create_teams_router())
        .nest("/settings", create_settings_router())
        .nest("/albums", create_albums_router())
        .nest("/auction", create_auction_router())
        .nest("/games", create_games_router())
        .route("/reset", post(reset::reset_all))
        .route("/health", get(health::health_handler))
        .with_state(state)
}

fn create_players_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(players::list_players)
                .post(players::create_player)
                .delete(players::delete_all_players),
        )
        .route(
            "/:playerId",
            patch(players::update_player).delete(players::delete_player),
        )
}

fn create_teams_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(teams::list_teams)
                .post(teams::create_team)
                .delete(teams::delete_all_teams),
        )
        .route(
            "/:teamId",
            patch(teams::update_team).delete(teams::delete_team),
        )
        .route("/:teamId/captain", post(teams::assign_captain))
        .route("/:teamId/score", post(teams::set_score))
}

fn create_settings_router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        get(settings::get_settings)
            .patch(settings::update_settings)
            .delete(settings::reset_settings),
    )
}

fn create_albums_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(albums::list_albums)
                .post(albums::create_album)
                .delete(albums::delete_all_albums),
        )
        .route(
            "/:albumId",
            patch(albums::update_album).delete(albums::delete_album),
        )
}

fn create_auction_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/state", get(auction::get_state))
        .route("/start", post(auction::start_auction))
        .route("/bid", post(auction::place_bid))
        .route("/sold", post(auction::confirm_sale))
        .route("/skip", post(auction::skip_player))
        .route("/finish", post(auction::finish_auction))
        .route("/reset", post(auction::reset_auction))
        .route("/trade", post(auction::trade_players))
}

fn create_games_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/guess-the-word/score", post(games::score_guess_the_word))
        .route("/dumb-charades/score", post(games::score_dumb_charades))
        .route("/beer-pong/score", post(games::score_beer_pong))
        .route("/pen-fight/score", post(games::score_pen_fight))
        .route("/popular-song/score", post(games::score_popular_song))
}

/// Error envelope shared by every handler
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            details: None,
        }
    }
}

/// Convert timestamp to ISO 8601 string
pub(crate) fn timestamp_to_rfc3339(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}

/// Deserialize helper telling a PATCH body's explicit `null` apart from an
/// absent key: absent stays `None` via `#[serde(default)]`, present-but-null
/// becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
