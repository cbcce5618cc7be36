use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::players::PlayerResponse;
use crate::api::routes::settings::SettingsResponse;
use crate::api::routes::ErrorResponse;
use crate::api::AppState;
use crate::application::auction::{
    ConfirmSale, ConfirmSaleError, FinishAuction, GetAuctionState, PlaceBid, PlaceBidError,
    PlaceBidInput, ResetAuction, SkipPlayer, StartAuction, StartAuctionError, TradePlayers,
    TradePlayersError, TradePlayersInput,
};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidRequest {
    pub team_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePlayersRequest {
    pub player1_id: String,
    pub player2_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionStateResponse {
    pub auction_status: String,
    pub base_price: i64,
    pub bid_increment: i64,
    pub current_player_index: u32,
    pub current_player: Option<PlayerResponse>,
    pub unsold_players: Vec<PlayerResponse>,
    pub players_left: usize,
    pub next_bid: i64,
    pub current_bid: Option<i64>,
    pub highest_bidder_id: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidResponse {
    pub success: bool,
    pub player_id: String,
    pub team_id: String,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSaleResponse {
    pub success: bool,
    pub player_id: String,
    pub team_id: String,
    pub price: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipPlayerResponse {
    pub success: bool,
    pub current_player_index: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePlayersResponse {
    pub success: bool,
    pub player1: PlayerResponse,
    pub player2: PlayerResponse,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/auction/state - Everything the auction view renders
pub async fn get_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AuctionStateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GetAuctionState::new(
        state.player_repo.clone(),
        state.settings_repo.clone(),
        state.bid_ladder.clone(),
    );
    let output = use_case.execute().await.map_err(|e| {
        tracing::error!("Failed to load auction state: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to load auction state", "AUCTION_STATE_ERROR")),
        )
    })?;

    Ok(Json(AuctionStateResponse {
        auction_status: output.settings.auction_status.as_str().to_string(),
        base_price: output.settings.base_price,
        bid_increment: output.settings.bid_increment,
        current_player_index: output.settings.current_player_index,
        current_player: output.current_player.map(PlayerResponse::from_player),
        players_left: output.queue.len(),
        unsold_players: output
            .queue
            .into_iter()
            .map(PlayerResponse::from_player)
            .collect(),
        next_bid: output.next_bid,
        current_bid: output.current_bid,
        highest_bidder_id: output.highest_bidder_id,
        completed: output.completed,
    }))
}

/// POST /api/auction/start - Begin the auction once every team has a captain
pub async fn start_auction(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = StartAuction::new(state.team_repo.clone(), state.settings_repo.clone());
    let settings = use_case.execute().await.map_err(|e| match e {
        StartAuctionError::NotEnoughTeams => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("At least 2 teams are required", "NOT_ENOUGH_TEAMS")),
        ),
        StartAuctionError::MissingCaptains => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("All teams need a captain", "MISSING_CAPTAINS")),
        ),
        StartAuctionError::AlreadyCompleted => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("Auction is already completed", "AUCTION_COMPLETED")),
        ),
        StartAuctionError::Repository(e) => {
            tracing::error!("Failed to start auction: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to start auction", "START_AUCTION_ERROR")),
            )
        }
    })?;

    Ok(Json(SettingsResponse::from_settings(settings)))
}

/// POST /api/auction/bid - Raise the ladder for the player on the block
pub async fn place_bid(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlaceBidRequest>,
) -> Result<Json<PlaceBidResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = PlaceBid::new(
        state.player_repo.clone(),
        state.team_repo.clone(),
        state.settings_repo.clone(),
        state.bid_ladder.clone(),
    );
    let output = use_case
        .execute(PlaceBidInput {
            team_id: body.team_id,
        })
        .await
        .map_err(|e| match e {
            PlaceBidError::AuctionCompleted => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("Auction is already completed", "AUCTION_COMPLETED")),
            ),
            PlaceBidError::NoPlayerOnBlock => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("No player is up for auction", "NO_PLAYER_ON_BLOCK")),
            ),
            PlaceBidError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            PlaceBidError::AlreadyHighestBidder => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Team is already the highest bidder",
                    "ALREADY_HIGHEST_BIDDER",
                )),
            ),
            PlaceBidError::InsufficientBudget { required, budget } => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    format!("Bid of {} exceeds remaining budget {}", required, budget),
                    "INSUFFICIENT_BUDGET",
                )),
            ),
            PlaceBidError::Repository(e) => {
                tracing::error!("Failed to place bid: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to place bid", "PLACE_BID_ERROR")),
                )
            }
        })?;

    Ok(Json(PlaceBidResponse {
        success: true,
        player_id: output.player_id,
        team_id: output.team_id,
        amount: output.amount,
    }))
}

/// POST /api/auction/sold - Settle the standing bid
pub async fn confirm_sale(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConfirmSaleResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ConfirmSale::new(state.roster_repo.clone(), state.bid_ladder.clone());
    let output = use_case.execute().await.map_err(|e| match e {
        ConfirmSaleError::NoStandingBid => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("No standing bid to settle", "NO_STANDING_BID")),
        ),
        ConfirmSaleError::Repository(e) => {
            tracing::error!("Failed to settle sale: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to settle sale", "CONFIRM_SALE_ERROR")),
            )
        }
    })?;

    Ok(Json(ConfirmSaleResponse {
        success: true,
        player_id: output.player_id,
        team_id: output.team_id,
        price: output.price,
    }))
}

/// POST /api/auction/skip - Advance the rotating cursor by one
pub async fn skip_player(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SkipPlayerResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SkipPlayer::new(
        state.player_repo.clone(),
        state.settings_repo.clone(),
        state.bid_ladder.clone(),
    );
    let output = use_case.execute().await.map_err(|e| {
        tracing::error!("Failed to skip player: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to skip player", "SKIP_PLAYER_ERROR")),
        )
    })?;

    Ok(Json(SkipPlayerResponse {
        success: true,
        current_player_index: output.current_player_index,
    }))
}

/// POST /api/auction/finish - End the auction early
pub async fn finish_auction(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = FinishAuction::new(state.settings_repo.clone(), state.bid_ladder.clone());
    let settings = use_case.execute().await.map_err(|e| {
        tracing::error!("Failed to finish auction: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to finish auction", "FINISH_AUCTION_ERROR")),
        )
    })?;

    Ok(Json(SettingsResponse::from_settings(settings)))
}

/// POST /api/auction/reset - Return the roster to its pre-auction state
pub async fn reset_auction(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ResetAuction::new(state.roster_repo.clone(), state.bid_ladder.clone());
    use_case.execute().await.map_err(|e| {
        tracing::error!("Failed to reset auction: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to reset auction", "RESET_AUCTION_ERROR")),
        )
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Auction reset",
    })))
}

/// POST /api/auction/trade - Swap two sold, non-captain players
pub async fn trade_players(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TradePlayersRequest>,
) -> Result<Json<TradePlayersResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = TradePlayers::new(state.player_repo.clone(), state.roster_repo.clone());
    let output = use_case
        .execute(TradePlayersInput {
            player1_id: body.player1_id,
            player2_id: body.player2_id,
        })
        .await
        .map_err(|e| match e {
            TradePlayersError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "INVALID_TRADE")),
            ),
            TradePlayersError::PlayerNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Player not found", "PLAYER_NOT_FOUND")),
            ),
            TradePlayersError::CaptainNotTradeable => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("Captains cannot be traded", "CAPTAIN_NOT_TRADEABLE")),
            ),
            TradePlayersError::Repository(e) => {
                tracing::error!("Failed to trade players: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to trade players", "TRADE_ERROR")),
                )
            }
        })?;

    Ok(Json(TradePlayersResponse {
        success: true,
        player1: PlayerResponse::from_player(output.player1),
        player2: PlayerResponse::from_player(output.player2),
    }))
}
