//! API integration tests for the Party Night backend.
//!
//! Drives the real router against an in-memory SQLite database: entity CRUD,
//! the auction settlement flow, trades, resets and every mini-game applier.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use partynight_backend::api;
use partynight_backend::infrastructure::app_state::AppState;

/// Helper to create a test application
async fn create_test_app() -> Router {
    std::env::set_var("DATABASE_URL", "sqlite::memory:");

    let state = AppState::new().await.expect("Failed to create app state");
    let state = Arc::new(state);

    Router::new()
        .nest("/api", api::routes::create_api_router(state.clone()))
        .with_state(state)
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    let request = match body {
        Some(value) => builder
            .body(Body::from(serde_json::to_string(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, "GET", path, None).await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", path, Some(body)).await
}

async fn patch(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PATCH", path, Some(body)).await
}

async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, "DELETE", path, None).await
}

// ============================================================================
// Setup helpers
// ============================================================================

async fn create_player(app: &Router, name: &str) -> String {
    let (status, body) = post(app, "/api/players", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_team(app: &Router, name: &str) -> String {
    let (status, body) = post(app, "/api/teams", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_team_with_budget(app: &Router, name: &str, budget: i64) -> String {
    let (status, body) =
        post(app, "/api/teams", json!({ "name": name, "budget": budget })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn assign_captain(app: &Router, team_id: &str, player_id: &str) {
    let (status, _) = post(
        app,
        &format!("/api/teams/{}/captain", team_id),
        json!({ "playerId": player_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

/// Two captained teams plus `pool` unsold players; returns (team ids, pool ids)
async fn auction_fixture(app: &Router, pool: usize) -> (Vec<String>, Vec<String>) {
    let team_a = create_team(app, "Red").await;
    let team_b = create_team(app, "Blue").await;

    let cap_a = create_player(app, "Captain A").await;
    let cap_b = create_player(app, "Captain B").await;
    assign_captain(app, &team_a, &cap_a).await;
    assign_captain(app, &team_b, &cap_b).await;

    let mut pool_ids = Vec::new();
    for i in 0..pool {
        pool_ids.push(create_player(app, &format!("Pool {}", i + 1)).await);
    }

    (vec![team_a, team_b], pool_ids)
}

async fn fetch_player(app: &Router, player_id: &str) -> Value {
    let (status, players) = get(app, "/api/players").await;
    assert_eq!(status, StatusCode::OK);
    players
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == player_id)
        .cloned()
        .expect("player in listing")
}

async fn fetch_team(app: &Router, team_id: &str) -> Value {
    let (status, teams) = get(app, "/api/teams").await;
    assert_eq!(status, StatusCode::OK);
    teams
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == team_id)
        .cloned()
        .expect("team in listing")
}

// ============================================================================
// Entity CRUD
// ============================================================================

#[tokio::test]
async fn test_create_player_defaults() {
    let app = create_test_app().await;

    let (status, body) = post(&app, "/api/players", json!({ "name": "  Asha  " })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["teamId"], Value::Null);
    assert_eq!(body["soldPrice"], Value::Null);
    assert_eq!(body["isCaptain"], false);
    assert!(body["createdAt"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn test_create_player_rejects_blank_name() {
    let app = create_test_app().await;

    let (status, body) = post(&app, "/api/players", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_NAME");
}

#[tokio::test]
async fn test_player_update_and_delete() {
    let app = create_test_app().await;
    let id = create_player(&app, "Asha").await;

    let (status, body) =
        patch(&app, &format!("/api/players/{}", id), json!({ "name": "Nina" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nina");

    // explicit null clears the photo, absent keys leave fields alone
    let (status, body) =
        patch(&app, &format!("/api/players/{}", id), json!({ "photo": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["photo"], Value::Null);
    assert_eq!(body["name"], "Nina");

    let (status, body) = delete(&app, &format!("/api/players/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, body) = delete(&app, &format!("/api/players/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PLAYER_NOT_FOUND");
}

#[tokio::test]
async fn test_players_listed_in_creation_order() {
    let app = create_test_app().await;
    let first = create_player(&app, "First").await;
    let second = create_player(&app, "Second").await;
    let third = create_player(&app, "Third").await;

    let (status, players) = get(&app, "/api/players").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = players
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str(), third.as_str()]);
}

#[tokio::test]
async fn test_create_team_defaults() {
    let app = create_test_app().await;

    let (status, body) = post(&app, "/api/teams", json!({ "name": "Red" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["budget"], 1000);
    assert_eq!(body["color"], "#3B82F6");
    assert_eq!(body["score"], 0);
    assert_eq!(body["captainId"], Value::Null);
    assert_eq!(body["guessTheWordRounds"], 0);
    assert_eq!(body["beerPongPlayedPlayerIds"], json!([]));
}

#[tokio::test]
async fn test_team_patch_appends_played_player_ids() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;

    let (status, body) = patch(
        &app,
        &format!("/api/teams/{}", team_id),
        json!({ "beerPongAddPlayerId": "a" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["beerPongPlayedPlayerIds"], json!(["a"]));

    let (status, body) = patch(
        &app,
        &format!("/api/teams/{}", team_id),
        json!({ "beerPongAddPlayerId": "b", "score": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["beerPongPlayedPlayerIds"], json!(["a", "b"]));
    assert_eq!(body["score"], 10);
}

#[tokio::test]
async fn test_delete_team_releases_members() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;
    let player_id = create_player(&app, "Asha").await;

    patch(
        &app,
        &format!("/api/players/{}", player_id),
        json!({ "teamId": team_id, "soldPrice": 250 }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/teams/{}", team_id)).await;
    assert_eq!(status, StatusCode::OK);

    let player = fetch_player(&app, &player_id).await;
    assert_eq!(player["teamId"], Value::Null);
    assert_eq!(player["soldPrice"], Value::Null);
}

#[tokio::test]
async fn test_settings_lazy_defaults_and_reset() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["basePrice"], 100);
    assert_eq!(body["bidIncrement"], 10);
    assert_eq!(body["auctionStatus"], "pending");
    assert_eq!(body["currentPlayerIndex"], 0);

    let (status, body) = patch(&app, "/api/settings", json!({ "basePrice": 200 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["basePrice"], 200);
    assert_eq!(body["bidIncrement"], 10);

    let (status, body) = delete(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["basePrice"], 100);
}

#[tokio::test]
async fn test_settings_rejects_unknown_status() {
    let app = create_test_app().await;

    let (status, body) =
        patch(&app, "/api/settings", json!({ "auctionStatus": "paused" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_STATUS");
}

// ============================================================================
// Captains
// ============================================================================

#[tokio::test]
async fn test_assign_captain_pins_player_to_team() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;
    let player_id = create_player(&app, "Asha").await;

    let (status, body) = post(
        &app,
        &format!("/api/teams/{}/captain", team_id),
        json!({ "playerId": player_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["captain"]["isCaptain"], true);
    assert_eq!(body["captain"]["teamId"], team_id.as_str());
    assert_eq!(body["team"]["captainId"], player_id.as_str());
}

#[tokio::test]
async fn test_reassigning_captain_demotes_previous() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;
    let first = create_player(&app, "Asha").await;
    let second = create_player(&app, "Nina").await;

    assign_captain(&app, &team_id, &first).await;
    assign_captain(&app, &team_id, &second).await;

    let previous = fetch_player(&app, &first).await;
    assert_eq!(previous["isCaptain"], false);

    let team = fetch_team(&app, &team_id).await;
    assert_eq!(team["captainId"], second.as_str());
}

#[tokio::test]
async fn test_captain_of_another_team_is_rejected() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;
    let team_b = create_team(&app, "Blue").await;
    let player_id = create_player(&app, "Asha").await;

    assign_captain(&app, &team_a, &player_id).await;

    let (status, body) = post(
        &app,
        &format!("/api/teams/{}/captain", team_b),
        json!({ "playerId": player_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_CAPTAIN");
}

// ============================================================================
// Auction flow
// ============================================================================

#[tokio::test]
async fn test_start_auction_requires_two_captained_teams() {
    let app = create_test_app().await;

    create_team(&app, "Red").await;
    let (status, body) = post(&app, "/api/auction/start", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_ENOUGH_TEAMS");

    create_team(&app, "Blue").await;
    let (status, body) = post(&app, "/api/auction/start", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CAPTAINS");
}

#[tokio::test]
async fn test_bidding_and_sale_settlement() {
    let app = create_test_app().await;
    let (teams, pool) = auction_fixture(&app, 2).await;

    let (status, body) = post(&app, "/api/auction/start", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["auctionStatus"], "in-progress");

    // captains are excluded from the block; the first pool player is up
    let (status, state) = get(&app, "/api/auction/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["currentPlayer"]["id"], pool[0].as_str());
    assert_eq!(state["playersLeft"], 2);
    assert_eq!(state["nextBid"], 100);

    // opening bid lands at base price
    let (status, body) =
        post(&app, "/api/auction/bid", json!({ "teamId": teams[0] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 100);

    // the highest bidder cannot outbid itself
    let (status, body) =
        post(&app, "/api/auction/bid", json!({ "teamId": teams[0] })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_HIGHEST_BIDDER");

    let (status, body) =
        post(&app, "/api/auction/bid", json!({ "teamId": teams[1] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 110);

    let (status, body) = post(&app, "/api/auction/sold", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["playerId"], pool[0].as_str());
    assert_eq!(body["teamId"], teams[1].as_str());
    assert_eq!(body["price"], 110);

    // the sale debits exactly the hammer price and pins the player
    let player = fetch_player(&app, &pool[0]).await;
    assert_eq!(player["teamId"], teams[1].as_str());
    assert_eq!(player["soldPrice"], 110);

    let team = fetch_team(&app, &teams[1]).await;
    assert_eq!(team["budget"], 890);

    let (_, state) = get(&app, "/api/auction/state").await;
    assert_eq!(state["playersLeft"], 1);
    assert_eq!(state["currentPlayer"]["id"], pool[1].as_str());

    // no new bid yet, so there is nothing to settle
    let (status, body) = post(&app, "/api/auction/sold", json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NO_STANDING_BID");
}

#[tokio::test]
async fn test_bid_over_budget_is_rejected_without_state_change() {
    let app = create_test_app().await;
    let poor = create_team_with_budget(&app, "Red", 105).await;
    let rich = create_team(&app, "Blue").await;
    let cap_a = create_player(&app, "Captain A").await;
    let cap_b = create_player(&app, "Captain B").await;
    assign_captain(&app, &poor, &cap_a).await;
    assign_captain(&app, &rich, &cap_b).await;
    create_player(&app, "Pool 1").await;

    let (status, _) = post(&app, "/api/auction/bid", json!({ "teamId": poor })).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post(&app, "/api/auction/bid", json!({ "teamId": rich })).await;
    assert_eq!(status, StatusCode::OK);

    // next rung would be 120, above the 105 budget
    let (status, body) = post(&app, "/api/auction/bid", json!({ "teamId": poor })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INSUFFICIENT_BUDGET");

    let (_, state) = get(&app, "/api/auction/state").await;
    assert_eq!(state["currentBid"], 110);
    assert_eq!(state["highestBidderId"], rich.as_str());
}

#[tokio::test]
async fn test_skip_rotates_and_wraps() {
    let app = create_test_app().await;
    auction_fixture(&app, 3).await;

    for expected in [1, 2, 0] {
        let (status, body) = post(&app, "/api/auction/skip", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPlayerIndex"], expected);
    }
}

#[tokio::test]
async fn test_skip_discards_standing_bid() {
    let app = create_test_app().await;
    let (teams, _) = auction_fixture(&app, 2).await;

    post(&app, "/api/auction/bid", json!({ "teamId": teams[0] })).await;
    post(&app, "/api/auction/skip", json!({})).await;

    let (_, state) = get(&app, "/api/auction/state").await;
    assert_eq!(state["currentBid"], Value::Null);
    assert_eq!(state["nextBid"], 100);
}

#[tokio::test]
async fn test_finish_auction_early() {
    let app = create_test_app().await;
    auction_fixture(&app, 2).await;

    let (status, body) = post(&app, "/api/auction/finish", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["auctionStatus"], "completed");

    let (_, state) = get(&app, "/api/auction/state").await;
    assert_eq!(state["completed"], true);
    assert_eq!(state["playersLeft"], 2);

    let (status, body) = post(
        &app,
        "/api/auction/bid",
        json!({ "teamId": "irrelevant" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "AUCTION_COMPLETED");
}

#[tokio::test]
async fn test_auction_completes_when_pool_empties() {
    let app = create_test_app().await;
    let (teams, _) = auction_fixture(&app, 1).await;

    post(&app, "/api/auction/bid", json!({ "teamId": teams[0] })).await;
    post(&app, "/api/auction/sold", json!({})).await;

    let (_, state) = get(&app, "/api/auction/state").await;
    assert_eq!(state["playersLeft"], 0);
    assert_eq!(state["completed"], true);
    assert_eq!(state["currentPlayer"], Value::Null);
}

#[tokio::test]
async fn test_reset_auction_restores_everything() {
    let app = create_test_app().await;
    let (teams, pool) = auction_fixture(&app, 2).await;

    post(&app, "/api/auction/start", json!({})).await;
    post(&app, "/api/auction/bid", json!({ "teamId": teams[0] })).await;
    post(&app, "/api/auction/sold", json!({})).await;
    post(&app, "/api/auction/skip", json!({})).await;

    let (status, _) = post(&app, "/api/auction/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let sold = fetch_player(&app, &pool[0]).await;
    assert_eq!(sold["teamId"], Value::Null);
    assert_eq!(sold["soldPrice"], Value::Null);

    for team_id in &teams {
        let team = fetch_team(&app, team_id).await;
        assert_eq!(team["budget"], 1000);
        // captains stay pinned through a reset
        assert!(team["captainId"].is_string());
    }

    let (_, settings) = get(&app, "/api/settings").await;
    assert_eq!(settings["auctionStatus"], "pending");
    assert_eq!(settings["currentPlayerIndex"], 0);
}

// ============================================================================
// Trades
// ============================================================================

#[tokio::test]
async fn test_trade_swaps_teams_and_keeps_prices() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;
    let team_b = create_team(&app, "Blue").await;
    let p1 = create_player(&app, "Asha").await;
    let p2 = create_player(&app, "Nina").await;

    patch(
        &app,
        &format!("/api/players/{}", p1),
        json!({ "teamId": team_a, "soldPrice": 100 }),
    )
    .await;
    patch(
        &app,
        &format!("/api/players/{}", p2),
        json!({ "teamId": team_b, "soldPrice": 250 }),
    )
    .await;

    let (status, body) = post(
        &app,
        "/api/auction/trade",
        json!({ "player1Id": p1, "player2Id": p2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player1"]["teamId"], team_b.as_str());
    assert_eq!(body["player2"]["teamId"], team_a.as_str());
    assert_eq!(body["player1"]["soldPrice"], 100);
    assert_eq!(body["player2"]["soldPrice"], 250);
}

#[tokio::test]
async fn test_trade_rejects_captains_and_same_team() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;
    let team_b = create_team(&app, "Blue").await;
    let captain = create_player(&app, "Captain").await;
    let regular = create_player(&app, "Regular").await;
    let teammate = create_player(&app, "Teammate").await;

    assign_captain(&app, &team_a, &captain).await;
    patch(
        &app,
        &format!("/api/players/{}", regular),
        json!({ "teamId": team_b, "soldPrice": 100 }),
    )
    .await;
    patch(
        &app,
        &format!("/api/players/{}", teammate),
        json!({ "teamId": team_b, "soldPrice": 150 }),
    )
    .await;

    let (status, body) = post(
        &app,
        "/api/auction/trade",
        json!({ "player1Id": captain, "player2Id": regular }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CAPTAIN_NOT_TRADEABLE");

    let (status, body) = post(
        &app,
        "/api/auction/trade",
        json!({ "player1Id": regular, "player2Id": teammate }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_TRADE");
}

// ============================================================================
// Mini-game score appliers
// ============================================================================

#[tokio::test]
async fn test_guess_the_word_scoring_and_round_gate() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;

    let (status, body) = post(
        &app,
        "/api/games/guess-the-word/score",
        json!({ "teamId": team_id, "correctCount": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delta"], 20);
    assert_eq!(body["team"]["score"], 20);
    assert_eq!(body["team"]["guessTheWordRounds"], 1);

    // a full sweep is 30, not 25
    let (_, body) = post(
        &app,
        "/api/games/guess-the-word/score",
        json!({ "teamId": team_id, "correctCount": 5 }),
    )
    .await;
    assert_eq!(body["delta"], 30);
    assert_eq!(body["team"]["score"], 50);

    post(
        &app,
        "/api/games/guess-the-word/score",
        json!({ "teamId": team_id, "correctCount": 0 }),
    )
    .await;

    // the fourth round is gated off
    let (status, body) = post(
        &app,
        "/api/games/guess-the-word/score",
        json!({ "teamId": team_id, "correctCount": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ROUND_LIMIT_REACHED");

    let team = fetch_team(&app, &team_id).await;
    assert_eq!(team["score"], 50);
    assert_eq!(team["guessTheWordRounds"], 3);
}

#[tokio::test]
async fn test_dumb_charades_penalty_and_timeout() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;

    let (status, body) = post(
        &app,
        "/api/games/dumb-charades/score",
        json!({ "teamId": team_id, "method": "action", "elapsedSeconds": 31 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["base"], 50);
    assert_eq!(body["penalty"], 5);
    assert_eq!(body["total"], 45);
    assert_eq!(body["team"]["dumbCharadesRounds"], 1);

    // timer expiry zeroes the round but still counts it
    let (_, body) = post(
        &app,
        "/api/games/dumb-charades/score",
        json!({
            "teamId": team_id,
            "method": "letter-by-letter",
            "elapsedSeconds": 120,
            "timedOut": true
        }),
    )
    .await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["team"]["score"], 45);
    assert_eq!(body["team"]["dumbCharadesRounds"], 2);

    // no round gate for charades
    for _ in 0..3 {
        let (status, _) = post(
            &app,
            "/api/games/dumb-charades/score",
            json!({ "teamId": team_id, "method": "action", "elapsedSeconds": 10 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_beer_pong_duplicate_guard() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;
    let player_id = create_player(&app, "Asha").await;
    patch(
        &app,
        &format!("/api/players/{}", player_id),
        json!({ "teamId": team_id }),
    )
    .await;

    let (status, body) = post(
        &app,
        "/api/games/beer-pong/score",
        json!({ "teamId": team_id, "playerId": player_id, "correctThrows": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delta"], 30);
    assert_eq!(body["team"]["score"], 30);
    assert_eq!(body["team"]["beerPongTotalScore"], 30);
    assert_eq!(body["team"]["beerPongPlayersPlayed"], 1);
    assert_eq!(
        body["team"]["beerPongPlayedPlayerIds"],
        json!([player_id.as_str()])
    );

    // the same player cannot be scored twice in a session
    let (status, body) = post(
        &app,
        "/api/games/beer-pong/score",
        json!({ "teamId": team_id, "playerId": player_id, "correctThrows": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "PLAYER_ALREADY_SCORED");

    let team = fetch_team(&app, &team_id).await;
    assert_eq!(team["score"], 30);
}

#[tokio::test]
async fn test_beer_pong_rejects_player_from_other_team() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;
    let outsider = create_player(&app, "Outsider").await;

    let (status, body) = post(
        &app,
        "/api/games/beer-pong/score",
        json!({ "teamId": team_id, "playerId": outsider, "correctThrows": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SUBMISSION");
}

#[tokio::test]
async fn test_pen_fight_deltas_apply_unclamped() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;
    let team_b = create_team(&app, "Blue").await;

    let (status, body) = post(
        &app,
        "/api/games/pen-fight/score",
        json!({
            "team1Id": team_a,
            "team2Id": team_b,
            "team1Outcomes": ["knocked_out", "ring_out", "winner"],
            "team2Outcomes": ["playing", "playing", "playing"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team1Delta"], 10);
    assert_eq!(body["team2Delta"], 20);

    // a losing round can push a team's score below zero
    let (status, body) = post(
        &app,
        "/api/games/pen-fight/score",
        json!({
            "team1Id": team_a,
            "team2Id": team_b,
            "team1Outcomes": ["ring_out", "friendly_fire", "playing"],
            "team2Outcomes": ["playing", "playing", "winner"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team1Delta"], -20);

    let team = fetch_team(&app, &team_a).await;
    assert_eq!(team["score"], -10);
    assert_eq!(team["penFightRounds"], 2);
}

#[tokio::test]
async fn test_pen_fight_validates_input() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;
    let team_b = create_team(&app, "Blue").await;

    let (status, body) = post(
        &app,
        "/api/games/pen-fight/score",
        json!({
            "team1Id": team_a,
            "team2Id": team_b,
            "team1Outcomes": ["exploded", "playing", "playing"],
            "team2Outcomes": ["playing", "playing", "playing"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_OUTCOME");

    let (status, _) = post(
        &app,
        "/api/games/pen-fight/score",
        json!({
            "team1Id": team_a,
            "team2Id": team_a,
            "team1Outcomes": ["playing", "playing", "playing"],
            "team2Outcomes": ["playing", "playing", "playing"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_popular_song_round() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;
    let team_b = create_team(&app, "Blue").await;

    let (status, album) = post(
        &app,
        "/api/albums",
        json!({
            "name": "Greatest Hits",
            "songs": [
                { "title": "One", "streams": 500 },
                { "title": "Two", "streams": 300 },
                { "title": "Three", "streams": 100 },
                { "title": "Four", "streams": 50 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let album_id = album["id"].as_str().unwrap().to_string();
    let song_ids: Vec<String> = album["songs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();

    let (status, body) = post(
        &app,
        "/api/games/popular-song/score",
        json!({
            "albumId": album_id,
            "submissions": [
                { "teamId": team_a, "guesses": [song_ids[0], song_ids[1], song_ids[2]] },
                { "teamId": team_b, "guesses": [song_ids[3], song_ids[0], song_ids[1]] }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["topThree"],
        json!([song_ids[0], song_ids[1], song_ids[2]])
    );

    // perfect ranking: 15 in-top-3 + 15 exact + 5 has-#1 + 15 perfect
    assert_eq!(body["results"][0]["total"], 50);
    assert_eq!(body["results"][0]["perfect"], true);

    // two right songs in wrong slots plus the #1 somewhere: 10 + 0 + 5
    assert_eq!(body["results"][1]["total"], 15);
    assert_eq!(body["results"][1]["exactMatches"], 0);
    assert_eq!(body["results"][1]["hasNumberOne"], true);

    let team = fetch_team(&app, &team_a).await;
    assert_eq!(team["score"], 50);

    // the album is burned once scored
    let (status, body) = post(
        &app,
        "/api/games/popular-song/score",
        json!({
            "albumId": album_id,
            "submissions": [
                { "teamId": team_a, "guesses": [song_ids[0], song_ids[1], song_ids[2]] }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALBUM_ALREADY_PLAYED");
}

#[tokio::test]
async fn test_popular_song_requires_three_songs() {
    let app = create_test_app().await;
    let team_a = create_team(&app, "Red").await;

    let (_, album) = post(
        &app,
        "/api/albums",
        json!({
            "name": "Thin Album",
            "songs": [
                { "title": "One", "streams": 10 },
                { "title": "Two", "streams": 5 }
            ]
        }),
    )
    .await;
    let album_id = album["id"].as_str().unwrap();

    let (status, body) = post(
        &app,
        "/api/games/popular-song/score",
        json!({
            "albumId": album_id,
            "submissions": [{ "teamId": team_a, "guesses": ["a", "b", "c"] }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SUBMISSION");
}

// ============================================================================
// Scoreboard and resets
// ============================================================================

#[tokio::test]
async fn test_scoreboard_set_clamps_at_zero() {
    let app = create_test_app().await;
    let team_id = create_team(&app, "Red").await;

    let (status, body) = post(
        &app,
        &format!("/api/teams/{}/score", team_id),
        json!({ "score": 40 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 40);

    let (status, body) = post(
        &app,
        &format!("/api/teams/{}/score", team_id),
        json!({ "score": -15 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
}

#[tokio::test]
async fn test_reset_all_wipes_the_session() {
    let app = create_test_app().await;
    auction_fixture(&app, 2).await;
    post(
        &app,
        "/api/albums",
        json!({ "name": "Album", "songs": [] }),
    )
    .await;
    patch(&app, "/api/settings", json!({ "basePrice": 500 })).await;

    let (status, _) = post(&app, "/api/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, players) = get(&app, "/api/players").await;
    assert_eq!(players.as_array().unwrap().len(), 0);
    let (_, teams) = get(&app, "/api/teams").await;
    assert_eq!(teams.as_array().unwrap().len(), 0);
    let (_, albums) = get(&app, "/api/albums").await;
    assert_eq!(albums.as_array().unwrap().len(), 0);

    let (_, settings) = get(&app, "/api/settings").await;
    assert_eq!(settings["basePrice"], 100);
    assert_eq!(settings["auctionStatus"], "pending");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
