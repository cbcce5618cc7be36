use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::teams::TeamResponse;
use crate::api::routes::ErrorResponse;
use crate::api::AppState;
use crate::application::games::{
    ScoreBeerPong, ScoreBeerPongError, ScoreBeerPongInput, ScoreDumbCharades,
    ScoreDumbCharadesError, ScoreDumbCharadesInput, ScoreGuessTheWord, ScoreGuessTheWordError,
    ScoreGuessTheWordInput, ScorePenFight, ScorePenFightError, ScorePenFightInput,
    ScorePopularSong, ScorePopularSongError, ScorePopularSongInput, TeamSubmission,
};
use crate::domain::services::scoring::{CharadesMethod, PenFightOutcome, SongScore};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessTheWordScoreRequest {
    pub team_id: String,
    pub correct_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumbCharadesScoreRequest {
    pub team_id: String,
    /// "action" or "letter-by-letter"
    pub method: String,
    pub elapsed_seconds: u32,
    #[serde(default)]
    pub timed_out: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerPongScoreRequest {
    pub team_id: String,
    pub player_id: String,
    pub correct_throws: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenFightScoreRequest {
    pub team1_id: String,
    pub team2_id: String,
    /// One of: playing, knocked_out, ring_out, friendly_fire, winner
    pub team1_outcomes: Vec<String>,
    pub team2_outcomes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularSongScoreRequest {
    pub album_id: String,
    pub submissions: Vec<TeamSubmissionDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSubmissionDto {
    pub team_id: String,
    /// Song ids in guessed rank order, most-streamed first
    pub guesses: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaScoreResponse {
    pub success: bool,
    pub delta: i64,
    pub team: TeamResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharadesScoreResponse {
    pub success: bool,
    pub base: i64,
    pub penalty: i64,
    pub total: i64,
    pub team: TeamResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenFightScoreResponse {
    pub success: bool,
    pub team1_delta: i64,
    pub team2_delta: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularSongScoreResponse {
    pub success: bool,
    pub top_three: Vec<String>,
    pub results: Vec<TeamSongResultDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSongResultDto {
    pub team_id: String,
    #[serde(flatten)]
    pub score: SongScore,
}

fn parse_outcomes(raw: &[String]) -> Result<Vec<PenFightOutcome>, (StatusCode, Json<ErrorResponse>)> {
    raw.iter()
        .map(|s| {
            PenFightOutcome::from_str(s).ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(
                        format!("Unknown pen-fight outcome '{}'", s),
                        "INVALID_OUTCOME",
                    )),
                )
            })
        })
        .collect()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/games/guess-the-word/score
pub async fn score_guess_the_word(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GuessTheWordScoreRequest>,
) -> Result<Json<DeltaScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ScoreGuessTheWord::new(state.team_repo.clone());
    let output = use_case
        .execute(ScoreGuessTheWordInput {
            team_id: body.team_id,
            correct_count: body.correct_count,
        })
        .await
        .map_err(|e| match e {
            ScoreGuessTheWordError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "INVALID_COUNT")),
            ),
            ScoreGuessTheWordError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            ScoreGuessTheWordError::RoundLimitReached => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Team has played all its rounds",
                    "ROUND_LIMIT_REACHED",
                )),
            ),
            ScoreGuessTheWordError::Repository(e) => {
                tracing::error!("Failed to score guess-the-word round: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to score round", "SCORE_ROUND_ERROR")),
                )
            }
        })?;

    Ok(Json(DeltaScoreResponse {
        success: true,
        delta: output.delta,
        team: TeamResponse::from_team(output.team),
    }))
}

/// POST /api/games/dumb-charades/score
pub async fn score_dumb_charades(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DumbCharadesScoreRequest>,
) -> Result<Json<CharadesScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let method = CharadesMethod::from_str(&body.method).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                format!("Unknown charades method '{}'", body.method),
                "INVALID_METHOD",
            )),
        )
    })?;

    let use_case = ScoreDumbCharades::new(state.team_repo.clone());
    let output = use_case
        .execute(ScoreDumbCharadesInput {
            team_id: body.team_id,
            method,
            elapsed_seconds: body.elapsed_seconds,
            timed_out: body.timed_out,
        })
        .await
        .map_err(|e| match e {
            ScoreDumbCharadesError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            ScoreDumbCharadesError::Repository(e) => {
                tracing::error!("Failed to score charades round: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to score round", "SCORE_ROUND_ERROR")),
                )
            }
        })?;

    Ok(Json(CharadesScoreResponse {
        success: true,
        base: output.score.base,
        penalty: output.score.penalty,
        total: output.score.total,
        team: TeamResponse::from_team(output.team),
    }))
}

/// POST /api/games/beer-pong/score
pub async fn score_beer_pong(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BeerPongScoreRequest>,
) -> Result<Json<DeltaScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ScoreBeerPong::new(state.player_repo.clone(), state.team_repo.clone());
    let output = use_case
        .execute(ScoreBeerPongInput {
            team_id: body.team_id,
            player_id: body.player_id,
            correct_throws: body.correct_throws,
        })
        .await
        .map_err(|e| match e {
            ScoreBeerPongError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "INVALID_SUBMISSION")),
            ),
            ScoreBeerPongError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            ScoreBeerPongError::PlayerNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Player not found", "PLAYER_NOT_FOUND")),
            ),
            ScoreBeerPongError::PlayerAlreadyScored => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Player has already been scored this session",
                    "PLAYER_ALREADY_SCORED",
                )),
            ),
            ScoreBeerPongError::Repository(e) => {
                tracing::error!("Failed to score beer-pong throw: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to score round", "SCORE_ROUND_ERROR")),
                )
            }
        })?;

    Ok(Json(DeltaScoreResponse {
        success: true,
        delta: output.delta,
        team: TeamResponse::from_team(output.team),
    }))
}

/// POST /api/games/pen-fight/score
pub async fn score_pen_fight(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PenFightScoreRequest>,
) -> Result<Json<PenFightScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let team1_outcomes = parse_outcomes(&body.team1_outcomes)?;
    let team2_outcomes = parse_outcomes(&body.team2_outcomes)?;

    let use_case = ScorePenFight::new(state.team_repo.clone(), state.roster_repo.clone());
    let output = use_case
        .execute(ScorePenFightInput {
            team1_id: body.team1_id,
            team2_id: body.team2_id,
            team1_outcomes,
            team2_outcomes,
        })
        .await
        .map_err(|e| match e {
            ScorePenFightError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "INVALID_SUBMISSION")),
            ),
            ScorePenFightError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            ScorePenFightError::Repository(e) => {
                tracing::error!("Failed to score pen-fight round: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to score round", "SCORE_ROUND_ERROR")),
                )
            }
        })?;

    Ok(Json(PenFightScoreResponse {
        success: true,
        team1_delta: output.team1_delta,
        team2_delta: output.team2_delta,
    }))
}

/// POST /api/games/popular-song/score
pub async fn score_popular_song(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PopularSongScoreRequest>,
) -> Result<Json<PopularSongScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ScorePopularSong::new(
        state.team_repo.clone(),
        state.album_repo.clone(),
        state.roster_repo.clone(),
    );
    let output = use_case
        .execute(ScorePopularSongInput {
            album_id: body.album_id,
            submissions: body
                .submissions
                .into_iter()
                .map(|s| TeamSubmission {
                    team_id: s.team_id,
                    guesses: s.guesses,
                })
                .collect(),
        })
        .await
        .map_err(|e| match e {
            ScorePopularSongError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "INVALID_SUBMISSION")),
            ),
            ScorePopularSongError::AlbumNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Album not found", "ALBUM_NOT_FOUND")),
            ),
            ScorePopularSongError::AlbumAlreadyPlayed => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Album has already been played",
                    "ALBUM_ALREADY_PLAYED",
                )),
            ),
            ScorePopularSongError::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Team not found", "TEAM_NOT_FOUND")),
            ),
            ScorePopularSongError::Repository(e) => {
                tracing::error!("Failed to score popular-song round: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to score round", "SCORE_ROUND_ERROR")),
                )
            }
        })?;

    Ok(Json(PopularSongScoreResponse {
        success: true,
        top_three: output.top_three,
        results: output
            .results
            .into_iter()
            .map(|r| TeamSongResultDto {
                team_id: r.team_id,
                score: r.score,
            })
            .collect(),
    }))
}
