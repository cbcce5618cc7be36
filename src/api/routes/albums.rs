use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::routes::{double_option, timestamp_to_rfc3339, ErrorResponse};
use crate::api::AppState;
use crate::application::roster::{CreateAlbum, CreateAlbumError, CreateAlbumInput, SongInput};
use crate::domain::entities::{Album, Song};
use crate::domain::repositories::{AlbumRepository, AlbumUpdate};

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub streams: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    pub name: String,
    pub cover_art: Option<String>,
    #[serde(default)]
    pub songs: Vec<SongDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_art: Option<Option<String>>,
    pub songs: Option<Vec<SongDto>>,
    pub played: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: String,
    pub title: String,
    pub streams: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub id: String,
    pub name: String,
    pub cover_art: Option<String>,
    pub songs: Vec<SongResponse>,
    pub played: bool,
    pub created_at: String,
}

impl AlbumResponse {
    fn from_album(album: Album) -> Self {
        Self {
            id: album.id,
            name: album.name,
            cover_art: album.cover_art,
            songs: album
                .songs
                .into_iter()
                .map(|s| SongResponse {
                    id: s.id,
                    title: s.title,
                    streams: s.streams,
                })
                .collect(),
            played: album.played,
            created_at: timestamp_to_rfc3339(album.created_at),
        }
    }
}

fn songs_from_dtos(dtos: Vec<SongDto>) -> Vec<Song> {
    dtos.into_iter()
        .map(|s| Song {
            id: s
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: s.title,
            streams: s.streams,
        })
        .collect()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/albums - All albums in creation order
pub async fn list_albums(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AlbumResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let albums = state.album_repo.list().await.map_err(|e| {
        tracing::error!("Failed to fetch albums: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to fetch albums", "FETCH_ALBUMS_ERROR")),
        )
    })?;

    Ok(Json(albums.into_iter().map(AlbumResponse::from_album).collect()))
}

/// POST /api/albums - Create an album for the popular-song game
pub async fn create_album(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<AlbumResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateAlbum::new(state.album_repo.clone());
    let album = use_case
        .execute(CreateAlbumInput {
            name: body.name,
            cover_art: body.cover_art,
            songs: body
                .songs
                .into_iter()
                .map(|s| SongInput {
                    id: s.id,
                    title: s.title,
                    streams: s.streams,
                })
                .collect(),
        })
        .await
        .map_err(|e| match e {
            CreateAlbumError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(msg, "MISSING_NAME")),
            ),
            CreateAlbumError::Repository(e) => {
                tracing::error!("Failed to create album: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Failed to create album", "CREATE_ALBUM_ERROR")),
                )
            }
        })?;

    Ok((StatusCode::CREATED, Json(AlbumResponse::from_album(album))))
}

/// PATCH /api/albums/:albumId - Partial-merge update; a supplied song list
/// replaces the whole list
pub async fn update_album(
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<String>,
    Json(body): Json<UpdateAlbumRequest>,
) -> Result<Json<AlbumResponse>, (StatusCode, Json<ErrorResponse>)> {
    let update = AlbumUpdate {
        name: body.name,
        cover_art: body.cover_art,
        songs: body.songs.map(songs_from_dtos),
        played: body.played,
    };

    let album = state
        .album_repo
        .update(&album_id, update)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update album {}: {}", album_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to update album", "UPDATE_ALBUM_ERROR")),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Album not found", "ALBUM_NOT_FOUND")),
            )
        })?;

    Ok(Json(AlbumResponse::from_album(album)))
}

/// DELETE /api/albums/:albumId - Remove an album
pub async fn delete_album(
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let deleted = state.album_repo.delete(&album_id).await.map_err(|e| {
        tracing::error!("Failed to delete album {}: {}", album_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete album", "DELETE_ALBUM_ERROR")),
        )
    })?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Album not found", "ALBUM_NOT_FOUND")),
        ));
    }

    Ok(Json(serde_json::json!({
        "message": "Album deleted",
        "id": album_id,
    })))
}

/// DELETE /api/albums - Bulk reset
pub async fn delete_all_albums(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.album_repo.delete_all().await.map_err(|e| {
        tracing::error!("Failed to delete albums: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete albums", "DELETE_ALBUMS_ERROR")),
        )
    })?;

    Ok(Json(serde_json::json!({ "message": "All albums deleted" })))
}
