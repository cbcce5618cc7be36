use async_trait::async_trait;

use crate::domain::entities::{Album, Song};
use crate::domain::repositories::RepositoryError;

/// Partial update for an album; a supplied song list replaces the whole list
#[derive(Debug, Clone, Default)]
pub struct AlbumUpdate {
    pub name: Option<String>,
    pub cover_art: Option<Option<String>>,
    pub songs: Option<Vec<Song>>,
    pub played: Option<bool>,
}

/// Album repository trait
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// All albums in creation order
    async fn list(&self) -> Result<Vec<Album>, RepositoryError>;

    /// Find album by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, RepositoryError>;

    /// Insert a freshly-created album
    async fn save(&self, album: &Album) -> Result<(), RepositoryError>;

    /// Partial-merge update; returns the merged album, None when missing
    async fn update(&self, id: &str, update: AlbumUpdate)
        -> Result<Option<Album>, RepositoryError>;

    /// Delete one album; false when the id did not resolve
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Bulk reset
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
