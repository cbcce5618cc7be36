use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Album, Song};
use crate::domain::repositories::{AlbumRepository, RepositoryError};

/// Create album input; songs without an id get a fresh one assigned
pub struct CreateAlbumInput {
    pub name: String,
    pub cover_art: Option<String>,
    pub songs: Vec<SongInput>,
}

pub struct SongInput {
    pub id: Option<String>,
    pub title: String,
    pub streams: i64,
}

/// Create album use case
pub struct CreateAlbum<A: AlbumRepository> {
    album_repo: Arc<A>,
}

impl<A: AlbumRepository> CreateAlbum<A> {
    pub fn new(album_repo: Arc<A>) -> Self {
        Self { album_repo }
    }

    pub async fn execute(&self, input: CreateAlbumInput) -> Result<Album, CreateAlbumError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CreateAlbumError::Validation("Album name is required".into()));
        }

        let songs = input
            .songs
            .into_iter()
            .map(|s| Song {
                id: s.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                title: s.title,
                streams: s.streams,
            })
            .collect();

        let album = Album::new(Uuid::new_v4().to_string(), name, input.cover_art, songs);
        self.album_repo.save(&album).await?;

        Ok(album)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAlbumError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
