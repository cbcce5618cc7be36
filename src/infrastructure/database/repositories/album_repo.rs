use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Album, Song};
use crate::domain::repositories::{AlbumRepository, AlbumUpdate, RepositoryError};

/// SQLite implementation of AlbumRepository. The song list is stored as a
/// JSON column; songs have no life of their own outside their album.
pub struct SqliteAlbumRepository {
    pool: SqlitePool,
}

impl SqliteAlbumRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_album(row: &sqlx::sqlite::SqliteRow) -> Album {
        use sqlx::Row;

        let songs_json: String = row.get("songs_json");
        let songs: Vec<Song> = serde_json::from_str(&songs_json).unwrap_or_default();

        Album {
            id: row.get("id"),
            name: row.get("name"),
            cover_art: row.get("cover_art"),
            songs,
            played: row.get("played"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl AlbumRepository for SqliteAlbumRepository {
    async fn list(&self) -> Result<Vec<Album>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM albums ORDER BY created_at ASC, rowid ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_album).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM albums WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_album))
    }

    async fn save(&self, album: &Album) -> Result<(), RepositoryError> {
        let songs_json = serde_json::to_string(&album.songs)
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "INSERT INTO albums (id, name, cover_art, songs_json, played, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&album.id)
        .bind(&album.name)
        .bind(&album.cover_art)
        .bind(songs_json)
        .bind(album.played)
        .bind(album.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        update: AlbumUpdate,
    ) -> Result<Option<Album>, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM albums WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut album = Self::row_to_album(&row);

        if let Some(name) = update.name {
            album.name = name;
        }
        if let Some(cover_art) = update.cover_art {
            album.cover_art = cover_art;
        }
        if let Some(songs) = update.songs {
            album.songs = songs;
        }
        if let Some(played) = update.played {
            album.played = played;
        }

        let songs_json = serde_json::to_string(&album.songs)
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "UPDATE albums SET name = ?, cover_art = ?, songs_json = ?, played = ? WHERE id = ?",
        )
        .bind(&album.name)
        .bind(&album.cover_art)
        .bind(songs_json)
        .bind(album.played)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(Some(album))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM albums")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
