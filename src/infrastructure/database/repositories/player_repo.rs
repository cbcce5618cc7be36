use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, PlayerUpdate, RepositoryError};

/// SQLite implementation of PlayerRepository
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_player(row: &sqlx::sqlite::SqliteRow) -> Player {
        use sqlx::Row;

        Player {
            id: row.get("id"),
            name: row.get("name"),
            photo: row.get("photo"),
            team_id: row.get("team_id"),
            sold_price: row.get("sold_price"),
            is_captain: row.get("is_captain"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn list(&self) -> Result<Vec<Player>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM players ORDER BY created_at ASC, rowid ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_player).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_player))
    }

    async fn save(&self, player: &Player) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO players (id, name, photo, team_id, sold_price, is_captain, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&player.id)
        .bind(&player.name)
        .bind(&player.photo)
        .bind(&player.team_id)
        .bind(player.sold_price)
        .bind(player.is_captain)
        .bind(player.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        update: PlayerUpdate,
    ) -> Result<Option<Player>, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut player = Self::row_to_player(&row);

        if let Some(name) = update.name {
            player.name = name;
        }
        if let Some(photo) = update.photo {
            player.photo = photo;
        }
        if let Some(team_id) = update.team_id {
            player.team_id = team_id;
        }
        if let Some(sold_price) = update.sold_price {
            player.sold_price = sold_price;
        }
        if let Some(is_captain) = update.is_captain {
            player.is_captain = is_captain;
        }

        sqlx::query(
            "UPDATE players SET name = ?, photo = ?, team_id = ?, sold_price = ?, is_captain = ?
             WHERE id = ?",
        )
        .bind(&player.name)
        .bind(&player.photo)
        .bind(&player.team_id)
        .bind(player.sold_price)
        .bind(player.is_captain)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(Some(player))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM players")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
