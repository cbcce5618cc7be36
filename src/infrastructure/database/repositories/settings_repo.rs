use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{AuctionStatus, Settings};
use crate::domain::repositories::{RepositoryError, SettingsRepository, SettingsUpdate};

/// SQLite implementation of SettingsRepository.
///
/// The record lives in a single row with a fixed id so the singleton
/// invariant is carried by the schema.
pub struct SqliteSettingsRepository {
    pool: SqlitePool,
}

impl SqliteSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_settings(row: &sqlx::sqlite::SqliteRow) -> Settings {
        use sqlx::Row;

        let status_str: String = row.get("auction_status");

        Settings {
            base_price: row.get("base_price"),
            bid_increment: row.get("bid_increment"),
            auction_status: AuctionStatus::from_str(&status_str).unwrap_or(AuctionStatus::Pending),
            current_player_index: row.get::<i64, _>("current_player_index") as u32,
        }
    }

    async fn insert_defaults(
        executor: &mut sqlx::SqliteConnection,
    ) -> Result<Settings, RepositoryError> {
        let defaults = Settings::default();

        sqlx::query(
            "INSERT INTO settings (id, base_price, bid_increment, auction_status, current_player_index)
             VALUES (1, ?, ?, ?, ?)",
        )
        .bind(defaults.base_price)
        .bind(defaults.bid_increment)
        .bind(defaults.auction_status.as_str())
        .bind(defaults.current_player_index as i64)
        .execute(executor)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(defaults)
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn get_or_create(&self) -> Result<Settings, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM settings WHERE id = 1")
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let settings = match row {
            Some(row) => Self::row_to_settings(&row),
            None => Self::insert_defaults(&mut tx).await?,
        };

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(settings)
    }

    async fn update(&self, update: SettingsUpdate) -> Result<Settings, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM settings WHERE id = 1")
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let mut settings = match row {
            Some(row) => Self::row_to_settings(&row),
            None => Self::insert_defaults(&mut tx).await?,
        };

        if let Some(base_price) = update.base_price {
            settings.base_price = base_price;
        }
        if let Some(bid_increment) = update.bid_increment {
            settings.bid_increment = bid_increment;
        }
        if let Some(status) = update.auction_status {
            settings.auction_status = status;
        }
        if let Some(index) = update.current_player_index {
            settings.current_player_index = index;
        }

        sqlx::query(
            "UPDATE settings SET base_price = ?, bid_increment = ?, auction_status = ?,
                current_player_index = ?
             WHERE id = 1",
        )
        .bind(settings.base_price)
        .bind(settings.bid_increment)
        .bind(settings.auction_status.as_str())
        .bind(settings.current_player_index as i64)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(settings)
    }

    async fn reset(&self) -> Result<Settings, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM settings")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let settings = Self::insert_defaults(&mut tx).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(settings)
    }
}
