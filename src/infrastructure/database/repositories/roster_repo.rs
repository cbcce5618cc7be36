use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::Settings;
use crate::domain::repositories::{RepositoryError, RosterRepository};

/// SQLite implementation of RosterRepository.
///
/// Every method opens one transaction; dropping the transaction on an early
/// error path rolls back whatever already ran.
pub struct SqliteRosterRepository {
    pool: SqlitePool,
}

impl SqliteRosterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterRepository for SqliteRosterRepository {
    async fn settle_sale(
        &self,
        player_id: &str,
        team_id: &str,
        price: i64,
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query("UPDATE players SET team_id = ?, sold_price = ? WHERE id = ?")
            .bind(team_id)
            .bind(price)
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("player {}", player_id)));
        }

        let result = sqlx::query("UPDATE teams SET budget = budget - ? WHERE id = ?")
            .bind(price)
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("team {}", team_id)));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn swap_players(
        &self,
        player1_id: &str,
        player2_id: &str,
    ) -> Result<(), RepositoryError> {
        use sqlx::Row;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let mut team_ids = Vec::with_capacity(2);
        for player_id in [player1_id, player2_id] {
            let row = sqlx::query("SELECT team_id FROM players WHERE id = ?")
                .bind(player_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?
                .ok_or_else(|| RepositoryError::NotFound(format!("player {}", player_id)))?;
            team_ids.push(row.get::<Option<String>, _>("team_id"));
        }

        sqlx::query("UPDATE players SET team_id = ? WHERE id = ?")
            .bind(&team_ids[1])
            .bind(player1_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("UPDATE players SET team_id = ? WHERE id = ?")
            .bind(&team_ids[0])
            .bind(player2_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn assign_captain(
        &self,
        team_id: &str,
        player_id: &str,
    ) -> Result<(), RepositoryError> {
        use sqlx::Row;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let row = sqlx::query("SELECT captain_id FROM teams WHERE id = ?")
            .bind(team_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("team {}", team_id)))?;

        // Demote the previous captain when the seat changes hands
        if let Some(previous) = row.get::<Option<String>, _>("captain_id") {
            if previous != player_id {
                sqlx::query("UPDATE players SET is_captain = 0 WHERE id = ?")
                    .bind(&previous)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| RepositoryError::Database(e.to_string()))?;
            }
        }

        let result = sqlx::query("UPDATE players SET is_captain = 1, team_id = ? WHERE id = ?")
            .bind(team_id)
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("player {}", player_id)));
        }

        sqlx::query("UPDATE teams SET captain_id = ? WHERE id = ?")
            .bind(player_id)
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn delete_team_cascade(&self, team_id: &str) -> Result<bool, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        // Members go back to the pool; the captain keeps the flag, matching
        // the observed cascade
        sqlx::query("UPDATE players SET team_id = NULL, sold_price = NULL WHERE team_id = ?")
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(true)
    }

    async fn delete_player_cascade(&self, player_id: &str) -> Result<bool, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE teams SET captain_id = NULL WHERE captain_id = ?")
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(true)
    }

    async fn reset_auction(&self, default_budget: i64) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("UPDATE players SET team_id = NULL, sold_price = NULL WHERE is_captain = 0")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("UPDATE teams SET budget = ?")
            .bind(default_budget)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM settings")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let defaults = Settings::default();
        sqlx::query(
            "INSERT INTO settings (id, base_price, bid_increment, auction_status, current_player_index)
             VALUES (1, ?, ?, ?, ?)",
        )
        .bind(defaults.base_price)
        .bind(defaults.bid_increment)
        .bind(defaults.auction_status.as_str())
        .bind(defaults.current_player_index as i64)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn apply_pen_fight(
        &self,
        team1_id: &str,
        delta1: i64,
        team2_id: &str,
        delta2: i64,
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        for (team_id, delta) in [(team1_id, delta1), (team2_id, delta2)] {
            let result = sqlx::query(
                "UPDATE teams SET score = score + ?, pen_fight_rounds = pen_fight_rounds + 1
                 WHERE id = ?",
            )
            .bind(delta)
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound(format!("team {}", team_id)));
            }
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn apply_song_scores(
        &self,
        album_id: &str,
        deltas: &[(String, i64)],
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        for (team_id, delta) in deltas {
            let result = sqlx::query("UPDATE teams SET score = score + ? WHERE id = ?")
                .bind(delta)
                .bind(team_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound(format!("team {}", team_id)));
            }
        }

        let result = sqlx::query("UPDATE albums SET played = 1 WHERE id = ?")
            .bind(album_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("album {}", album_id)));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }
}
