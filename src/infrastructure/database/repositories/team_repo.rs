use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::Team;
use crate::domain::repositories::{RepositoryError, TeamRepository, TeamUpdate};

/// SQLite implementation of TeamRepository
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_team(row: &sqlx::sqlite::SqliteRow) -> Team {
        use sqlx::Row;

        let played_ids_json: String = row.get("beer_pong_played_player_ids");

        Team {
            id: row.get("id"),
            name: row.get("name"),
            color: row.get("color"),
            captain_id: row.get("captain_id"),
            budget: row.get("budget"),
            score: row.get("score"),
            guess_the_word_rounds: row.get::<i64, _>("guess_the_word_rounds") as u32,
            dumb_charades_rounds: row.get::<i64, _>("dumb_charades_rounds") as u32,
            pictionary_rounds: row.get::<i64, _>("pictionary_rounds") as u32,
            pen_fight_rounds: row.get::<i64, _>("pen_fight_rounds") as u32,
            beer_pong_rounds: row.get::<i64, _>("beer_pong_rounds") as u32,
            beer_pong_players_played: row.get::<i64, _>("beer_pong_players_played") as u32,
            beer_pong_played_player_ids: serde_json::from_str(&played_ids_json)
                .unwrap_or_default(),
            beer_pong_total_score: row.get("beer_pong_total_score"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM teams ORDER BY created_at ASC, rowid ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_team).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_team))
    }

    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let played_ids_json = serde_json::to_string(&team.beer_pong_played_player_ids)
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "INSERT INTO teams (id, name, color, captain_id, budget, score,
                guess_the_word_rounds, dumb_charades_rounds, pictionary_rounds,
                pen_fight_rounds, beer_pong_rounds, beer_pong_players_played,
                beer_pong_played_player_ids, beer_pong_total_score, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&team.id)
        .bind(&team.name)
        .bind(&team.color)
        .bind(&team.captain_id)
        .bind(team.budget)
        .bind(team.score)
        .bind(team.guess_the_word_rounds as i64)
        .bind(team.dumb_charades_rounds as i64)
        .bind(team.pictionary_rounds as i64)
        .bind(team.pen_fight_rounds as i64)
        .bind(team.beer_pong_rounds as i64)
        .bind(team.beer_pong_players_played as i64)
        .bind(played_ids_json)
        .bind(team.beer_pong_total_score)
        .bind(team.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, id: &str, update: TeamUpdate) -> Result<Option<Team>, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut team = Self::row_to_team(&row);

        if let Some(name) = update.name {
            team.name = name;
        }
        if let Some(color) = update.color {
            team.color = color;
        }
        if let Some(captain_id) = update.captain_id {
            team.captain_id = captain_id;
        }
        if let Some(budget) = update.budget {
            team.budget = budget;
        }
        if let Some(score) = update.score {
            team.score = score;
        }
        if let Some(n) = update.guess_the_word_rounds {
            team.guess_the_word_rounds = n;
        }
        if let Some(n) = update.dumb_charades_rounds {
            team.dumb_charades_rounds = n;
        }
        if let Some(n) = update.pictionary_rounds {
            team.pictionary_rounds = n;
        }
        if let Some(n) = update.pen_fight_rounds {
            team.pen_fight_rounds = n;
        }
        if let Some(n) = update.beer_pong_rounds {
            team.beer_pong_rounds = n;
        }
        if let Some(n) = update.beer_pong_players_played {
            team.beer_pong_players_played = n;
        }
        if let Some(total) = update.beer_pong_total_score {
            team.beer_pong_total_score = total;
        }
        // Append, never overwrite - the played set only grows
        if let Some(player_id) = update.beer_pong_add_player_id {
            team.beer_pong_played_player_ids.push(player_id);
        }

        let played_ids_json = serde_json::to_string(&team.beer_pong_played_player_ids)
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "UPDATE teams SET name = ?, color = ?, captain_id = ?, budget = ?, score = ?,
                guess_the_word_rounds = ?, dumb_charades_rounds = ?, pictionary_rounds = ?,
                pen_fight_rounds = ?, beer_pong_rounds = ?, beer_pong_players_played = ?,
                beer_pong_played_player_ids = ?, beer_pong_total_score = ?
             WHERE id = ?",
        )
        .bind(&team.name)
        .bind(&team.color)
        .bind(&team.captain_id)
        .bind(team.budget)
        .bind(team.score)
        .bind(team.guess_the_word_rounds as i64)
        .bind(team.dumb_charades_rounds as i64)
        .bind(team.pictionary_rounds as i64)
        .bind(team.pen_fight_rounds as i64)
        .bind(team.beer_pong_rounds as i64)
        .bind(team.beer_pong_players_played as i64)
        .bind(played_ids_json)
        .bind(team.beer_pong_total_score)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(Some(team))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM teams")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
