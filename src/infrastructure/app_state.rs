use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::domain::value_objects::BidLadder;
use crate::infrastructure::database;
use crate::infrastructure::database::repositories::{
    SqliteAlbumRepository, SqlitePlayerRepository, SqliteRosterRepository,
    SqliteSettingsRepository, SqliteTeamRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Player repository
    pub player_repo: Arc<SqlitePlayerRepository>,

    /// Team repository
    pub team_repo: Arc<SqliteTeamRepository>,

    /// Settings repository
    pub settings_repo: Arc<SqliteSettingsRepository>,

    /// Album repository
    pub album_repo: Arc<SqliteAlbumRepository>,

    /// Transactional multi-entity settlement operations
    pub roster_repo: Arc<SqliteRosterRepository>,

    /// Bid ladder for the player currently on the block.
    /// Session state only - a sale persists the final price, the ladder
    /// itself never reaches storage.
    pub bid_ladder: Arc<RwLock<BidLadder>>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        // Get database path from environment
        let db_path = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_PATH"))
            .unwrap_or_else(|_| "sqlite:./data/partynight.db".to_string());

        // Ensure path has sqlite: prefix
        let db_url = if db_path.starts_with("sqlite:") {
            db_path
        } else {
            format!("sqlite:{}", db_path)
        };

        tracing::info!("Connecting to database: {}", db_url);

        // An in-memory database exists per connection, so the pool must be
        // pinned to a single connection that never gets recycled
        let db = if db_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&db_url)
                .await?
        } else {
            SqlitePool::connect(&db_url).await?
        };
        database::init_schema(&db).await?;

        let player_repo = Arc::new(SqlitePlayerRepository::new(db.clone()));
        let team_repo = Arc::new(SqliteTeamRepository::new(db.clone()));
        let settings_repo = Arc::new(SqliteSettingsRepository::new(db.clone()));
        let album_repo = Arc::new(SqliteAlbumRepository::new(db.clone()));
        let roster_repo = Arc::new(SqliteRosterRepository::new(db.clone()));

        Ok(Self {
            db,
            player_repo,
            team_repo,
            settings_repo,
            album_repo,
            roster_repo,
            bid_ladder: Arc::new(RwLock::new(BidLadder::default())),
        })
    }
}
