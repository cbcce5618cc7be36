pub mod repositories;

use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS players (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        photo TEXT,
        team_id TEXT,
        sold_price INTEGER,
        is_captain INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS teams (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        color TEXT NOT NULL,
        captain_id TEXT,
        budget INTEGER NOT NULL,
        score INTEGER NOT NULL DEFAULT 0,
        guess_the_word_rounds INTEGER NOT NULL DEFAULT 0,
        dumb_charades_rounds INTEGER NOT NULL DEFAULT 0,
        pictionary_rounds INTEGER NOT NULL DEFAULT 0,
        pen_fight_rounds INTEGER NOT NULL DEFAULT 0,
        beer_pong_rounds INTEGER NOT NULL DEFAULT 0,
        beer_pong_players_played INTEGER NOT NULL DEFAULT 0,
        beer_pong_played_player_ids TEXT NOT NULL DEFAULT '[]',
        beer_pong_total_score INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS settings (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        base_price INTEGER NOT NULL,
        bid_increment INTEGER NOT NULL,
        auction_status TEXT NOT NULL,
        current_player_index INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS albums (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        cover_art TEXT,
        songs_json TEXT NOT NULL DEFAULT '[]',
        played INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL
    )",
];

/// Create the tables on startup when they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
