use serde::{Deserialize, Serialize};

/// Songs an album needs before it can host a ranking round
pub const MIN_PLAYABLE_SONGS: usize = 3;

/// A song inside an album, ranked by stream count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub streams: i64,
}

/// Album entity - asset for the popular-song ranking game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    /// Opaque data-URL text, never interpreted by the backend
    pub cover_art: Option<String>,
    pub songs: Vec<Song>,
    /// Set once a round using this album has been scored
    pub played: bool,
    pub created_at: i64,
}

impl Album {
    pub fn new(id: String, name: String, cover_art: Option<String>, songs: Vec<Song>) -> Self {
        Self {
            id,
            name,
            cover_art,
            songs,
            played: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// An album can host a round once it has enough songs and is unplayed
    pub fn is_playable(&self) -> bool {
        self.songs.len() >= MIN_PLAYABLE_SONGS && !self.played
    }

    /// Songs ordered by streams descending; stable, so ties keep input order
    pub fn sorted_by_streams(&self) -> Vec<&Song> {
        let mut sorted: Vec<&Song> = self.songs.iter().collect();
        sorted.sort_by(|a, b| b.streams.cmp(&a.streams));
        sorted
    }
}
