use serde::{Deserialize, Serialize};

/// Starting budget every team gets, restored on auction reset
pub const DEFAULT_BUDGET: i64 = 1000;

/// Display color used when none is supplied
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Team entity - budget, cumulative score and per-game progress counters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Display only
    pub color: String,
    pub captain_id: Option<String>,
    pub budget: i64,
    pub score: i64,
    pub guess_the_word_rounds: u32,
    pub dumb_charades_rounds: u32,
    pub pictionary_rounds: u32,
    pub pen_fight_rounds: u32,
    pub beer_pong_rounds: u32,
    pub beer_pong_players_played: u32,
    /// Append-only within a beer-pong session; guards against double-scoring
    pub beer_pong_played_player_ids: Vec<String>,
    /// Beer-pong-only cumulative score, updated in lockstep with `score`
    pub beer_pong_total_score: i64,
    pub created_at: i64,
}

impl Team {
    pub fn new(id: String, name: String, color: String, budget: i64) -> Self {
        Self {
            id,
            name,
            color,
            captain_id: None,
            budget,
            score: 0,
            guess_the_word_rounds: 0,
            dumb_charades_rounds: 0,
            pictionary_rounds: 0,
            pen_fight_rounds: 0,
            beer_pong_rounds: 0,
            beer_pong_players_played: 0,
            beer_pong_played_player_ids: Vec::new(),
            beer_pong_total_score: 0,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn has_played_beer_pong(&self, player_id: &str) -> bool {
        self.beer_pong_played_player_ids
            .iter()
            .any(|id| id == player_id)
    }
}
