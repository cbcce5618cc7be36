use serde::{Deserialize, Serialize};

/// Player entity - a party guest who can be auctioned onto a team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Opaque data-URL text, never interpreted by the backend
    pub photo: Option<String>,
    pub team_id: Option<String>,
    pub sold_price: Option<i64>,
    pub is_captain: bool,
    pub created_at: i64,
}

impl Player {
    /// Create a new unassigned, non-captain player
    pub fn new(id: String, name: String, photo: Option<String>) -> Self {
        Self {
            id,
            name,
            photo,
            team_id: None,
            sold_price: None,
            is_captain: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Unsold-pool membership: no team and not pinned as a captain
    pub fn is_unsold(&self) -> bool {
        self.team_id.is_none() && !self.is_captain
    }
}
