use crate::domain::entities::Player;

/// The unsold-player queue: players with no team and no captaincy, in
/// creation order, together with the rotating cursor interpretation.
///
/// The cursor is a plain numeric index persisted in Settings. Skipping
/// advances it modulo the queue length, so it rotates over the whole pool
/// rather than sending the current player to the back of the line. That
/// rotating-pointer behavior is intentional and must not be "fixed" here.
#[derive(Debug, Clone)]
pub struct AuctionQueue {
    players: Vec<Player>,
}

impl AuctionQueue {
    /// Build the queue from the full player list (assumed creation-ordered)
    pub fn from_players(all_players: &[Player]) -> Self {
        Self {
            players: all_players
                .iter()
                .filter(|p| p.is_unsold())
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player the cursor points at. An out-of-range cursor falls back to
    /// the queue head rather than wrapping - the cursor is only re-normalized
    /// when it is advanced.
    pub fn current(&self, index: u32) -> Option<&Player> {
        self.players
            .get(index as usize)
            .or_else(|| self.players.first())
    }

    /// Next cursor value after a skip: advance by one, wrapping at the end
    pub fn advanced(&self, index: u32) -> u32 {
        (index + 1) % self.len().max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, team_id: Option<&str>, is_captain: bool) -> Player {
        Player {
            id: id.to_string(),
            name: format!("player {}", id),
            photo: None,
            team_id: team_id.map(String::from),
            sold_price: None,
            is_captain,
            created_at: 0,
        }
    }

    #[test]
    fn test_queue_membership_excludes_sold_and_captains() {
        let all = vec![
            player("p1", None, false),
            player("p2", Some("t1"), false),
            player("p3", None, true),
            player("p4", None, false),
        ];

        let queue = AuctionQueue::from_players(&all);
        let ids: Vec<&str> = queue.players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p4"]);
    }

    #[test]
    fn test_skip_wraps_at_end_of_queue() {
        let all = vec![
            player("p1", None, false),
            player("p2", None, false),
            player("p3", None, false),
        ];
        let queue = AuctionQueue::from_players(&all);

        assert_eq!(queue.advanced(0), 1);
        assert_eq!(queue.advanced(1), 2);
        // index N-1 wraps back to 0
        assert_eq!(queue.advanced(2), 0);
    }

    #[test]
    fn test_skip_on_empty_queue_stays_at_zero() {
        let queue = AuctionQueue::from_players(&[]);
        assert_eq!(queue.advanced(0), 0);
        assert!(queue.current(0).is_none());
    }

    #[test]
    fn test_stale_cursor_falls_back_to_queue_head() {
        let all = vec![player("p1", None, false), player("p2", None, false)];
        let queue = AuctionQueue::from_players(&all);

        assert_eq!(queue.current(1).map(|p| p.id.as_str()), Some("p2"));
        // cursor left over from a longer queue resolves to the head
        assert_eq!(queue.current(7).map(|p| p.id.as_str()), Some("p1"));
    }
}
