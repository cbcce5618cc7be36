use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError, RosterRepository};

/// Trade players input
pub struct TradePlayersInput {
    pub player1_id: String,
    pub player2_id: String,
}

/// Trade players output - both players after the swap
pub struct TradePlayersOutput {
    pub player1: Player,
    pub player2: Player,
}

/// Trade players use case. Swaps the team assignments of two sold,
/// non-captain players in one transaction; sold prices stay where they are.
pub struct TradePlayers<P: PlayerRepository, R: RosterRepository> {
    player_repo: Arc<P>,
    roster_repo: Arc<R>,
}

impl<P: PlayerRepository, R: RosterRepository> TradePlayers<P, R> {
    pub fn new(player_repo: Arc<P>, roster_repo: Arc<R>) -> Self {
        Self {
            player_repo,
            roster_repo,
        }
    }

    pub async fn execute(
        &self,
        input: TradePlayersInput,
    ) -> Result<TradePlayersOutput, TradePlayersError> {
        if input.player1_id == input.player2_id {
            return Err(TradePlayersError::Validation(
                "Cannot trade a player with themselves".into(),
            ));
        }

        let player1 = self
            .player_repo
            .find_by_id(&input.player1_id)
            .await?
            .ok_or(TradePlayersError::PlayerNotFound)?;
        let player2 = self
            .player_repo
            .find_by_id(&input.player2_id)
            .await?
            .ok_or(TradePlayersError::PlayerNotFound)?;

        if player1.is_captain || player2.is_captain {
            return Err(TradePlayersError::CaptainNotTradeable);
        }

        match (&player1.team_id, &player2.team_id) {
            (Some(t1), Some(t2)) if t1 != t2 => {}
            (Some(_), Some(_)) => {
                return Err(TradePlayersError::Validation(
                    "Players are already on the same team".into(),
                ))
            }
            _ => {
                return Err(TradePlayersError::Validation(
                    "Both players must be on a team".into(),
                ))
            }
        }

        self.roster_repo
            .swap_players(&input.player1_id, &input.player2_id)
            .await?;

        let player1 = self
            .player_repo
            .find_by_id(&input.player1_id)
            .await?
            .ok_or(TradePlayersError::PlayerNotFound)?;
        let player2 = self
            .player_repo
            .find_by_id(&input.player2_id)
            .await?
            .ok_or(TradePlayersError::PlayerNotFound)?;

        Ok(TradePlayersOutput { player1, player2 })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TradePlayersError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Captains cannot be traded")]
    CaptainNotTradeable,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
