use std::sync::Arc;

use crate::domain::entities::MIN_PLAYABLE_SONGS;
use crate::domain::repositories::{
    AlbumRepository, RepositoryError, RosterRepository, TeamRepository,
};
use crate::domain::services::scoring::{self, SongScore};

/// Popular-song score input - every playing team's ordered top-3 guess
pub struct ScorePopularSongInput {
    pub album_id: String,
    pub submissions: Vec<TeamSubmission>,
}

pub struct TeamSubmission {
    pub team_id: String,
    /// Song ids in guessed rank order, most-streamed first
    pub guesses: Vec<String>,
}

/// Popular-song score output
pub struct ScorePopularSongOutput {
    /// The true top 3 song ids, most-streamed first
    pub top_three: Vec<String>,
    pub results: Vec<TeamSongResult>,
}

pub struct TeamSongResult {
    pub team_id: String,
    pub score: SongScore,
}

/// Popular-song score applier. Scores every submitted team against the
/// album's true top 3 and marks the album played, all in one transaction so
/// a half-scored round cannot exist.
pub struct ScorePopularSong<T: TeamRepository, A: AlbumRepository, R: RosterRepository> {
    team_repo: Arc<T>,
    album_repo: Arc<A>,
    roster_repo: Arc<R>,
}

impl<T: TeamRepository, A: AlbumRepository, R: RosterRepository> ScorePopularSong<T, A, R> {
    pub fn new(team_repo: Arc<T>, album_repo: Arc<A>, roster_repo: Arc<R>) -> Self {
        Self {
            team_repo,
            album_repo,
            roster_repo,
        }
    }

    pub async fn execute(
        &self,
        input: ScorePopularSongInput,
    ) -> Result<ScorePopularSongOutput, ScorePopularSongError> {
        let album = self
            .album_repo
            .find_by_id(&input.album_id)
            .await?
            .ok_or(ScorePopularSongError::AlbumNotFound)?;

        if album.played {
            return Err(ScorePopularSongError::AlbumAlreadyPlayed);
        }
        if album.songs.len() < MIN_PLAYABLE_SONGS {
            return Err(ScorePopularSongError::Validation(format!(
                "Album needs at least {} songs",
                MIN_PLAYABLE_SONGS
            )));
        }

        for submission in &input.submissions {
            if submission.guesses.len() != 3 {
                return Err(ScorePopularSongError::Validation(
                    "Each team submits exactly 3 guesses".into(),
                ));
            }
            self.team_repo
                .find_by_id(&submission.team_id)
                .await?
                .ok_or(ScorePopularSongError::TeamNotFound)?;
        }

        let results: Vec<TeamSongResult> = input
            .submissions
            .iter()
            .map(|submission| TeamSongResult {
                team_id: submission.team_id.clone(),
                score: scoring::score_song_round(&album, &submission.guesses),
            })
            .collect();

        let deltas: Vec<(String, i64)> = results
            .iter()
            .map(|r| (r.team_id.clone(), r.score.total))
            .collect();

        self.roster_repo
            .apply_song_scores(&input.album_id, &deltas)
            .await?;

        let top_three = album
            .sorted_by_streams()
            .into_iter()
            .take(3)
            .map(|s| s.id.clone())
            .collect();

        Ok(ScorePopularSongOutput { top_three, results })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScorePopularSongError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Album not found")]
    AlbumNotFound,
    #[error("Album has already been played")]
    AlbumAlreadyPlayed,
    #[error("Team not found")]
    TeamNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
