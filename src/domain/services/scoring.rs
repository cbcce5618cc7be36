//! Round scoring - pure functions for the auction bid ladder and every
//! mini-game's point math. Nothing in here touches storage.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Album, MIN_PLAYABLE_SONGS};

/// Words shown per guess-the-word round, also the beer-pong throw count
pub const THROWS_PER_ROUND: u32 = 5;

/// Guess-the-word rounds a team may play
pub const GUESS_THE_WORD_ROUND_LIMIT: u32 = 3;

/// Charades round length in seconds; expiry scores zero
pub const CHARADES_TOTAL_TIME: u32 = 120;

/// The auction bid ladder step: the opening bid is the base price, every
/// following bid adds the increment on top of the standing bid.
pub fn next_bid(has_bidder: bool, current_bid: i64, base_price: i64, bid_increment: i64) -> i64 {
    if has_bidder {
        current_bid + bid_increment
    } else {
        base_price
    }
}

// ---------------------------------------------------------------------------
// Popular-song ranking
// ---------------------------------------------------------------------------

/// Breakdown of a popular-song round score, kept for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongScore {
    pub total: i64,
    /// Guesses present anywhere in the true top 3
    pub in_top_three: u32,
    /// Guesses matching the true position exactly
    pub exact_matches: u32,
    /// The single most-streamed song appears somewhere in the guesses
    pub has_number_one: bool,
    /// All three positions exact
    pub perfect: bool,
}

impl SongScore {
    fn zero() -> Self {
        Self {
            total: 0,
            in_top_three: 0,
            exact_matches: 0,
            has_number_one: false,
            perfect: false,
        }
    }
}

/// Score a team's ordered top-3 guess against an album.
///
/// Components are additive, not mutually exclusive: 5 per guess that lands
/// anywhere in the true top 3, 5 per exact-position match, a flat 5 when the
/// most-streamed song appears in any position, and a flat 15 for a perfect
/// ranking. Albums with fewer than 3 songs score zero.
pub fn score_song_round(album: &Album, guesses: &[String]) -> SongScore {
    if album.songs.len() < MIN_PLAYABLE_SONGS {
        return SongScore::zero();
    }

    let sorted = album.sorted_by_streams();
    let top_three: Vec<&str> = sorted.iter().take(3).map(|s| s.id.as_str()).collect();
    let number_one = top_three[0];

    let mut in_top_three = 0;
    let mut exact_matches = 0;
    let mut has_number_one = false;

    for (position, guess) in guesses.iter().take(3).enumerate() {
        if top_three.contains(&guess.as_str()) {
            in_top_three += 1;
        }
        if top_three.get(position) == Some(&guess.as_str()) {
            exact_matches += 1;
        }
        if guess == number_one {
            has_number_one = true;
        }
    }

    let perfect = exact_matches == 3;
    let mut total = 5 * in_top_three as i64 + 5 * exact_matches as i64;
    if has_number_one {
        total += 5;
    }
    if perfect {
        total += 15;
    }

    SongScore {
        total,
        in_top_three,
        exact_matches,
        has_number_one,
        perfect,
    }
}

// ---------------------------------------------------------------------------
// Dumb charades
// ---------------------------------------------------------------------------

/// How the word was eventually guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharadesMethod {
    /// Guessed from acting alone
    Action,
    /// Guessed letter by letter
    LetterByLetter,
}

impl CharadesMethod {
    pub fn base_points(&self) -> i64 {
        match self {
            CharadesMethod::Action => 50,
            CharadesMethod::LetterByLetter => 25,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "action" => Some(CharadesMethod::Action),
            "letter-by-letter" | "letter" => Some(CharadesMethod::LetterByLetter),
            _ => None,
        }
    }
}

/// Charades score split into base and penalty for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharadesScore {
    pub base: i64,
    pub penalty: i64,
    pub total: i64,
}

/// Time penalty: free for the first 30 seconds, then 5 points per 20-second
/// band past that, capped at 25.
pub fn charades_time_penalty(elapsed_seconds: u32) -> i64 {
    if elapsed_seconds <= 30 {
        return 0;
    }
    let bands = (elapsed_seconds - 30) / 20 + 1;
    (bands.min(5) * 5) as i64
}

/// Score a charades round. Timer expiry zeroes the round regardless of how
/// the word would have been credited.
pub fn score_charades_round(
    method: CharadesMethod,
    elapsed_seconds: u32,
    timed_out: bool,
) -> CharadesScore {
    if timed_out {
        return CharadesScore {
            base: 0,
            penalty: 0,
            total: 0,
        };
    }

    let base = method.base_points();
    let penalty = charades_time_penalty(elapsed_seconds);
    CharadesScore {
        base,
        penalty,
        total: (base - penalty).max(0),
    }
}

// ---------------------------------------------------------------------------
// Guess-the-word / beer-pong
// ---------------------------------------------------------------------------

/// Guess-the-word round: 5 per correct word, sweep bonus lifts 25 to 30
pub fn score_guess_the_word(correct_count: u32) -> i64 {
    if correct_count == THROWS_PER_ROUND {
        30
    } else {
        correct_count as i64 * 5
    }
}

/// Beer-pong per-player score, same ladder as guess-the-word
pub fn score_beer_pong_throws(correct_throws: u32) -> i64 {
    if correct_throws == THROWS_PER_ROUND {
        30
    } else {
        correct_throws as i64 * 5
    }
}

// ---------------------------------------------------------------------------
// Pen-fight
// ---------------------------------------------------------------------------

/// Outcome of one pen-fight slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenFightOutcome {
    /// Not yet resolved
    Playing,
    /// Knocked off the table by the opposing team: +20 to them
    KnockedOut,
    /// Slid out on its own: -10 to the owning team
    RingOut,
    /// Kicked out by a teammate: -10 to the owning team
    FriendlyFire,
    /// Last pen standing: +20 to the owning team
    Winner,
}

impl PenFightOutcome {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "playing" => Some(PenFightOutcome::Playing),
            "knocked_out" => Some(PenFightOutcome::KnockedOut),
            "ring_out" => Some(PenFightOutcome::RingOut),
            "friendly_fire" => Some(PenFightOutcome::FriendlyFire),
            "winner" => Some(PenFightOutcome::Winner),
            _ => None,
        }
    }
}

/// Fold one side's slot outcomes into (own delta, opposing delta)
fn pen_fight_side(outcomes: &[PenFightOutcome]) -> (i64, i64) {
    let mut own = 0;
    let mut opposing = 0;
    for outcome in outcomes {
        match outcome {
            PenFightOutcome::Playing => {}
            PenFightOutcome::KnockedOut => opposing += 20,
            PenFightOutcome::RingOut | PenFightOutcome::FriendlyFire => own -= 10,
            PenFightOutcome::Winner => own += 20,
        }
    }
    (own, opposing)
}

/// Final pen-fight deltas for both teams. Deltas may be negative and are
/// applied to the running scores without clamping.
pub fn score_pen_fight(
    team1_outcomes: &[PenFightOutcome],
    team2_outcomes: &[PenFightOutcome],
) -> (i64, i64) {
    let (own1, opposing2) = pen_fight_side(team1_outcomes);
    let (own2, opposing1) = pen_fight_side(team2_outcomes);
    (own1 + opposing1, own2 + opposing2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Song;

    fn album_with_streams(streams: &[(&str, i64)]) -> Album {
        Album::new(
            "a1".into(),
            "test".into(),
            None,
            streams
                .iter()
                .map(|(id, n)| Song {
                    id: id.to_string(),
                    title: format!("song {}", id),
                    streams: *n,
                })
                .collect(),
        )
    }

    fn guesses(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_next_bid_opens_at_base_price() {
        assert_eq!(next_bid(false, 0, 100, 10), 100);
        assert_eq!(next_bid(true, 100, 100, 10), 110);
        assert_eq!(next_bid(true, 150, 100, 25), 175);
    }

    #[test]
    fn test_song_score_perfect_ranking() {
        let album = album_with_streams(&[("s1", 500), ("s2", 300), ("s3", 100), ("s4", 50)]);
        let score = score_song_round(&album, &guesses(&["s1", "s2", "s3"]));

        // 3 in top-3 (15) + 3 exact (15) + has #1 (5) + perfect (15)
        assert_eq!(score.total, 50);
        assert!(score.perfect);
        assert!(score.has_number_one);
    }

    #[test]
    fn test_song_score_components_are_additive() {
        let album = album_with_streams(&[("s1", 500), ("s2", 300), ("s3", 100), ("s4", 50)]);

        // all three right songs, all in the wrong position, #1 present
        let score = score_song_round(&album, &guesses(&["s2", "s3", "s1"]));
        assert_eq!(score.in_top_three, 3);
        assert_eq!(score.exact_matches, 0);
        assert!(score.has_number_one);
        assert_eq!(score.total, 20);

        // one exact match only, no #1
        let score = score_song_round(&album, &guesses(&["s4", "s2", "s4"]));
        assert_eq!(score.in_top_three, 1);
        assert_eq!(score.exact_matches, 1);
        assert!(!score.has_number_one);
        assert_eq!(score.total, 10);
    }

    #[test]
    fn test_song_score_monotonic_in_exact_matches() {
        let album = album_with_streams(&[("s1", 500), ("s2", 300), ("s3", 100), ("s4", 50)]);

        let wrong_position = score_song_round(&album, &guesses(&["s1", "s3", "s2"]));
        let right_position = score_song_round(&album, &guesses(&["s1", "s2", "s3"]));
        assert!(right_position.total >= wrong_position.total);
    }

    #[test]
    fn test_song_score_requires_three_songs() {
        let album = album_with_streams(&[("s1", 500), ("s2", 300)]);
        let score = score_song_round(&album, &guesses(&["s1", "s2", "s1"]));
        assert_eq!(score.total, 0);
    }

    #[test]
    fn test_charades_penalty_boundaries() {
        assert_eq!(charades_time_penalty(0), 0);
        assert_eq!(charades_time_penalty(30), 0);
        assert_eq!(charades_time_penalty(31), 5);
        assert_eq!(charades_time_penalty(49), 5);
        assert_eq!(charades_time_penalty(50), 10);
        assert_eq!(charades_time_penalty(110), 25);
        // hypothetical over-long round still caps at 25
        assert_eq!(charades_time_penalty(200), 25);
    }

    #[test]
    fn test_charades_round_scores() {
        let quick = score_charades_round(CharadesMethod::Action, 20, false);
        assert_eq!(quick.total, 50);

        let slow = score_charades_round(CharadesMethod::LetterByLetter, 115, false);
        assert_eq!(slow.base, 25);
        assert_eq!(slow.penalty, 25);
        assert_eq!(slow.total, 0);

        let expired = score_charades_round(CharadesMethod::Action, 120, true);
        assert_eq!(expired.total, 0);
    }

    #[test]
    fn test_guess_the_word_sweep_bonus() {
        assert_eq!(score_guess_the_word(0), 0);
        assert_eq!(score_guess_the_word(3), 15);
        assert_eq!(score_guess_the_word(4), 20);
        // full sweep is 30, not 25
        assert_eq!(score_guess_the_word(5), 30);
    }

    #[test]
    fn test_beer_pong_throw_ladder() {
        assert_eq!(score_beer_pong_throws(2), 10);
        assert_eq!(score_beer_pong_throws(5), 30);
    }

    #[test]
    fn test_pen_fight_deltas() {
        use PenFightOutcome::*;

        // team1: one knockout suffered, one ring-out, one winner
        // team2: one knockout suffered, two still playing
        let (d1, d2) = score_pen_fight(&[KnockedOut, RingOut, Winner], &[KnockedOut, Playing, Playing]);
        // team1: -10 + 20 own, +20 from team2's knockout
        assert_eq!(d1, 30);
        // team2: +20 from team1's knockout
        assert_eq!(d2, 20);
    }

    #[test]
    fn test_pen_fight_delta_can_be_negative() {
        use PenFightOutcome::*;

        let (d1, d2) = score_pen_fight(&[RingOut, FriendlyFire, Playing], &[Playing, Playing, Winner]);
        assert_eq!(d1, -20);
        assert_eq!(d2, 20);
    }
}
