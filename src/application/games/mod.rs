mod score_beer_pong;
mod score_dumb_charades;
mod score_guess_the_word;
mod score_pen_fight;
mod score_popular_song;
mod set_team_score;

pub use score_beer_pong::*;
pub use score_dumb_charades::*;
pub use score_guess_the_word::*;
pub use score_pen_fight::*;
pub use score_popular_song::*;
pub use set_team_score::*;
