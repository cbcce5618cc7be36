mod confirm_sale;
mod finish_auction;
mod get_auction_state;
mod place_bid;
mod reset_auction;
mod skip_player;
mod start_auction;
mod trade_players;

pub use confirm_sale::*;
pub use finish_auction::*;
pub use get_auction_state::*;
pub use place_bid::*;
pub use reset_auction::*;
pub use skip_player::*;
pub use start_auction::*;
pub use trade_players::*;
