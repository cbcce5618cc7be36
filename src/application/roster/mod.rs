mod add_player;
mod assign_captain;
mod create_album;
mod create_team;
mod delete_player;
mod delete_team;
mod reset_all;

pub use add_player::*;
pub use assign_captain::*;
pub use create_album::*;
pub use create_team::*;
pub use delete_player::*;
pub use delete_team::*;
pub use reset_all::*;
