mod album_repository;
mod player_repository;
mod roster_repository;
mod settings_repository;
mod team_repository;

pub use album_repository::*;
pub use player_repository::*;
pub use roster_repository::*;
pub use settings_repository::*;
pub use team_repository::*;
