mod album_repo;
mod player_repo;
mod roster_repo;
mod settings_repo;
mod team_repo;

pub use album_repo::SqliteAlbumRepository;
pub use player_repo::SqlitePlayerRepository;
pub use roster_repo::SqliteRosterRepository;
pub use settings_repo::SqliteSettingsRepository;
pub use team_repo::SqliteTeamRepository;
