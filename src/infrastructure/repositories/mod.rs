// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_schedule_repository;
pub mod sqlite_standings_repository;

pub use sqlite_schedule_repository::SqliteScheduleRepository;
pub use sqlite_standings_repository::SqliteStandingsRepository;
