// Repository traits (ports) for the domain layer
// Implementations are adapters that live in the infrastructure layer

pub mod errors;
pub mod schedule_repository;
pub mod standings_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use schedule_repository::ScheduleRepository;
pub use standings_repository::StandingsRepository;
