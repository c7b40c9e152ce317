use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::team::value_objects::{CounterDelta, Standings};
use crate::domain::team::Team;

/// Repository trait for team standings
///
/// Defines the contract for the roster and its win/loss/tie counters.
/// Implementations should handle store-specific details.
#[async_trait]
pub trait StandingsRepository: Send + Sync {
    /// Add a team to the roster with its current (usually zero) record
    async fn add_team(&self, team: &Team) -> RepositoryResult<()>;

    /// The named team's current counters
    ///
    /// Fails with `TeamNotFound` if the team is not on the roster.
    async fn counters(&self, team_name: &str) -> RepositoryResult<Standings>;

    /// Increment the one counter named by `delta` for the given team
    ///
    /// The increment is a single atomic update expression, not a
    /// read-then-write sequence. Fails with `TeamNotFound` if the team
    /// does not exist.
    async fn apply_delta(&self, team_name: &str, delta: CounterDelta) -> RepositoryResult<()>;

    /// All rostered teams in name order
    async fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}
