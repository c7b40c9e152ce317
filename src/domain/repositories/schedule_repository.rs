use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::game::Game;

/// Repository trait for the game schedule
///
/// Defines the contract for persisting and retrieving schedule entries.
/// Implementations should handle store-specific details.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Add a new game to the schedule
    async fn add_game(&self, game: &Game) -> RepositoryResult<()>;

    /// Fetch a game by its number, current scores included
    ///
    /// Fails with `GameNotFound` if no game has that number.
    async fn find_game(&self, number: i64) -> RepositoryResult<Game>;

    /// All scheduled games in game-number order
    async fn list_games(&self) -> RepositoryResult<Vec<Game>>;

    /// The next unused game number: one past the highest on the schedule
    async fn next_game_number(&self) -> RepositoryResult<i64>;

    /// Overwrite the score columns of the identified game
    ///
    /// Fails with `GameNotFound` if the game does not exist. Does not
    /// touch team standings.
    async fn record_score(
        &self,
        number: i64,
        home_score: i64,
        visitor_score: i64,
    ) -> RepositoryResult<()>;
}
