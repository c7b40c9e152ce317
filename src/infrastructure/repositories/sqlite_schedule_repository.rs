use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::game::Game;
use crate::domain::repositories::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::ScheduleRepository;

/// SQLite implementation of ScheduleRepository
///
/// All values reach the SQL text through bound parameters, never through
/// string interpolation.
pub struct SqliteScheduleRepository {
    pool: SqlitePool,
}

impl SqliteScheduleRepository {
    /// Creates a new SqliteScheduleRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for SQLite
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    game_number: i64,
    home_team: String,
    home_team_score: Option<i64>,
    visitor_team: String,
    visitor_team_score: Option<i64>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game::from_persistence(
            row.game_number,
            row.home_team,
            row.home_team_score,
            row.visitor_team,
            row.visitor_team_score,
        )
    }
}

const SELECT_GAME: &str = "SELECT GameNumber       AS game_number,
                                  HomeTeam         AS home_team,
                                  HomeTeamScore    AS home_team_score,
                                  VisitorTeam      AS visitor_team,
                                  VisitorTeamScore AS visitor_team_score
                           FROM Games";

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepository {
    async fn add_game(&self, game: &Game) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO Games (GameNumber, HomeTeam, HomeTeamScore, VisitorTeam, VisitorTeamScore)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(game.number())
        .bind(game.home_team())
        .bind(game.home_score())
        .bind(game.visitor_team())
        .bind(game.visitor_score())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_game(&self, number: i64) -> RepositoryResult<Game> {
        let row = sqlx::query_as::<_, GameRow>(&format!("{SELECT_GAME} WHERE GameNumber = ?1"))
            .bind(number)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Game::from)
            .ok_or(RepositoryError::GameNotFound(number))
    }

    async fn list_games(&self) -> RepositoryResult<Vec<Game>> {
        let rows = sqlx::query_as::<_, GameRow>(&format!("{SELECT_GAME} ORDER BY GameNumber"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn next_game_number(&self) -> RepositoryResult<i64> {
        let next: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(GameNumber), 0) + 1 FROM Games")
            .fetch_one(&self.pool)
            .await?;

        Ok(next)
    }

    async fn record_score(
        &self,
        number: i64,
        home_score: i64,
        visitor_score: i64,
    ) -> RepositoryResult<()> {
        let result = sqlx::query(
            "UPDATE Games SET HomeTeamScore = ?1, VisitorTeamScore = ?2 WHERE GameNumber = ?3",
        )
        .bind(home_score)
        .bind(visitor_score)
        .bind(number)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::GameNotFound(number));
        }

        Ok(())
    }
}
