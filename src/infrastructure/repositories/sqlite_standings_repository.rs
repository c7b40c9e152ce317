use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::repositories::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::StandingsRepository;
use crate::domain::team::value_objects::{CounterDelta, Standings};
use crate::domain::team::Team;

/// SQLite implementation of StandingsRepository
///
/// All values reach the SQL text through bound parameters. The only
/// interpolated fragment is the counter column name, which comes from the
/// closed `CounterDelta` enum, never from input.
pub struct SqliteStandingsRepository {
    pool: SqlitePool,
}

impl SqliteStandingsRepository {
    /// Creates a new SqliteStandingsRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for SQLite
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    team_name: String,
    wins: i64,
    losses: i64,
    ties: i64,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(row.team_name, row.wins, row.losses, row.ties)
    }
}

fn counter_column(delta: CounterDelta) -> &'static str {
    match delta {
        CounterDelta::Win => "Wins",
        CounterDelta::Loss => "Losses",
        CounterDelta::Tie => "Ties",
    }
}

#[async_trait]
impl StandingsRepository for SqliteStandingsRepository {
    async fn add_team(&self, team: &Team) -> RepositoryResult<()> {
        let record = team.record();

        sqlx::query("INSERT INTO Teams (TeamName, Wins, Losses, Ties) VALUES (?1, ?2, ?3, ?4)")
            .bind(team.name())
            .bind(record.wins)
            .bind(record.losses)
            .bind(record.ties)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn counters(&self, team_name: &str) -> RepositoryResult<Standings> {
        let row = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT Wins, Losses, Ties FROM Teams WHERE TeamName = ?1",
        )
        .bind(team_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(wins, losses, ties)| Standings { wins, losses, ties })
            .ok_or_else(|| RepositoryError::TeamNotFound(team_name.to_string()))
    }

    async fn apply_delta(&self, team_name: &str, delta: CounterDelta) -> RepositoryResult<()> {
        // Single atomic increment expression, no read-then-write window.
        let column = counter_column(delta);
        let sql = format!("UPDATE Teams SET {column} = {column} + 1 WHERE TeamName = ?1");

        let result = sqlx::query(&sql).bind(team_name).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::TeamNotFound(team_name.to_string()));
        }

        Ok(())
    }

    async fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT TeamName AS team_name, Wins AS wins, Losses AS losses, Ties AS ties
             FROM Teams ORDER BY TeamName",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}
