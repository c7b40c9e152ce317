use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the database
/// file on first run
///
/// The pool is sized for a single interactive operator. Foreign keys are
/// enforced so a game can never reference a team that is not on the
/// roster.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Create the Teams and Games tables if they do not exist
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Teams (
            TeamName TEXT    NOT NULL PRIMARY KEY,
            Wins     INTEGER NOT NULL DEFAULT 0,
            Losses   INTEGER NOT NULL DEFAULT 0,
            Ties     INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Games (
            GameNumber       INTEGER NOT NULL PRIMARY KEY,
            HomeTeam         TEXT    NOT NULL REFERENCES Teams (TeamName),
            HomeTeamScore    INTEGER,
            VisitorTeam      TEXT    NOT NULL REFERENCES Teams (TeamName),
            VisitorTeamScore INTEGER
        )",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await
}

/// Seed the opening roster and schedule
///
/// Four teams with zero records and three unplayed games between them.
pub async fn seed_league(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for name in ["Astros", "Marlins", "Brewers", "Cubs"] {
        sqlx::query("INSERT INTO Teams (TeamName, Wins, Losses, Ties) VALUES (?1, 0, 0, 0)")
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for (number, home, visitor) in [
        (1_i64, "Astros", "Brewers"),
        (2, "Brewers", "Cubs"),
        (3, "Cubs", "Astros"),
    ] {
        sqlx::query("INSERT INTO Games (GameNumber, HomeTeam, VisitorTeam) VALUES (?1, ?2, ?3)")
            .bind(number)
            .bind(home)
            .bind(visitor)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}

/// First-run initialization: create the schema and, if the roster is
/// empty, seed the opening league
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_schema(pool).await?;

    let teams: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Teams")
        .fetch_one(pool)
        .await?;

    if teams == 0 {
        tracing::info!("empty roster, seeding the opening league");
        seed_league(pool).await?;
    }

    Ok(())
}

/// Begin a new season: drop both tables, recreate them, and re-seed
///
/// Games goes first so its foreign keys never dangle.
pub async fn reset_season(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS Games").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS Teams").execute(pool).await?;

    create_schema(pool).await?;
    seed_league(pool).await
}
