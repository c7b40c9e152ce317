//! End-to-end tests for the score submission workflow
//!
//! Each scenario runs the real workflow against in-memory SQLite
//! repositories. The partial-failure scenario injects a rejecting
//! standings double through the repository trait seam, which is what the
//! trait seam exists for.

use async_trait::async_trait;
use leaguedb::domain::game::Game;
use leaguedb::domain::repositories::{
    RepositoryError, RepositoryResult, ScheduleRepository, StandingsRepository,
};
use leaguedb::domain::team::{CounterDelta, Standings, Team};
use leaguedb::infrastructure::db;
use leaguedb::infrastructure::repositories::{
    SqliteScheduleRepository, SqliteStandingsRepository,
};
use leaguedb::workflow::{ScoreSubmission, SubmissionError, SubmissionStep};
use sqlx::SqlitePool;

/// An empty league with the schema in place
async fn setup_league() -> (SqlitePool, SqliteScheduleRepository, SqliteStandingsRepository) {
    let pool = db::create_pool("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::create_schema(&pool).await.expect("Failed to create schema");

    (
        pool.clone(),
        SqliteScheduleRepository::new(pool.clone()),
        SqliteStandingsRepository::new(pool),
    )
}

async fn roster(standings: &SqliteStandingsRepository, names: &[&str]) {
    for name in names {
        let team = Team::new(*name).expect("valid team");
        standings.add_team(&team).await.expect("Failed to add team");
    }
}

async fn schedule_game(schedule: &SqliteScheduleRepository, number: i64, home: &str, visitor: &str) {
    let game = Game::new(number, home, visitor).expect("valid game");
    schedule.add_game(&game).await.expect("Failed to add game");
}

#[tokio::test]
async fn home_win_persists_score_and_updates_both_teams() {
    let (_pool, schedule, standings) = setup_league().await;
    roster(&standings, &["Astros", "Brewers"]).await;
    schedule_game(&schedule, 1, "Astros", "Brewers").await;

    let submission = ScoreSubmission::new(&schedule, &standings);
    submission.submit(1, 5, 3).await.expect("submission should succeed");

    let game = schedule.find_game(1).await.expect("game exists");
    assert_eq!(game.home_score(), Some(5));
    assert_eq!(game.visitor_score(), Some(3));

    let astros = standings.counters("Astros").await.expect("counters");
    let brewers = standings.counters("Brewers").await.expect("counters");
    assert_eq!(astros, Standings { wins: 1, losses: 0, ties: 0 });
    assert_eq!(brewers, Standings { wins: 0, losses: 1, ties: 0 });
}

#[tokio::test]
async fn visitor_win_credits_the_visitor() {
    let (_pool, schedule, standings) = setup_league().await;
    roster(&standings, &["Astros", "Brewers"]).await;
    schedule_game(&schedule, 1, "Astros", "Brewers").await;

    let submission = ScoreSubmission::new(&schedule, &standings);
    submission.submit(1, 1, 4).await.expect("submission should succeed");

    let astros = standings.counters("Astros").await.expect("counters");
    let brewers = standings.counters("Brewers").await.expect("counters");
    assert_eq!(astros, Standings { wins: 0, losses: 1, ties: 0 });
    assert_eq!(brewers, Standings { wins: 1, losses: 0, ties: 0 });
}

#[tokio::test]
async fn level_score_gives_both_teams_a_tie() {
    let (_pool, schedule, standings) = setup_league().await;
    roster(&standings, &["Cubs", "Marlins"]).await;
    schedule_game(&schedule, 1, "Cubs", "Marlins").await;

    let submission = ScoreSubmission::new(&schedule, &standings);
    submission.submit(1, 2, 2).await.expect("submission should succeed");

    let cubs = standings.counters("Cubs").await.expect("counters");
    let marlins = standings.counters("Marlins").await.expect("counters");
    assert_eq!(cubs, Standings { wins: 0, losses: 0, ties: 1 });
    assert_eq!(marlins, Standings { wins: 0, losses: 0, ties: 1 });
}

#[tokio::test]
async fn unknown_game_fails_at_lookup_and_touches_nothing() {
    let (_pool, schedule, standings) = setup_league().await;
    roster(&standings, &["Astros", "Brewers"]).await;

    let submission = ScoreSubmission::new(&schedule, &standings);
    let err = submission
        .submit(999, 5, 3)
        .await
        .expect_err("submission should fail");

    assert_eq!(err.step(), Some(SubmissionStep::Lookup));
    assert!(matches!(
        err,
        SubmissionError::Step {
            source: RepositoryError::GameNotFound(999),
            ..
        }
    ));

    for name in ["Astros", "Brewers"] {
        let record = standings.counters(name).await.expect("counters");
        assert_eq!(record, Standings::default());
    }
}

#[tokio::test]
async fn resubmission_is_rejected_without_double_counting() {
    let (_pool, schedule, standings) = setup_league().await;
    roster(&standings, &["Astros", "Brewers"]).await;
    schedule_game(&schedule, 1, "Astros", "Brewers").await;

    let submission = ScoreSubmission::new(&schedule, &standings);
    submission.submit(1, 5, 3).await.expect("first submission succeeds");

    let err = submission
        .submit(1, 1, 1)
        .await
        .expect_err("second submission should be rejected");

    assert!(matches!(err, SubmissionError::AlreadyScored(1)));

    // Exactly one outcome event per team, and the original score stands
    let game = schedule.find_game(1).await.expect("game exists");
    assert_eq!(game.home_score(), Some(5));
    assert_eq!(game.visitor_score(), Some(3));

    let astros = standings.counters("Astros").await.expect("counters");
    let brewers = standings.counters("Brewers").await.expect("counters");
    assert_eq!(astros.games_played(), 1);
    assert_eq!(brewers.games_played(), 1);
}

#[tokio::test]
async fn negative_scores_are_rejected_before_any_write() {
    let (_pool, schedule, standings) = setup_league().await;
    roster(&standings, &["Astros", "Brewers"]).await;
    schedule_game(&schedule, 1, "Astros", "Brewers").await;

    let submission = ScoreSubmission::new(&schedule, &standings);
    let err = submission
        .submit(1, -1, 2)
        .await
        .expect_err("negative score should be rejected");

    assert!(matches!(
        err,
        SubmissionError::InvalidScore { home: -1, visitor: 2 }
    ));

    let game = schedule.find_game(1).await.expect("game exists");
    assert!(!game.is_played());
}

/// A standings double that refuses updates for one team, simulating a
/// store failure partway through the workflow
struct RejectingStandings {
    inner: SqliteStandingsRepository,
    reject: String,
}

#[async_trait]
impl StandingsRepository for RejectingStandings {
    async fn add_team(&self, team: &Team) -> RepositoryResult<()> {
        self.inner.add_team(team).await
    }

    async fn counters(&self, team_name: &str) -> RepositoryResult<Standings> {
        self.inner.counters(team_name).await
    }

    async fn apply_delta(&self, team_name: &str, delta: CounterDelta) -> RepositoryResult<()> {
        if team_name == self.reject {
            return Err(RepositoryError::Persistence(sqlx::Error::PoolClosed));
        }
        self.inner.apply_delta(team_name, delta).await
    }

    async fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        self.inner.list_teams().await
    }
}

#[tokio::test]
async fn visitor_update_failure_leaves_earlier_steps_committed() {
    let (pool, schedule, sqlite_standings) = setup_league().await;
    roster(&sqlite_standings, &["Astros", "Brewers"]).await;
    schedule_game(&schedule, 1, "Astros", "Brewers").await;

    let standings = RejectingStandings {
        inner: SqliteStandingsRepository::new(pool.clone()),
        reject: "Brewers".to_string(),
    };

    let submission = ScoreSubmission::new(&schedule, &standings);
    let err = submission
        .submit(1, 5, 3)
        .await
        .expect_err("visitor update should fail");

    // The error names the step that failed
    assert_eq!(err.step(), Some(SubmissionStep::ApplyVisitor));
    assert!(err.to_string().contains("visitor standings update"));

    // Earlier steps stay committed: scores written, home team credited
    let game = schedule.find_game(1).await.expect("game exists");
    assert_eq!(game.home_score(), Some(5));
    assert_eq!(game.visitor_score(), Some(3));

    let astros = sqlite_standings.counters("Astros").await.expect("counters");
    let brewers = sqlite_standings.counters("Brewers").await.expect("counters");
    assert_eq!(astros, Standings { wins: 1, losses: 0, ties: 0 });
    assert_eq!(brewers, Standings::default());
}
