// Per-option handlers for the menu loop
// Thin I/O wrappers: prompt, call a repository or the workflow, print

use std::io;

use sqlx::SqlitePool;

use crate::domain::game::Game;
use crate::domain::repositories::{ScheduleRepository, StandingsRepository};
use crate::domain::team::Team;
use crate::infrastructure::db;
use crate::workflow::ScoreSubmission;

use super::{another, prompt};

/// Print the roster with each team's season record
pub async fn view_standings(standings: &impl StandingsRepository) {
    match standings.list_teams().await {
        Ok(teams) => {
            println!(
                "{:<15} {:>6} {:>10} {:>10} {:>10}",
                "Team Name", "GP", "Wins", "Losses", "Ties"
            );
            for team in teams {
                let record = team.record();
                println!(
                    "{:<15} {:>6} {:>10} {:>10} {:>10}",
                    team.name(),
                    record.games_played(),
                    record.wins,
                    record.losses,
                    record.ties
                );
            }
        }
        Err(e) => println!("ERROR: {e}"),
    }
}

/// Print every scheduled game with its scores, "-" while unplayed
pub async fn view_schedule(schedule: &impl ScheduleRepository) {
    match schedule.list_games().await {
        Ok(games) => {
            println!("List of games and scores:");
            println!(
                "{:<6} {:<20} {:>6}     {:<20} {:>6}",
                "Game", "Home", "Score", "Visitor", "Score"
            );
            for game in games {
                println!(
                    "{:<6} {:<20} {:>6}     {:<20} {:>6}",
                    game.number(),
                    game.home_team(),
                    score_cell(game.home_score()),
                    game.visitor_team(),
                    score_cell(game.visitor_score())
                );
            }
        }
        Err(e) => println!("ERROR: {e}"),
    }
}

fn score_cell(score: Option<i64>) -> String {
    match score {
        Some(points) => points.to_string(),
        None => "-".to_string(),
    }
}

/// Prompt for new team names until the operator stops
pub async fn add_teams(standings: &impl StandingsRepository) -> io::Result<()> {
    loop {
        let name = prompt("Enter the new team name: ")?;

        match Team::new(name) {
            Ok(team) => match standings.add_team(&team).await {
                Ok(()) => println!("{} added to the roster", team.name()),
                Err(e) => println!("ERROR: {e}"),
            },
            Err(e) => println!("ERROR: {e}"),
        }

        if !another("team")? {
            break;
        }
    }

    Ok(())
}

/// Prompt for new schedule entries until the operator stops
///
/// Both teams must already be on the roster; the game number is assigned
/// monotonically.
pub async fn add_games(
    schedule: &impl ScheduleRepository,
    standings: &impl StandingsRepository,
) -> io::Result<()> {
    loop {
        let home = prompt("Enter the home team name: ")?;
        let visitor = prompt("Enter the visiting team name: ")?;

        match schedule_game(schedule, standings, &home, &visitor).await {
            Ok(game) => println!(
                "Game {} scheduled: {} vs {}",
                game.number(),
                game.home_team(),
                game.visitor_team()
            ),
            Err(e) => println!("ERROR: {e}"),
        }

        if !another("game")? {
            break;
        }
    }

    Ok(())
}

async fn schedule_game(
    schedule: &impl ScheduleRepository,
    standings: &impl StandingsRepository,
    home: &str,
    visitor: &str,
) -> Result<Game, String> {
    // Roster check up front so the operator gets the missing name, not a
    // foreign key violation.
    standings.counters(home).await.map_err(|e| e.to_string())?;
    standings
        .counters(visitor)
        .await
        .map_err(|e| e.to_string())?;

    let number = schedule
        .next_game_number()
        .await
        .map_err(|e| e.to_string())?;
    let game = Game::new(number, home, visitor)?;

    schedule.add_game(&game).await.map_err(|e| e.to_string())?;

    Ok(game)
}

/// Prompt for game scores until the operator stops
///
/// Each submission runs the full standings-update workflow; failures are
/// reported with the step they occurred at.
pub async fn enter_scores(
    schedule: &impl ScheduleRepository,
    standings: &impl StandingsRepository,
) -> io::Result<()> {
    let submission = ScoreSubmission::new(schedule, standings);

    loop {
        view_schedule(schedule).await;

        let number = match prompt("Enter the game number: ")?.parse::<i64>() {
            Ok(number) => number,
            Err(_) => {
                println!("The game number must be a whole number");
                if !another("game")? {
                    break;
                }
                continue;
            }
        };

        match schedule.find_game(number).await {
            Ok(game) => {
                let home_score = prompt_score(game.home_team())?;
                let visitor_score = prompt_score(game.visitor_team())?;

                match submission.submit(number, home_score, visitor_score).await {
                    Ok(()) => println!("Final score recorded and standings updated"),
                    Err(e) => {
                        tracing::error!("score submission for game {number} failed: {e}");
                        println!("ERROR: {e}");
                    }
                }
            }
            Err(e) => println!("ERROR: {e}"),
        }

        if !another("game")? {
            break;
        }
    }

    Ok(())
}

fn prompt_score(team_name: &str) -> io::Result<i64> {
    loop {
        match prompt(&format!("Enter the score for the {team_name}: "))?.parse::<i64>() {
            Ok(score) => return Ok(score),
            Err(_) => println!("The score must be a whole number"),
        }
    }
}

/// Drop and recreate both tables, then re-seed the opening league
pub async fn begin_new_season(pool: &SqlitePool) {
    println!("Reinitializing database for a new season");

    match db::reset_season(pool).await {
        Ok(()) => println!("A new season has begun"),
        Err(e) => println!("ERROR: {e}"),
    }
}
