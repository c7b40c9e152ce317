// CLI layer (the interactive operator surface)
// A thin adapter over the repositories and the submission workflow

pub mod handlers;

use std::io::{self, Write};

use sqlx::SqlitePool;

use crate::infrastructure::repositories::{SqliteScheduleRepository, SqliteStandingsRepository};

/// Run the interactive menu loop until the operator exits
///
/// A failed action prints a message naming the cause and returns to the
/// menu; only stdin/stdout failures end the loop.
pub async fn run(pool: &SqlitePool) -> io::Result<()> {
    let schedule = SqliteScheduleRepository::new(pool.clone());
    let standings = SqliteStandingsRepository::new(pool.clone());

    println!("Welcome to the Sports Teams Database Manager!");

    loop {
        print_menu();
        let choice = prompt("")?;

        match choice.as_str() {
            "0" => break,
            "1" => handlers::view_standings(&standings).await,
            "2" => handlers::view_schedule(&schedule).await,
            "3" => handlers::add_teams(&standings).await?,
            "4" => handlers::add_games(&schedule, &standings).await?,
            "5" => handlers::enter_scores(&schedule, &standings).await?,
            "6" => handlers::begin_new_season(pool).await,
            other => println!("Unrecognized option '{other}'"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Select from the following options:");
    println!("1. View team standings");
    println!("2. View the schedule");
    println!("3. Add a team");
    println!("4. Add a game to the schedule");
    println!("5. Enter game scores");
    println!("6. Begin a new season");
    println!("0. Exit the program");
}

/// Print a prompt and read one trimmed line from stdin
pub(crate) fn prompt(label: &str) -> io::Result<String> {
    if !label.is_empty() {
        print!("{label}");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask whether the operator wants to repeat an action
pub(crate) fn another(noun: &str) -> io::Result<bool> {
    let answer = prompt(&format!("Do you want to enter another {noun}? (y/n): "))?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
