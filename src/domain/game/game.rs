/// Game aggregate root
///
/// A schedule entry: two distinct rostered teams and, once the game has
/// been played, a final score for each side.
///
/// # Invariants
/// - The game number is positive and unique on the schedule
/// - Home and visitor name different teams
/// - Scores are null until the game is played, then set together exactly
///   once by the score submission workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    number: i64,
    home_team: String,
    visitor_team: String,
    home_score: Option<i64>,
    visitor_score: Option<i64>,
}

impl Game {
    /// Creates a new, unplayed schedule entry
    ///
    /// # Arguments
    /// * `number` - The game's schedule number (positive, assigned monotonically)
    /// * `home_team` - Name of the home team
    /// * `visitor_team` - Name of the visiting team (must differ from home)
    ///
    /// # Returns
    /// * `Ok(Game)` - New entry with both scores unset
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        number: i64,
        home_team: impl Into<String>,
        visitor_team: impl Into<String>,
    ) -> Result<Self, String> {
        let home_team = home_team.into();
        let visitor_team = visitor_team.into();

        if number < 1 {
            return Err(format!("Game number must be positive, got {number}"));
        }
        if home_team.trim().is_empty() || visitor_team.trim().is_empty() {
            return Err("Team names cannot be blank".to_string());
        }
        if home_team == visitor_team {
            return Err(format!("A team cannot play itself: {home_team}"));
        }

        Ok(Self {
            number,
            home_team,
            visitor_team,
            home_score: None,
            visitor_score: None,
        })
    }

    /// Returns the game's schedule number
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Returns the home team's name
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    /// Returns the visiting team's name
    pub fn visitor_team(&self) -> &str {
        &self.visitor_team
    }

    /// Returns the home team's final score, if the game has been played
    pub fn home_score(&self) -> Option<i64> {
        self.home_score
    }

    /// Returns the visiting team's final score, if the game has been played
    pub fn visitor_score(&self) -> Option<i64> {
        self.visitor_score
    }

    /// Whether a final score has been recorded for this game
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.visitor_score.is_some()
    }

    /// Reconstructs a Game from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        number: i64,
        home_team: String,
        home_score: Option<i64>,
        visitor_team: String,
        visitor_score: Option<i64>,
    ) -> Self {
        Self {
            number,
            home_team,
            visitor_team,
            home_score,
            visitor_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_game_with_valid_teams() {
        let game = Game::new(1, "Astros", "Brewers").expect("valid game");

        assert_eq!(game.number(), 1);
        assert_eq!(game.home_team(), "Astros");
        assert_eq!(game.visitor_team(), "Brewers");
        assert_eq!(game.home_score(), None);
        assert_eq!(game.visitor_score(), None);
        assert!(!game.is_played());
    }

    #[test]
    fn create_game_against_itself_fails() {
        let result = Game::new(1, "Astros", "Astros");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot play itself"));
    }

    #[test]
    fn create_game_with_blank_team_fails() {
        assert!(Game::new(1, "", "Brewers").is_err());
        assert!(Game::new(1, "Astros", "  ").is_err());
    }

    #[test]
    fn create_game_with_nonpositive_number_fails() {
        assert!(Game::new(0, "Astros", "Brewers").is_err());
        assert!(Game::new(-3, "Astros", "Brewers").is_err());
    }

    #[test]
    fn reconstructed_game_with_scores_is_played() {
        let game = Game::from_persistence(2, "Cubs".to_string(), Some(5), "Marlins".to_string(), Some(3));

        assert!(game.is_played());
        assert_eq!(game.home_score(), Some(5));
        assert_eq!(game.visitor_score(), Some(3));
    }
}
