use super::value_objects::Standings;

/// Team aggregate root
///
/// Represents one team on the league roster together with its season
/// record.
///
/// # Invariants
/// - The name is non-blank and immutable once created
/// - Counters are non-negative
/// - Counters are mutated only by the score submission workflow, one
///   outcome event per completed game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    record: Standings,
}

impl Team {
    /// Creates a new team for roster entry
    ///
    /// # Arguments
    /// * `name` - The team's name, the roster's unique identifier
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with all counters at zero
    /// * `Err(String)` - If the name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be blank".to_string());
        }

        Ok(Self {
            name,
            record: Standings::default(),
        })
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the team's season record
    pub fn record(&self) -> Standings {
        self.record
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses construction validation since the data is already
    /// validated and stored.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(name: String, wins: i64, losses: i64, ties: i64) -> Self {
        Self {
            name,
            record: Standings { wins, losses, ties },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let team = Team::new("Astros").expect("valid team");

        assert_eq!(team.name(), "Astros");
        assert_eq!(team.record(), Standings::default());
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        let result = Team::new("");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("blank"));
    }

    #[test]
    fn create_team_with_whitespace_name_fails() {
        assert!(Team::new("   ").is_err());
    }

    #[test]
    fn reconstructed_team_carries_stored_counters() {
        let team = Team::from_persistence("Cubs".to_string(), 4, 1, 2);

        assert_eq!(team.name(), "Cubs");
        assert_eq!(
            team.record(),
            Standings {
                wins: 4,
                losses: 1,
                ties: 2,
            }
        );
        assert_eq!(team.record().games_played(), 7);
    }
}
