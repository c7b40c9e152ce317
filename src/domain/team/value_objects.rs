use serde::{Deserialize, Serialize};

/// The single counter increment a team earns from one resolved game
///
/// Exactly one of these is applied per team per completed game, so a
/// team's counters always sum to the number of games it has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterDelta {
    /// Increment the team's win counter
    Win,
    /// Increment the team's loss counter
    Loss,
    /// Increment the team's tie counter
    Tie,
}

impl std::fmt::Display for CounterDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterDelta::Win => write!(f, "win"),
            CounterDelta::Loss => write!(f, "loss"),
            CounterDelta::Tie => write!(f, "tie"),
        }
    }
}

/// A team's season record: win, loss, and tie counters
///
/// # Invariant
/// All three counters are non-negative and their sum equals the number of
/// completed games the team has played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Standings {
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
}

impl Standings {
    /// Number of completed games behind these counters
    pub fn games_played(&self) -> i64 {
        self.wins + self.losses + self.ties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_display_names() {
        assert_eq!(CounterDelta::Win.to_string(), "win");
        assert_eq!(CounterDelta::Loss.to_string(), "loss");
        assert_eq!(CounterDelta::Tie.to_string(), "tie");
    }

    #[test]
    fn fresh_standings_have_no_games_played() {
        assert_eq!(Standings::default().games_played(), 0);
    }

    #[test]
    fn games_played_sums_all_three_counters() {
        let record = Standings {
            wins: 3,
            losses: 2,
            ties: 1,
        };
        assert_eq!(record.games_played(), 6);
    }
}
