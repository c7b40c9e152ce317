use std::cmp::Ordering;

use crate::domain::team::value_objects::CounterDelta;

/// Maps a final score pair to the outcome delta for each side
///
/// Total over all integer pairs: every comparison lands in exactly one
/// outcome category, so a completed game contributes exactly one counter
/// increment to each team.
///
/// Pure and infallible. Score validation is the submitting caller's
/// concern, not the resolver's.
///
/// # Example
/// ```
/// use leaguedb::domain::game::outcome::resolve;
/// use leaguedb::domain::team::CounterDelta;
///
/// assert_eq!(resolve(5, 3), (CounterDelta::Win, CounterDelta::Loss));
/// ```
pub fn resolve(home_score: i64, visitor_score: i64) -> (CounterDelta, CounterDelta) {
    match home_score.cmp(&visitor_score) {
        Ordering::Less => (CounterDelta::Loss, CounterDelta::Win),
        Ordering::Greater => (CounterDelta::Win, CounterDelta::Loss),
        Ordering::Equal => (CounterDelta::Tie, CounterDelta::Tie),
    }
}
