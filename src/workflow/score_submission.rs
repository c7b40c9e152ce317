use crate::domain::game::outcome;
use crate::domain::repositories::{ScheduleRepository, StandingsRepository};

use super::errors::{SubmissionError, SubmissionResult, SubmissionStep};

/// The standings-update transaction
///
/// Orchestrates one score submission as an explicit step sequence:
/// lookup, score persistence, outcome resolution, then one standings
/// update per side. Terminal on success or on the first failing step.
///
/// Steps that already ran are not rolled back when a later step fails;
/// the error names the failing step so the resulting partial state is
/// attributable. On success the game's stored scores equal the submitted
/// values and each team's counters reflect exactly one new outcome event.
pub struct ScoreSubmission<'a> {
    schedule: &'a dyn ScheduleRepository,
    standings: &'a dyn StandingsRepository,
}

impl<'a> ScoreSubmission<'a> {
    /// Creates a workflow over the injected repositories
    pub fn new(
        schedule: &'a dyn ScheduleRepository,
        standings: &'a dyn StandingsRepository,
    ) -> Self {
        Self {
            schedule,
            standings,
        }
    }

    /// Submit a final score for a scheduled game
    ///
    /// Rejects negative scores and games that already have a recorded
    /// score before anything is written; after that, repository failures
    /// surface with the step they occurred at.
    pub async fn submit(
        &self,
        game_number: i64,
        home_score: i64,
        visitor_score: i64,
    ) -> SubmissionResult<()> {
        if home_score < 0 || visitor_score < 0 {
            return Err(SubmissionError::InvalidScore {
                home: home_score,
                visitor: visitor_score,
            });
        }

        let game = self
            .schedule
            .find_game(game_number)
            .await
            .map_err(|e| SubmissionError::at(SubmissionStep::Lookup, e))?;

        if game.is_played() {
            return Err(SubmissionError::AlreadyScored(game_number));
        }

        self.schedule
            .record_score(game_number, home_score, visitor_score)
            .await
            .map_err(|e| SubmissionError::at(SubmissionStep::PersistScore, e))?;

        let (home_delta, visitor_delta) = outcome::resolve(home_score, visitor_score);

        self.standings
            .apply_delta(game.home_team(), home_delta)
            .await
            .map_err(|e| SubmissionError::at(SubmissionStep::ApplyHome, e))?;

        self.standings
            .apply_delta(game.visitor_team(), visitor_delta)
            .await
            .map_err(|e| SubmissionError::at(SubmissionStep::ApplyVisitor, e))?;

        tracing::info!(
            game = game_number,
            home = game.home_team(),
            visitor = game.visitor_team(),
            home_delta = %home_delta,
            visitor_delta = %visitor_delta,
            "recorded final score {home_score}-{visitor_score}"
        );

        Ok(())
    }
}
