use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// The steps of the score submission workflow, in execution order
///
/// A repository failure carries the step it occurred at, so a partial
/// update is attributable to a specific point in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStep {
    /// Fetching the scheduled game
    Lookup,
    /// Writing the submitted scores to the game record
    PersistScore,
    /// Applying the home team's outcome delta
    ApplyHome,
    /// Applying the visitor team's outcome delta
    ApplyVisitor,
}

impl std::fmt::Display for SubmissionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStep::Lookup => write!(f, "game lookup"),
            SubmissionStep::PersistScore => write!(f, "score persistence"),
            SubmissionStep::ApplyHome => write!(f, "home standings update"),
            SubmissionStep::ApplyVisitor => write!(f, "visitor standings update"),
        }
    }
}

/// Errors that can occur while submitting a score
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("scores must be non-negative, got {home} and {visitor}")]
    InvalidScore { home: i64, visitor: i64 },

    #[error("game {0} already has a recorded score")]
    AlreadyScored(i64),

    #[error("{step} failed: {source}")]
    Step {
        step: SubmissionStep,
        #[source]
        source: RepositoryError,
    },
}

impl SubmissionError {
    /// Wraps a repository failure with the step it occurred at
    pub fn at(step: SubmissionStep, source: RepositoryError) -> Self {
        Self::Step { step, source }
    }

    /// The step this error occurred at, if it came from a repository call
    pub fn step(&self) -> Option<SubmissionStep> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_errors_name_the_step() {
        let err = SubmissionError::at(
            SubmissionStep::ApplyVisitor,
            RepositoryError::TeamNotFound("Cubs".to_string()),
        );

        assert_eq!(err.step(), Some(SubmissionStep::ApplyVisitor));
        let message = err.to_string();
        assert!(message.contains("visitor standings update"));
    }

    #[test]
    fn guard_errors_carry_no_step() {
        assert_eq!(SubmissionError::AlreadyScored(3).step(), None);
        assert_eq!(
            SubmissionError::InvalidScore { home: -1, visitor: 2 }.step(),
            None
        );
    }
}
