use thiserror::Error;

/// Errors surfaced by repository operations
///
/// Repository calls fail fast with one of these; nothing is retried or
/// suppressed at this layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no game with number {0} on the schedule")]
    GameNotFound(i64),

    #[error("no team named '{0}' on the roster")]
    TeamNotFound(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
