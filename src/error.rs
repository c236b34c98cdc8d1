//! Errors surfaced by the tournament engine.

/// Everything that can stop a tournament or a report from being produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("round robin needs at least 2 strategies, got {count}")]
    TooFewStrategies { count: usize },
    #[error("games per series must be at least 1")]
    ZeroGamesPerSeries,
    #[error("winning score must be at least 1")]
    ZeroWinScore,
    #[error("worker {worker} panicked before reporting")]
    WorkerFailed { worker: usize },
    #[error("expected {expected} worker reports, received {received}")]
    MissingReports { expected: usize, received: usize },
    #[error("cannot compute ratios of an empty total")]
    EmptyRatio,
}

pub type Result<T> = std::result::Result<T, TournamentError>;
