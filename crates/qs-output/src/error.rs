//! Error types for qs-output.

use thiserror::Error;

/// Errors that can occur when collecting or writing simulation results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("write error: {0}")]
    Csv(#[from] csv::Error),

    /// A job never received both timestamps — the run did not complete.
    #[error("job {index} has no complete report; did the run finish?")]
    IncompleteJob { index: usize },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
