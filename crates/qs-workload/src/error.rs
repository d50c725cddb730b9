//! Error types for qs-workload.

use thiserror::Error;

/// Errors raised when validating or sampling a workload configuration.
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("normal job count must be at least 1")]
    ZeroJobs,

    #[error("priority denominator must be at least 1")]
    ZeroDenominator,

    #[error("arrival horizon must be positive, got {0}")]
    NonPositiveHorizon(f64),

    #[error("service spread must be non-negative, got {0}")]
    NegativeSpread(f64),

    #[error("mean service time must be finite, got {0}")]
    NonFiniteMean(f64),
}

/// Alias for `Result<T, WorkloadError>`.
pub type WorkloadResult<T> = Result<T, WorkloadError>;
