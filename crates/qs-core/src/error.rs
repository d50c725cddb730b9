//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `#[from]` or keep them separate.  All errors in the
//! simulator are fail-fast: a single inconsistent event invalidates the
//! deterministic ordering guarantee for the rest of the run, so nothing is
//! recovered locally.

use thiserror::Error;

/// The top-level error type for `qs-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid service time {0}: must be finite and non-negative")]
    InvalidServiceTime(f64),

    #[error("job arrival time recorded twice")]
    ArrivalAlreadyRecorded,

    #[error("job departure time recorded twice")]
    DepartureAlreadyRecorded,

    #[error("job departure recorded before its arrival")]
    DepartureBeforeArrival,
}

/// Shorthand result type for `qs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
