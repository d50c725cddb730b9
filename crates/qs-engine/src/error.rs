//! Error types for qs-engine.

use qs_core::{CoreError, JobId, ProcessorId};
use thiserror::Error;

/// Errors raised by the calendar and the simulation loop.
///
/// All of them signal a scheduling-logic bug (or bad injected input) and are
/// fatal to the run: state after a skipped causality violation cannot be
/// trusted, so nothing is recovered locally.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An event was scheduled in the simulated past.
    #[error("causality violation: event scheduled at t={scheduled} but clock is already at t={now}")]
    Causality { scheduled: f64, now: f64 },

    /// Unconditional `next()` on an empty calendar.  `run_to_exhaustion`
    /// checks emptiness itself and never raises this.
    #[error("no pending events in the calendar")]
    EmptyCalendar,

    /// The simulation was built with an empty processor pool.
    #[error("processor count must be positive")]
    NoProcessors,

    /// An event referenced a job id outside the simulation's job table.
    #[error("event references unknown job {0}")]
    UnknownJob(JobId),

    /// An event referenced a processor id outside the processor table.
    #[error("event references unknown processor {0}")]
    UnknownProcessor(ProcessorId),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;
