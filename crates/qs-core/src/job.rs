//! Jobs: the entities that flow through the queueing system.
//!
//! A [`Job`] is created before the run with a fixed service duration and
//! priority class; the run fills in its arrival and departure timestamps
//! exactly once each.  After departure the job is an immutable record used
//! only for reporting.

use crate::error::{CoreError, CoreResult};
use crate::time::SimTime;

// ── Priority ──────────────────────────────────────────────────────────────────

/// Two-class, non-preemptive job priority.
///
/// The class is fixed at creation and never changes while the job waits
/// (no aging).  Priority only affects which *waiting* job is dispatched when
/// a processor frees — it never interrupts a job already in service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    #[default]
    Normal,
    Priority,
}

impl Priority {
    /// The 0/1 flag used in the persisted result format.
    #[inline]
    pub fn flag(self) -> u8 {
        match self {
            Priority::Normal => 0,
            Priority::Priority => 1,
        }
    }

    /// Inverse of [`flag`](Priority::flag): any non-zero flag is `Priority`.
    #[inline]
    pub fn from_flag(flag: u8) -> Priority {
        if flag == 0 { Priority::Normal } else { Priority::Priority }
    }
}

// ── JobSpec ───────────────────────────────────────────────────────────────────

/// Driver-facing per-job parameters: when it arrives, how long it takes,
/// and which class it belongs to.
///
/// Produced in bulk by `qs-workload` or hand-written in tests; consumed by
/// the engine's simulation builder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSpec {
    pub arrival_time: f64,
    pub service_time: f64,
    pub priority:     Priority,
}

// ── JobReport ─────────────────────────────────────────────────────────────────

/// The pair of timestamps a completed job reports for offline analysis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobReport {
    pub arrival:   SimTime,
    pub departure: SimTime,
}

// ── Job ───────────────────────────────────────────────────────────────────────

/// One unit of work: a fixed service duration, a priority class, and the
/// arrival/departure timestamps filled in during the run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    service_time:   f64,
    priority:       Priority,
    arrival_time:   Option<SimTime>,
    departure_time: Option<SimTime>,
}

impl Job {
    /// Create a job with the given service duration and priority class.
    ///
    /// Rejects non-finite or negative service times: a negative duration
    /// would schedule the processor's free event in the simulated past and
    /// abort the run anyway, so the bad value is caught at the boundary.
    pub fn new(service_time: f64, priority: Priority) -> CoreResult<Job> {
        if !service_time.is_finite() || service_time < 0.0 {
            return Err(CoreError::InvalidServiceTime(service_time));
        }
        Ok(Job {
            service_time,
            priority,
            arrival_time:   None,
            departure_time: None,
        })
    }

    #[inline]
    pub fn service_time(&self) -> f64 {
        self.service_time
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Record the instant the job entered the system.  Callable exactly once.
    pub fn mark_arrival(&mut self, time: SimTime) -> CoreResult<()> {
        if self.arrival_time.is_some() {
            return Err(CoreError::ArrivalAlreadyRecorded);
        }
        self.arrival_time = Some(time);
        Ok(())
    }

    /// Record the instant service completes.  Callable exactly once, and
    /// only after [`mark_arrival`](Job::mark_arrival).
    pub fn mark_departure(&mut self, time: SimTime) -> CoreResult<()> {
        if self.arrival_time.is_none() {
            return Err(CoreError::DepartureBeforeArrival);
        }
        if self.departure_time.is_some() {
            return Err(CoreError::DepartureAlreadyRecorded);
        }
        self.departure_time = Some(time);
        Ok(())
    }

    /// Arrival and departure timestamps, once both have been recorded.
    ///
    /// Idempotent: after departure, every call returns the identical pair.
    pub fn report(&self) -> Option<JobReport> {
        Some(JobReport {
            arrival:   self.arrival_time?,
            departure: self.departure_time?,
        })
    }

    /// The instant service began: departure minus service duration.
    ///
    /// `None` until the job has departed.
    pub fn service_start(&self) -> Option<SimTime> {
        Some(self.departure_time?.offset(-self.service_time))
    }

    /// `true` once the job has left the system.
    #[inline]
    pub fn departed(&self) -> bool {
        self.departure_time.is_some()
    }
}
