//! The closed set of event variants.
//!
//! Each variant names its target server implicitly: arrivals and freed
//! processors are delivered to the queueing system, job hand-offs to the
//! named processor.  Processing an event performs exactly one such delivery;
//! any further events come out of that delivery, never from the event
//! itself.
//!
//! Events carry ids, not borrows — the pending set must outlive any single
//! event's processing, and ids keep it `'static`.  An event is immutable
//! once created and consumed exactly once by the calendar loop.

use std::fmt;

use qs_core::{JobId, ProcessorId};

/// A scheduled unit of work.  The timestamp lives in the calendar entry,
/// not here; the variant holds only its own payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A job enters the system: record its arrival time, then deliver it to
    /// the queueing system.
    JobArrival { job: JobId },

    /// A job is handed to a free processor, which begins service at once.
    JobToProcessor { processor: ProcessorId, job: JobId },

    /// A processor finished its job and reports back to the queueing system.
    ProcessorFree { processor: ProcessorId },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::JobArrival { job } => write!(f, "arrival of {job}"),
            Event::JobToProcessor { processor, job } => {
                write!(f, "{job} dispatched to {processor}")
            }
            Event::ProcessorFree { processor } => write!(f, "{processor} free"),
        }
    }
}
