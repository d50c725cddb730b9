//! `Calendar` — the time-ordered pending-event store and the simulation's
//! monotonic clock.
//!
//! # Ordering
//!
//! The heap is keyed by `(timestamp, insertion sequence)`.  The sequence
//! component makes equal-timestamp ordering deterministic (FIFO among ties):
//! repeated runs with identical inputs produce identical event orderings,
//! which a bare binary heap over timestamps alone would not guarantee.
//!
//! # Causality
//!
//! The clock equals the timestamp of the most recently removed event (0.0
//! before any removal) and never decreases.  [`Calendar::put`] rejects any
//! event scheduled strictly before the clock — an event in the simulated
//! past can never be correctly processed.  Scheduling *at* the current
//! instant is allowed and common (a freed processor picks up a waiting job
//! "now").

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use qs_core::SimTime;

use crate::error::{EngineError, EngineResult};
use crate::event::Event;

/// One pending entry: composite sort key plus payload.
///
/// Ordered by `(time, seq)` only — the payload never participates.  `seq` is
/// unique per calendar, so the order is total and two entries compare equal
/// only if they are the same entry.
#[derive(Clone, Debug)]
struct ScheduledEvent {
    time:  SimTime,
    seq:   u64,
    event: Event,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Time-ordered multiset of pending events plus the monotonic clock.
#[derive(Debug, Default)]
pub struct Calendar {
    pending:      BinaryHeap<Reverse<ScheduledEvent>>,
    current_time: SimTime,
    next_seq:     u64,
}

impl Calendar {
    /// An empty calendar with the clock at 0.0.
    pub fn new() -> Calendar {
        Calendar::default()
    }

    /// The current simulation time: the timestamp of the most recently
    /// removed event, or 0.0 before any removal.  Non-decreasing.
    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    /// Insert an event to fire at `time`.
    ///
    /// Fails with [`EngineError::Causality`] iff `time` precedes the current
    /// clock.  No other validation — the calendar does not know what ids
    /// mean.
    pub fn put(&mut self, time: SimTime, event: Event) -> EngineResult<()> {
        if time < self.current_time {
            return Err(EngineError::Causality {
                scheduled: time.as_secs(),
                now:       self.current_time.as_secs(),
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(ScheduledEvent { time, seq, event }));
        Ok(())
    }

    /// Remove and return the earliest pending event, advancing the clock to
    /// its timestamp.
    ///
    /// Fails with [`EngineError::EmptyCalendar`] when nothing is pending;
    /// callers wanting a finite run should drain via the simulation loop,
    /// which checks emptiness itself.
    pub fn next(&mut self) -> EngineResult<(SimTime, Event)> {
        let Reverse(entry) = self.pending.pop().ok_or(EngineError::EmptyCalendar)?;
        self.current_time = entry.time;
        Ok((entry.time, entry.event))
    }

    /// Timestamp of the earliest pending event without removing it.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.pending.peek().map(|Reverse(entry)| entry.time)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
