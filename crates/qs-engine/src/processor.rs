//! `Processor` — serves one job at a time and accumulates statistics.
//!
//! # Idle-time measurement boundary
//!
//! An idle interval is recorded retroactively, when the *next* job starts:
//! it is the gap between the previous finish (0.0 for a fresh processor) and
//! the new service start.  Consequently the trailing idle stretch after a
//! processor's last job — or the whole run, for a processor that never
//! serves — is never recorded.  This is an inherent property of the
//! measurement, kept as-is so reported totals stay comparable across runs.

use qs_core::{Job, Priority, ProcessorId, SimTime};

use crate::calendar::Calendar;
use crate::error::EngineResult;
use crate::event::Event;

/// One processing resource: a server that executes jobs back to back.
#[derive(Debug, Default)]
pub struct Processor {
    idle_intervals:        Vec<f64>,
    last_finish_time:      SimTime,
    served_count:          u64,
    priority_served_count: u64,
}

impl Processor {
    pub fn new() -> Processor {
        Processor::default()
    }

    /// Begin serving `job` at the calendar's current instant.
    ///
    /// Records the idle gap since the last finish, stamps the job's
    /// departure at `now + service_time`, and schedules the matching
    /// [`Event::ProcessorFree`] at that instant.  `id` is this processor's
    /// own id, threaded through so the free event can name it.
    pub fn attend(
        &mut self,
        id:  ProcessorId,
        job: &mut Job,
        cal: &mut Calendar,
    ) -> EngineResult<()> {
        let now = cal.current_time();
        self.idle_intervals.push(now.since(self.last_finish_time));

        let finish = now.offset(job.service_time());
        job.mark_departure(finish)?;
        cal.put(finish, Event::ProcessorFree { processor: id })?;

        self.last_finish_time = finish;
        self.served_count += 1;
        if job.priority() == Priority::Priority {
            self.priority_served_count += 1;
        }
        Ok(())
    }

    /// All recorded idle intervals, in service order.  Append-only; see the
    /// module docs for what is *not* in here.
    pub fn idle_intervals(&self) -> &[f64] {
        &self.idle_intervals
    }

    /// Sum of all recorded idle intervals.
    pub fn total_idle_time(&self) -> f64 {
        self.idle_intervals.iter().sum()
    }

    /// Jobs served so far.
    #[inline]
    pub fn served_count(&self) -> u64 {
        self.served_count
    }

    /// Priority-class jobs served so far.
    #[inline]
    pub fn priority_served_count(&self) -> u64 {
        self.priority_served_count
    }

    /// Instant this processor last finished a job (0.0 if it never served).
    #[inline]
    pub fn last_finish_time(&self) -> SimTime {
        self.last_finish_time
    }
}
