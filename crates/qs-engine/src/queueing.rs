//! `QueueingSystem` — the dispatch policy.
//!
//! Holds the pool of idle processors and the two waiting lines.  The policy
//! is strictly FIFO within each class; a freed processor always takes the
//! front priority job over any normal job, but never interrupts service
//! already in progress (non-preemptive), and a waiting job's class never
//! changes (no aging).
//!
//! At any instant a processor is in at most one of {free pool, actively
//! serving}; a job is in at most one of {a waiting line, in service,
//! departed}.  Both invariants hold structurally: ids enter these queues
//! only when the corresponding entity leaves its previous state, and leave
//! them only via a scheduled hand-off event.

use std::collections::VecDeque;

use qs_core::{JobId, Priority, ProcessorId};

use crate::calendar::Calendar;
use crate::error::EngineResult;
use crate::event::Event;

/// Free-processor pool plus the two FIFO waiting lines.
#[derive(Debug, Default)]
pub struct QueueingSystem {
    free_pool:      VecDeque<ProcessorId>,
    priority_queue: VecDeque<JobId>,
    normal_queue:   VecDeque<JobId>,
}

impl QueueingSystem {
    pub fn new() -> QueueingSystem {
        QueueingSystem::default()
    }

    /// A job has arrived.  Hand it straight to a free processor if one is
    /// parked, otherwise enqueue it behind its class.
    ///
    /// The hand-off is itself an event, scheduled at the calendar's current
    /// instant — service never starts behind the dispatcher's back.
    pub fn new_job(
        &mut self,
        job:      JobId,
        priority: Priority,
        cal:      &mut Calendar,
    ) -> EngineResult<()> {
        match self.free_pool.pop_front() {
            Some(processor) => {
                cal.put(cal.current_time(), Event::JobToProcessor { processor, job })
            }
            None => {
                match priority {
                    Priority::Priority => self.priority_queue.push_back(job),
                    Priority::Normal => self.normal_queue.push_back(job),
                }
                Ok(())
            }
        }
    }

    /// A processor has finished (or was seeded free at t=0).  Give it the
    /// front waiting job — priority class first — or park it in the pool.
    pub fn free_processor(
        &mut self,
        processor: ProcessorId,
        cal:       &mut Calendar,
    ) -> EngineResult<()> {
        let job = self
            .priority_queue
            .pop_front()
            .or_else(|| self.normal_queue.pop_front());

        match job {
            Some(job) => cal.put(cal.current_time(), Event::JobToProcessor { processor, job }),
            None => {
                self.free_pool.push_back(processor);
                Ok(())
            }
        }
    }

    /// Number of parked (idle) processors.
    pub fn free_count(&self) -> usize {
        self.free_pool.len()
    }

    /// Waiting jobs per class as `(priority, normal)`.
    pub fn queue_lengths(&self) -> (usize, usize) {
        (self.priority_queue.len(), self.normal_queue.len())
    }
}
