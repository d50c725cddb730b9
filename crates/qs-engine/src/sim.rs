//! The `Simulation` struct and its event loop.

use qs_core::{Job, SimTime};

use crate::calendar::Calendar;
use crate::error::{EngineError, EngineResult};
use crate::event::Event;
use crate::observer::SimObserver;
use crate::processor::Processor;
use crate::queueing::QueueingSystem;

/// The main simulation runner.
///
/// Owns the calendar, the queueing system, and the job and processor tables;
/// everything else borrows from it for the duration of one event.  The loop
/// is the Rust shape of "every server holds the shared calendar": instead of
/// a shared mutable reference in each server, the loop passes `&mut Calendar`
/// into whichever server the current event targets.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder], which seeds
/// the initial free-processor and arrival events.
pub struct Simulation {
    calendar:   Calendar,
    queueing:   QueueingSystem,
    processors: Vec<Processor>,
    jobs:       Vec<Job>,
}

impl Simulation {
    pub(crate) fn from_parts(
        calendar:   Calendar,
        queueing:   QueueingSystem,
        processors: Vec<Processor>,
        jobs:       Vec<Job>,
    ) -> Simulation {
        Simulation { calendar, queueing, processors, jobs }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Pop and process events until none remain.
    ///
    /// Returns the final clock value — the timestamp of the last processed
    /// event, or the unchanged clock for an already-empty calendar.
    pub fn run_to_exhaustion<O: SimObserver>(&mut self, observer: &mut O) -> EngineResult<SimTime> {
        while !self.calendar.is_empty() {
            self.step(observer)?;
        }
        let final_time = self.calendar.current_time();
        observer.on_run_end(final_time);
        Ok(final_time)
    }

    /// Pop and process events while their timestamp is `<= horizon`.
    ///
    /// Events strictly beyond the horizon are never popped, so the clock
    /// never overshoots and all state — pending events included — remains
    /// valid for a later `run_until` or `run_to_exhaustion` call.
    pub fn run_until<O: SimObserver>(
        &mut self,
        horizon:  SimTime,
        observer: &mut O,
    ) -> EngineResult<()> {
        while let Some(next_time) = self.calendar.peek_time() {
            if next_time > horizon {
                break;
            }
            self.step(observer)?;
        }
        observer.on_run_end(self.calendar.current_time());
        Ok(())
    }

    /// Pop and process exactly one event.
    ///
    /// Fails with [`EngineError::EmptyCalendar`] when nothing is pending.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        let (time, event) = self.calendar.next()?;
        self.dispatch(event)?;
        observer.on_event(time, &event);
        Ok(())
    }

    // ── Event dispatch ────────────────────────────────────────────────────

    /// Deliver one event to its target server.
    ///
    /// Each variant performs exactly one delegation; any new events come out
    /// of that delegation.  Ids are bounds-checked so a hand-seeded bad
    /// event surfaces as an error, not a panic.
    fn dispatch(&mut self, event: Event) -> EngineResult<()> {
        match event {
            Event::JobArrival { job } => {
                let now = self.calendar.current_time();
                let entry = self
                    .jobs
                    .get_mut(job.index())
                    .ok_or(EngineError::UnknownJob(job))?;
                entry.mark_arrival(now)?;
                let priority = entry.priority();
                self.queueing.new_job(job, priority, &mut self.calendar)
            }

            Event::JobToProcessor { processor, job } => {
                let entry = self
                    .jobs
                    .get_mut(job.index())
                    .ok_or(EngineError::UnknownJob(job))?;
                self.processors
                    .get_mut(processor.index())
                    .ok_or(EngineError::UnknownProcessor(processor))?
                    .attend(processor, entry, &mut self.calendar)
            }

            Event::ProcessorFree { processor } => {
                if processor.index() >= self.processors.len() {
                    return Err(EngineError::UnknownProcessor(processor));
                }
                self.queueing.free_processor(processor, &mut self.calendar)
            }
        }
    }

    // ── Accessors for reporting ───────────────────────────────────────────

    /// The current simulation clock.
    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.calendar.current_time()
    }

    /// All jobs, in creation order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// All processors, in creation order.
    pub fn processors(&self) -> &[Processor] {
        &self.processors
    }

    /// The event calendar (pending count, clock, manual `put` in tests).
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Mutable calendar access, for drivers that inject extra events.
    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    /// The queueing system's observable state (pool size, queue lengths).
    pub fn queueing(&self) -> &QueueingSystem {
        &self.queueing
    }
}
