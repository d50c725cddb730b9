//! Fluent builder for constructing a [`Simulation`].

use qs_core::{Job, JobId, JobSpec, ProcessorId, SimTime};

use crate::calendar::Calendar;
use crate::error::{EngineError, EngineResult};
use crate::event::Event;
use crate::processor::Processor;
use crate::queueing::QueueingSystem;
use crate::sim::Simulation;

/// Fluent builder for [`Simulation`].
///
/// Seeds the calendar the way the driver contract requires: one
/// [`Event::ProcessorFree`] per processor at t=0 (every processor starts
/// ready to work) and one [`Event::JobArrival`] per job at its arrival
/// instant.  Arrival times need not be pre-sorted — the calendar orders
/// events itself — but negative ones fail the causality check here rather
/// than mid-run.
///
/// # Example
///
/// ```rust,ignore
/// let specs = vec![
///     JobSpec { arrival_time: 0.0, service_time: 5.0, priority: Priority::Normal },
///     JobSpec { arrival_time: 1.0, service_time: 3.0, priority: Priority::Priority },
/// ];
/// let mut sim = SimulationBuilder::new(1).jobs(specs).build()?;
/// let total = sim.run_to_exhaustion(&mut NoopObserver)?;
/// ```
pub struct SimulationBuilder {
    processor_count: usize,
    specs:           Vec<JobSpec>,
}

impl SimulationBuilder {
    /// Start a build with `processor_count` processors and no jobs.
    pub fn new(processor_count: usize) -> SimulationBuilder {
        SimulationBuilder {
            processor_count,
            specs: Vec::new(),
        }
    }

    /// Supply the full job list: one `(arrival, service, priority)` triple
    /// per job.  Jobs are created (and reported) in this order.
    pub fn jobs(mut self, specs: Vec<JobSpec>) -> SimulationBuilder {
        self.specs = specs;
        self
    }

    /// Validate inputs, seed the initial events, and return a ready-to-run
    /// [`Simulation`].
    pub fn build(self) -> EngineResult<Simulation> {
        if self.processor_count == 0 {
            return Err(EngineError::NoProcessors);
        }

        let mut calendar = Calendar::new();
        let queueing = QueueingSystem::new();

        // ── Processors: all seeded free at t=0 ────────────────────────────
        let processors: Vec<Processor> =
            (0..self.processor_count).map(|_| Processor::new()).collect();
        for i in 0..self.processor_count {
            let processor = ProcessorId(i as u32);
            calendar.put(SimTime::ZERO, Event::ProcessorFree { processor })?;
        }

        // ── Jobs: validated, then one arrival event each ──────────────────
        let mut jobs = Vec::with_capacity(self.specs.len());
        for (i, spec) in self.specs.iter().enumerate() {
            jobs.push(Job::new(spec.service_time, spec.priority)?);
            let job = JobId(i as u32);
            calendar.put(SimTime(spec.arrival_time), Event::JobArrival { job })?;
        }

        Ok(Simulation::from_parts(calendar, queueing, processors, jobs))
    }
}
