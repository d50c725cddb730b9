//! Integration tests for qs-engine.

use qs_core::{JobId, JobSpec, Priority, ProcessorId, SimTime};

use crate::{
    Calendar, Event, NoopObserver, SimObserver, Simulation, SimulationBuilder,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn spec(arrival: f64, service: f64, priority: Priority) -> JobSpec {
    JobSpec {
        arrival_time: arrival,
        service_time: service,
        priority,
    }
}

fn build(processors: usize, specs: Vec<JobSpec>) -> Simulation {
    SimulationBuilder::new(processors)
        .jobs(specs)
        .build()
        .expect("valid simulation inputs")
}

/// Observer that records every processed event in order.
#[derive(Default)]
struct EventLog {
    entries:  Vec<(SimTime, Event)>,
    run_ends: usize,
}

impl SimObserver for EventLog {
    fn on_event(&mut self, time: SimTime, event: &Event) {
        self.entries.push((time, *event));
    }
    fn on_run_end(&mut self, _final_time: SimTime) {
        self.run_ends += 1;
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod calendar_tests {
    use super::*;
    use crate::EngineError;

    fn arrival(job: u32) -> Event {
        Event::JobArrival { job: JobId(job) }
    }

    #[test]
    fn pops_in_timestamp_order() {
        let mut cal = Calendar::new();
        cal.put(SimTime(3.0), arrival(3)).unwrap();
        cal.put(SimTime(1.0), arrival(1)).unwrap();
        cal.put(SimTime(2.0), arrival(2)).unwrap();

        let mut last = SimTime::ZERO;
        for expected in [1, 2, 3] {
            let (time, event) = cal.next().unwrap();
            assert!(time >= last, "timestamps must be non-decreasing");
            assert_eq!(cal.current_time(), time);
            assert_eq!(event, arrival(expected));
            last = time;
        }
    }

    #[test]
    fn equal_timestamps_pop_in_insertion_order() {
        let mut cal = Calendar::new();
        for job in 0..5 {
            cal.put(SimTime(7.0), arrival(job)).unwrap();
        }
        for job in 0..5 {
            let (_, event) = cal.next().unwrap();
            assert_eq!(event, arrival(job));
        }
    }

    #[test]
    fn put_in_the_past_is_a_causality_violation() {
        let mut cal = Calendar::new();
        cal.put(SimTime(5.0), arrival(0)).unwrap();
        cal.next().unwrap(); // clock now at 5.0

        let err = cal.put(SimTime(4.0), arrival(1)).unwrap_err();
        assert!(matches!(err, EngineError::Causality { scheduled, now }
            if scheduled == 4.0 && now == 5.0));
    }

    #[test]
    fn put_at_current_time_is_allowed() {
        let mut cal = Calendar::new();
        cal.put(SimTime(5.0), arrival(0)).unwrap();
        cal.next().unwrap();
        assert!(cal.put(SimTime(5.0), arrival(1)).is_ok());
    }

    #[test]
    fn next_on_empty_calendar_errors() {
        let mut cal = Calendar::new();
        assert!(matches!(cal.next(), Err(EngineError::EmptyCalendar)));
    }

    #[test]
    fn clock_starts_at_zero() {
        let cal = Calendar::new();
        assert_eq!(cal.current_time(), SimTime::ZERO);
        assert!(cal.is_empty());
        assert_eq!(cal.peek_time(), None);
    }

    #[test]
    fn peek_does_not_advance_clock() {
        let mut cal = Calendar::new();
        cal.put(SimTime(2.0), arrival(0)).unwrap();
        assert_eq!(cal.peek_time(), Some(SimTime(2.0)));
        assert_eq!(cal.current_time(), SimTime::ZERO);
        assert_eq!(cal.len(), 1);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::EngineError;

    #[test]
    fn zero_processors_rejected() {
        let result = SimulationBuilder::new(0).build();
        assert!(matches!(result, Err(EngineError::NoProcessors)));
    }

    #[test]
    fn seeds_one_event_per_processor_and_job() {
        let sim = build(3, vec![
            spec(0.5, 1.0, Priority::Normal),
            spec(1.5, 1.0, Priority::Priority),
        ]);
        // 3 ProcessorFree at t=0 plus 2 JobArrival.
        assert_eq!(sim.calendar().len(), 5);
        assert_eq!(sim.jobs().len(), 2);
        assert_eq!(sim.processors().len(), 3);
    }

    #[test]
    fn negative_service_time_rejected() {
        let result = SimulationBuilder::new(1)
            .jobs(vec![spec(0.0, -2.0, Priority::Normal)])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn negative_arrival_time_rejected() {
        let result = SimulationBuilder::new(1)
            .jobs(vec![spec(-1.0, 2.0, Priority::Normal)])
            .build();
        assert!(matches!(result, Err(EngineError::Causality { .. })));
    }

    #[test]
    fn unsorted_arrivals_accepted() {
        // The calendar orders events itself; input order only fixes JobIds.
        let mut sim = build(1, vec![
            spec(5.0, 1.0, Priority::Normal),
            spec(2.0, 1.0, Priority::Normal),
        ]);
        sim.run_to_exhaustion(&mut NoopObserver).unwrap();
        assert_eq!(sim.jobs()[1].report().unwrap().arrival, SimTime(2.0));
        assert_eq!(sim.jobs()[0].report().unwrap().arrival, SimTime(5.0));
    }
}

// ── Scenario runs ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// Single processor, two jobs: the priority job arrives while the first
    /// is in service and is dispatched the instant the processor frees.
    #[test]
    fn single_processor_priority_waits_then_goes_first() {
        let mut sim = build(1, vec![
            spec(0.0, 5.0, Priority::Normal),
            spec(1.0, 3.0, Priority::Priority),
        ]);
        let total = sim.run_to_exhaustion(&mut NoopObserver).unwrap();

        let j0 = sim.jobs()[0].report().unwrap();
        assert_eq!(j0.arrival, SimTime(0.0));
        assert_eq!(j0.departure, SimTime(5.0));
        assert_eq!(sim.jobs()[0].service_start(), Some(SimTime(0.0)));

        let j1 = sim.jobs()[1].report().unwrap();
        assert_eq!(j1.arrival, SimTime(1.0));
        assert_eq!(j1.departure, SimTime(8.0));
        assert_eq!(sim.jobs()[1].service_start(), Some(SimTime(5.0)));

        // The processor never stood free with nothing queued.
        let p = &sim.processors()[0];
        assert_eq!(p.served_count(), 2);
        assert_eq!(p.priority_served_count(), 1);
        assert_eq!(p.total_idle_time(), 0.0);

        // Final clock is the last ProcessorFree at t=8.
        assert_eq!(total, SimTime(8.0));
    }

    /// Two processors, one job: the first-parked processor serves it; the
    /// other's trailing idle stretch is never recorded.
    #[test]
    fn first_parked_processor_serves() {
        let mut sim = build(2, vec![spec(0.0, 2.0, Priority::Normal)]);
        sim.run_to_exhaustion(&mut NoopObserver).unwrap();

        let p0 = &sim.processors()[0];
        let p1 = &sim.processors()[1];
        assert_eq!(p0.served_count(), 1);
        assert_eq!(p0.idle_intervals(), &[0.0]);
        assert_eq!(p1.served_count(), 0);
        assert!(p1.idle_intervals().is_empty(), "trailing idle is unrecorded");
    }

    #[test]
    fn idle_interval_recorded_between_spaced_jobs() {
        // One processor, two arrivals with a gap: busy 0..=2, idle 2..5,
        // busy 5..=6.  Idle intervals: [0.0] at first start, [3.0] at second.
        let mut sim = build(1, vec![
            spec(0.0, 2.0, Priority::Normal),
            spec(5.0, 1.0, Priority::Normal),
        ]);
        sim.run_to_exhaustion(&mut NoopObserver).unwrap();

        let p = &sim.processors()[0];
        assert_eq!(p.idle_intervals(), &[0.0, 3.0]);
        assert_eq!(p.total_idle_time(), 3.0);
    }

    #[test]
    fn zero_service_time_departs_immediately() {
        let mut sim = build(1, vec![spec(1.0, 0.0, Priority::Normal)]);
        sim.run_to_exhaustion(&mut NoopObserver).unwrap();
        let report = sim.jobs()[0].report().unwrap();
        assert_eq!(report.arrival, SimTime(1.0));
        assert_eq!(report.departure, SimTime(1.0));
    }

    #[test]
    fn empty_job_list_drains_seed_events_only() {
        let mut sim = build(2, vec![]);
        let total = sim.run_to_exhaustion(&mut NoopObserver).unwrap();
        assert_eq!(total, SimTime::ZERO);
        assert_eq!(sim.queueing().free_count(), 2);
    }
}

// ── Dispatch policy ───────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;

    /// With both classes waiting when the processor frees, the priority job
    /// goes first even though the normal job has waited longer.
    #[test]
    fn priority_class_preferred_over_earlier_normal() {
        let mut sim = build(1, vec![
            spec(0.0, 10.0, Priority::Normal),   // in service until t=10
            spec(1.0, 1.0, Priority::Normal),    // waits from t=1
            spec(2.0, 1.0, Priority::Priority),  // waits from t=2, goes first
        ]);
        sim.run_to_exhaustion(&mut NoopObserver).unwrap();

        assert_eq!(sim.jobs()[2].service_start(), Some(SimTime(10.0)));
        assert_eq!(sim.jobs()[1].service_start(), Some(SimTime(11.0)));
    }

    #[test]
    fn fifo_within_each_class() {
        let mut sim = build(1, vec![
            spec(0.0, 5.0, Priority::Normal),
            spec(1.0, 1.0, Priority::Priority),
            spec(2.0, 1.0, Priority::Priority),
            spec(1.5, 1.0, Priority::Normal),
            spec(2.5, 1.0, Priority::Normal),
        ]);
        sim.run_to_exhaustion(&mut NoopObserver).unwrap();

        // Priority jobs in arrival order, then normal jobs in arrival order.
        assert_eq!(sim.jobs()[1].service_start(), Some(SimTime(5.0)));
        assert_eq!(sim.jobs()[2].service_start(), Some(SimTime(6.0)));
        assert_eq!(sim.jobs()[3].service_start(), Some(SimTime(7.0)));
        assert_eq!(sim.jobs()[4].service_start(), Some(SimTime(8.0)));
    }

    /// Once a processor starts a job, no other job reaches it before its
    /// free event fires — even if a priority job arrives mid-service.
    #[test]
    fn service_is_never_preempted() {
        let mut log = EventLog::default();
        let mut sim = build(1, vec![
            spec(0.0, 10.0, Priority::Normal),
            spec(1.0, 1.0, Priority::Priority),
            spec(2.0, 1.0, Priority::Priority),
        ]);
        sim.run_to_exhaustion(&mut log).unwrap();

        let mut busy = false;
        for (_, event) in &log.entries {
            match event {
                Event::JobToProcessor { processor, .. } => {
                    assert_eq!(*processor, ProcessorId(0));
                    assert!(!busy, "job dispatched to a busy processor");
                    busy = true;
                }
                Event::ProcessorFree { .. } => busy = false,
                Event::JobArrival { .. } => {}
            }
        }
    }

    /// J arrivals, J dispatches, and served counts summing to J.
    #[test]
    fn event_conservation() {
        let specs: Vec<JobSpec> = (0..20)
            .map(|i| {
                let pr = if i % 3 == 0 { Priority::Priority } else { Priority::Normal };
                spec(i as f64 * 0.7, 1.0 + (i % 5) as f64, pr)
            })
            .collect();
        let job_count = specs.len() as u64;

        let mut log = EventLog::default();
        let mut sim = build(3, specs);
        sim.run_to_exhaustion(&mut log).unwrap();

        let arrivals = log.entries.iter()
            .filter(|(_, e)| matches!(e, Event::JobArrival { .. }))
            .count() as u64;
        let dispatches = log.entries.iter()
            .filter(|(_, e)| matches!(e, Event::JobToProcessor { .. }))
            .count() as u64;
        let served: u64 = sim.processors().iter().map(|p| p.served_count()).sum();

        assert_eq!(arrivals, job_count);
        assert_eq!(dispatches, job_count);
        assert_eq!(served, job_count);
        assert!(sim.jobs().iter().all(|j| j.departed()));
    }

    /// Two identical builds process the identical event sequence.
    #[test]
    fn runs_are_reproducible() {
        let specs = vec![
            spec(0.0, 2.0, Priority::Normal),
            spec(0.0, 2.0, Priority::Priority),
            spec(0.0, 2.0, Priority::Normal),
            spec(2.0, 1.0, Priority::Priority),
        ];

        let mut log_a = EventLog::default();
        build(2, specs.clone()).run_to_exhaustion(&mut log_a).unwrap();
        let mut log_b = EventLog::default();
        build(2, specs).run_to_exhaustion(&mut log_b).unwrap();

        assert_eq!(log_a.entries, log_b.entries);
    }
}

// ── Partial runs ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_until_tests {
    use super::*;

    #[test]
    fn stops_before_events_beyond_horizon() {
        let mut sim = build(1, vec![
            spec(0.0, 5.0, Priority::Normal),
            spec(1.0, 3.0, Priority::Priority),
        ]);
        sim.run_until(SimTime(4.0), &mut NoopObserver).unwrap();

        // Everything through the t=1 arrival has fired; the t=5 free event
        // is still pending and the clock has not overshot the horizon.
        assert_eq!(sim.current_time(), SimTime(1.0));
        assert_eq!(sim.calendar().peek_time(), Some(SimTime(5.0)));
        assert!(!sim.jobs()[1].departed());
    }

    #[test]
    fn resumable_to_same_result_as_full_run() {
        let specs = vec![
            spec(0.0, 5.0, Priority::Normal),
            spec(1.0, 3.0, Priority::Priority),
            spec(6.0, 2.0, Priority::Normal),
        ];

        let mut full = build(1, specs.clone());
        full.run_to_exhaustion(&mut NoopObserver).unwrap();

        let mut staged = build(1, specs);
        staged.run_until(SimTime(4.0), &mut NoopObserver).unwrap();
        staged.run_until(SimTime(6.0), &mut NoopObserver).unwrap();
        staged.run_to_exhaustion(&mut NoopObserver).unwrap();

        assert_eq!(staged.current_time(), full.current_time());
        for (a, b) in staged.jobs().iter().zip(full.jobs()) {
            assert_eq!(a.report(), b.report());
        }
        for (a, b) in staged.processors().iter().zip(full.processors()) {
            assert_eq!(a.idle_intervals(), b.idle_intervals());
            assert_eq!(a.served_count(), b.served_count());
        }
    }

    #[test]
    fn horizon_is_inclusive() {
        let mut sim = build(1, vec![spec(3.0, 1.0, Priority::Normal)]);
        sim.run_until(SimTime(3.0), &mut NoopObserver).unwrap();
        // Everything at t<=3 fired (seed, arrival, dispatch); the t=4 free
        // event did not.
        assert_eq!(sim.current_time(), SimTime(3.0));
        assert_eq!(sim.calendar().len(), 1);
    }

    #[test]
    fn horizon_before_first_event_is_a_noop() {
        let mut sim = build(1, vec![spec(2.0, 1.0, Priority::Normal)]);
        let before = sim.calendar().len();
        sim.run_until(SimTime(-1.0), &mut NoopObserver).unwrap();
        assert_eq!(sim.calendar().len(), before);
        assert_eq!(sim.current_time(), SimTime::ZERO);
    }
}

// ── Injected events ───────────────────────────────────────────────────────────

#[cfg(test)]
mod injection_tests {
    use super::*;
    use crate::EngineError;

    #[test]
    fn unknown_job_id_surfaces_as_error() {
        let mut sim = build(1, vec![]);
        sim.calendar_mut()
            .put(SimTime(1.0), Event::JobArrival { job: JobId(99) })
            .unwrap();
        let result = sim.run_to_exhaustion(&mut NoopObserver);
        assert!(matches!(result, Err(EngineError::UnknownJob(JobId(99)))));
    }

    #[test]
    fn unknown_processor_id_surfaces_as_error() {
        let mut sim = build(1, vec![]);
        sim.calendar_mut()
            .put(SimTime(0.0), Event::ProcessorFree { processor: ProcessorId(7) })
            .unwrap();
        let result = sim.run_to_exhaustion(&mut NoopObserver);
        assert!(matches!(
            result,
            Err(EngineError::UnknownProcessor(ProcessorId(7)))
        ));
    }

    #[test]
    fn observer_run_end_fires_once_per_run() {
        let mut log = EventLog::default();
        let mut sim = build(1, vec![spec(0.0, 1.0, Priority::Normal)]);
        sim.run_to_exhaustion(&mut log).unwrap();
        assert_eq!(log.run_ends, 1);
    }
}
