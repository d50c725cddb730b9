//! Plain data rows and the helpers that collect them from a finished run.

use qs_core::Job;
use qs_engine::Processor;

use crate::error::{OutputError, OutputResult};

/// One `jobs.dat` line: the timing record of a departed job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobRecord {
    pub arrival_time:       f64,
    /// 0 = normal, 1 = priority.
    pub priority:           u8,
    pub service_time:       f64,
    /// `departure_time - service_time`.
    pub service_start_time: f64,
}

/// One `processors.dat` line: a processor's utilization summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessorRecord {
    pub served_count:          u64,
    pub priority_served_count: u64,
    /// Sum of recorded idle intervals (trailing idle is never recorded).
    pub total_idle_time:       f64,
}

/// Collect one [`JobRecord`] per job, in creation order.
///
/// Fails with [`OutputError::IncompleteJob`] if any job lacks a report —
/// results are only meaningful after the calendar drained.
pub fn job_records(jobs: &[Job]) -> OutputResult<Vec<JobRecord>> {
    jobs.iter()
        .enumerate()
        .map(|(index, job)| {
            let report = job.report().ok_or(OutputError::IncompleteJob { index })?;
            Ok(JobRecord {
                arrival_time:       report.arrival.as_secs(),
                priority:           job.priority().flag(),
                service_time:       job.service_time(),
                service_start_time: report.departure.as_secs() - job.service_time(),
            })
        })
        .collect()
}

/// Collect one [`ProcessorRecord`] per processor, in creation order.
pub fn processor_records(processors: &[Processor]) -> Vec<ProcessorRecord> {
    processors
        .iter()
        .map(|p| ProcessorRecord {
            served_count:          p.served_count(),
            priority_served_count: p.priority_served_count(),
            total_idle_time:       p.total_idle_time(),
        })
        .collect()
}
