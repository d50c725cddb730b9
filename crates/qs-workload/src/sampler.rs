//! Workload configuration and sampling.
//!
//! The population mirrors the driver contract: `normal_jobs` normal-class
//! jobs plus `normal_jobs / priority_denominator` priority-class ones
//! (integer division).  Priority flags are shuffled across the whole
//! population so the classes interleave randomly in arrival order.
//!
//! A Gaussian service-time sample can come out negative; the sampler clamps
//! such samples to 0.0 before building specs.  The core would reject a
//! negative duration outright — clamping here keeps sampling noise a
//! workload concern rather than a scheduling error.

use qs_core::{JobSpec, Priority, SimRng};
use rand::Rng;
use rand_distr::Normal;

use crate::error::{WorkloadError, WorkloadResult};

/// Parameters for one sampled workload.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    /// Number of normal-class jobs (`m`).
    pub normal_jobs: usize,

    /// One priority job is added per `priority_denominator` normal jobs
    /// (`alpha`): total = `m + m / alpha`.
    pub priority_denominator: usize,

    /// Mean service duration in simulated seconds (`tau`).
    pub mean_service: f64,

    /// Standard deviation of the service duration (`sigma`).
    pub service_spread: f64,

    /// Arrivals are uniform on `[0, horizon)` (`T`).
    pub arrival_horizon: f64,

    /// Master RNG seed.  The same seed always produces the same workload.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Total job count: normal plus priority.
    pub fn total_jobs(&self) -> usize {
        self.normal_jobs + self.normal_jobs / self.priority_denominator
    }

    fn validate(&self) -> WorkloadResult<()> {
        if self.normal_jobs == 0 {
            return Err(WorkloadError::ZeroJobs);
        }
        if self.priority_denominator == 0 {
            return Err(WorkloadError::ZeroDenominator);
        }
        if !(self.arrival_horizon > 0.0) {
            return Err(WorkloadError::NonPositiveHorizon(self.arrival_horizon));
        }
        if !self.mean_service.is_finite() {
            return Err(WorkloadError::NonFiniteMean(self.mean_service));
        }
        if !(self.service_spread >= 0.0) {
            return Err(WorkloadError::NegativeSpread(self.service_spread));
        }
        Ok(())
    }

    /// Sample the full workload: one [`JobSpec`] per job, in arrival order.
    ///
    /// Arrival instants are sorted ascending so job creation order matches
    /// arrival order in the persisted results.
    pub fn sample(&self) -> WorkloadResult<Vec<JobSpec>> {
        self.validate()?;
        let total = self.total_jobs();
        let mut rng = SimRng::new(self.seed);

        // validate() guarantees a non-negative, finite spread
        let service_dist = Normal::new(self.mean_service, self.service_spread)
            .map_err(|_| WorkloadError::NegativeSpread(self.service_spread))?;
        let services: Vec<f64> = (0..total)
            .map(|_| rng.inner().sample(service_dist).max(0.0))
            .collect();

        let mut arrivals: Vec<f64> = (0..total)
            .map(|_| rng.gen_range(0.0..self.arrival_horizon))
            .collect();
        arrivals.sort_by(f64::total_cmp);

        let mut flags: Vec<u8> = vec![0; self.normal_jobs];
        flags.resize(total, 1);
        rng.shuffle(&mut flags);

        Ok(arrivals
            .into_iter()
            .zip(services)
            .zip(flags)
            .map(|((arrival_time, service_time), flag)| JobSpec {
                arrival_time,
                service_time,
                priority: Priority::from_flag(flag),
            })
            .collect())
    }
}
