//! `qs-workload` — deterministic random workload generation.
//!
//! Produces the per-job `(arrival, service, priority)` triples the engine's
//! builder consumes.  Service durations are Gaussian, arrival instants are
//! uniform over a horizon, and a configurable fraction of jobs is
//! priority-class.  Everything is sampled from one seeded RNG, so a seed
//! fully determines the workload (and, since the engine itself is
//! deterministic, the whole run).

pub mod error;
pub mod sampler;


pub use error::{WorkloadError, WorkloadResult};
pub use sampler::WorkloadConfig;
