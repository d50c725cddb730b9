//! priority_jobs — the driver binary for the rust_qs queueing simulator.
//!
//! Samples a random workload, runs the two-class priority simulation to
//! exhaustion, and writes `jobs.dat` / `processors.dat` into the current
//! directory for offline analysis.
//!
//! ```text
//! priority_jobs <p> <tau> <sigma> <T> <m> <alpha> [seed]
//!
//!   p      processor count
//!   tau    mean service time
//!   sigma  service time spread (std dev)
//!   T      arrival horizon — arrivals are uniform on [0, T)
//!   m      normal-class job count
//!   alpha  priority fraction denominator — adds m/alpha priority jobs
//!   seed   RNG seed (optional, default 42)
//! ```

use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use qs_engine::{NoopObserver, SimulationBuilder};
use qs_output::{DatWriter, job_records, processor_records};
use qs_workload::WorkloadConfig;

const DEFAULT_SEED: u64 = 42;

struct Args {
    processors: usize,
    config:     WorkloadConfig,
}

fn parse<T: FromStr>(raw: &str, what: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("invalid {what}: {raw:?}"))
}

fn parse_args() -> Result<Args> {
    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.len() < 6 || raw.len() > 7 {
        bail!("usage: priority_jobs <p> <tau> <sigma> <T> <m> <alpha> [seed]");
    }

    let processors = parse(&raw[0], "processor count")?;
    let config = WorkloadConfig {
        mean_service:         parse(&raw[1], "mean service time")?,
        service_spread:       parse(&raw[2], "service spread")?,
        arrival_horizon:      parse(&raw[3], "arrival horizon")?,
        normal_jobs:          parse(&raw[4], "job count")?,
        priority_denominator: parse(&raw[5], "priority denominator")?,
        seed: match raw.get(6) {
            Some(s) => parse(s, "seed")?,
            None => DEFAULT_SEED,
        },
    };
    Ok(Args { processors, config })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let specs = args.config.sample().context("sampling workload")?;
    let mut sim = SimulationBuilder::new(args.processors)
        .jobs(specs)
        .build()
        .context("building simulation")?;

    let total = sim
        .run_to_exhaustion(&mut NoopObserver)
        .context("running simulation")?;

    let mut writer = DatWriter::new(Path::new(".")).context("creating output files")?;
    writer.write_jobs(&job_records(sim.jobs())?)?;
    writer.write_processors(&processor_records(sim.processors()))?;
    writer.finish()?;

    println!("Total simulation time for this test is {}", total.as_secs());
    Ok(())
}
