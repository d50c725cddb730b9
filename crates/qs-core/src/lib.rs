//! `qs-core` — foundational types for the `rust_qs` queueing simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It intentionally
//! has no `qs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `JobId`, `ProcessorId`                            |
//! | [`time`]  | `SimTime` — the continuous simulation timestamp   |
//! | [`job`]   | `Priority`, `Job`, `JobSpec`, `JobReport`         |
//! | [`rng`]   | `SimRng` (seeded, deterministic)                  |
//! | [`error`] | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod job;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{JobId, ProcessorId};
pub use job::{Job, JobReport, JobSpec, Priority};
pub use rng::SimRng;
pub use time::SimTime;
