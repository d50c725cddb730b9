//! `qs-output` — persisted result files for the `rust_qs` simulator.
//!
//! Two line-oriented records, one line per entity, fields whitespace-
//! separated, in creation order:
//!
//! - `jobs.dat`: `arrival_time priority(0|1) service_time service_start_time`
//! - `processors.dat`: `served_count priority_served_count total_idle_time`
//!
//! [`row`] holds the plain data rows and the helpers that collect them from
//! a finished simulation; [`dat`] writes them out.

pub mod dat;
pub mod error;
pub mod row;


pub use dat::DatWriter;
pub use error::{OutputError, OutputResult};
pub use row::{JobRecord, ProcessorRecord, job_records, processor_records};
