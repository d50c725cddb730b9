//! `.dat` output backend.
//!
//! Creates two files in the configured output directory:
//! - `jobs.dat`
//! - `processors.dat`
//!
//! Both are space-delimited with no header row, matching the format the
//! downstream analysis scripts expect.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::error::OutputResult;
use crate::row::{JobRecord, ProcessorRecord};

fn open_dat(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)?)
}

/// Writes simulation results to the two `.dat` files.
pub struct DatWriter {
    jobs:       Writer<File>,
    processors: Writer<File>,
    finished:   bool,
}

impl DatWriter {
    /// Create (or truncate) `jobs.dat` and `processors.dat` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            jobs:       open_dat(&dir.join("jobs.dat"))?,
            processors: open_dat(&dir.join("processors.dat"))?,
            finished:   false,
        })
    }

    /// Append job lines in slice order.
    pub fn write_jobs(&mut self, rows: &[JobRecord]) -> OutputResult<()> {
        for row in rows {
            self.jobs.write_record(&[
                row.arrival_time.to_string(),
                row.priority.to_string(),
                row.service_time.to_string(),
                row.service_start_time.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Append processor lines in slice order.
    pub fn write_processors(&mut self, rows: &[ProcessorRecord]) -> OutputResult<()> {
        for row in rows {
            self.processors.write_record(&[
                row.served_count.to_string(),
                row.priority_served_count.to_string(),
                row.total_idle_time.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush both files.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.jobs.flush()?;
        self.processors.flush()?;
        Ok(())
    }
}
