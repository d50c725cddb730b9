//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous quantity: arrival instants and service durations are
//! sampled from continuous distributions, so the canonical timestamp is an
//! `f64` number of simulated seconds wrapped in `SimTime`.
//!
//! `f64` is not `Ord`, which would bar timestamps from ordered collections
//! (the event calendar keys its heap by time).  `SimTime` restores a total
//! order via `f64::total_cmp`.  Under that order NaN sorts above every real
//! value; the simulator never produces NaN timestamps (service times are
//! validated finite at construction), so the exotic corner of the ordering is
//! never exercised.

use std::fmt;

/// An absolute simulation timestamp, in simulated seconds since run start.
///
/// Totally ordered (`Ord` via `total_cmp`) so it can key the event calendar
/// directly.  Cheap to copy; arithmetic goes through [`offset`](SimTime::offset)
/// and [`since`](SimTime::since) rather than operator soup.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The timestamp `secs` simulated seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is
    /// actually later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// The raw second count.
    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for SimTime {
    #[inline]
    fn from(secs: f64) -> SimTime {
        SimTime(secs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
