//! Simulation observer trait for progress reporting and data collection.

use qs_core::SimTime;

use crate::event::Event;

/// Callbacks invoked by the simulation loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct EventCounter { processed: usize }
///
/// impl SimObserver for EventCounter {
///     fn on_event(&mut self, _time: SimTime, _event: &Event) {
///         self.processed += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each event has been fully processed (including any
    /// events it scheduled).
    fn on_event(&mut self, _time: SimTime, _event: &Event) {}

    /// Called once when a run loop finishes — either the calendar drained or
    /// the horizon was reached.  `final_time` is the clock at that point.
    fn on_run_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call a run
/// method but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
