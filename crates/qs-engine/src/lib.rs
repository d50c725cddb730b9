//! `qs-engine` — the discrete-event core of the `rust_qs` queueing simulator.
//!
//! A single-stage queueing system: jobs arrive over time, wait for one of a
//! fixed pool of processors, are served for a fixed duration, and depart.
//! A two-class (priority / normal) non-preemptive discipline governs who is
//! served next.
//!
//! # Architecture
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`calendar`]  | `Calendar` — time-ordered event store + monotonic clock |
//! | [`event`]     | `Event` — the closed set of scheduled-work variants     |
//! | [`queueing`]  | `QueueingSystem` — free pool + two FIFO waiting lines   |
//! | [`processor`] | `Processor` — serves one job at a time, tracks stats    |
//! | [`sim`]       | `Simulation` — owns all state, drives the event loop    |
//! | [`builder`]   | `SimulationBuilder` — validated setup + event seeding   |
//! | [`observer`]  | `SimObserver` — per-event / end-of-run callbacks        |
//!
//! # Execution model
//!
//! Strictly single-threaded and cooperative.  The calendar's total order
//! over `(timestamp, insertion sequence)` is the sole synchronization
//! primitive: each popped event runs to completion — including any events it
//! schedules — before the next is popped, so no component ever observes a
//! half-applied state.  Nothing blocks; a component that needs to react
//! later schedules a future [`Event`] instead.
//!
//! Once the calendar accepts an event it *will* be processed — there is no
//! cancellation or removal API.

pub mod builder;
pub mod calendar;
pub mod error;
pub mod event;
pub mod observer;
pub mod processor;
pub mod queueing;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimulationBuilder;
pub use calendar::Calendar;
pub use error::{EngineError, EngineResult};
pub use event::Event;
pub use observer::{NoopObserver, SimObserver};
pub use processor::Processor;
pub use queueing::QueueingSystem;
pub use sim::Simulation;
