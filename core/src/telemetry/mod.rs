//! telemetry/mod.rs
//! Timers for the measured interval and the run-level snapshot.

pub mod snapshot;
pub mod timers;

pub use snapshot::*;
pub use timers::*;
