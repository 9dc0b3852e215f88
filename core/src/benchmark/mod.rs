//! benchmark/mod.rs
//! Measurement wrapper, concurrent orchestrator and winner selection.

pub mod measure;
pub mod orchestrator;
pub mod parallelism;
pub mod selector;
pub mod types;

pub use measure::measure;
pub use orchestrator::run_benchmark;
pub use parallelism::ParallelismProfile;
pub use selector::{best_by_ratio, best_by_time, select};
pub use types::{BenchmarkRun, Criterion, Measurement, MeasurementStatus, RunOutcome, SelectError};
