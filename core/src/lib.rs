//! compress-bench-core
//!
//! Concurrent compression benchmark harness.
//! Every codec runs once over the same in-memory input on its own worker;
//! results are gathered, the fastest and the best-ratio codec are selected,
//! and the two winners are written as a report.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod config;
pub mod input;

// Codecs, harness, telemetry, sink
pub mod compression;
pub mod benchmark;
pub mod telemetry;
pub mod report;

pub mod runner;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::benchmark::{
        measure, run_benchmark, select, BenchmarkRun, Measurement, ParallelismProfile, RunOutcome,
    };
    pub use crate::compression::{Algorithm, CompressionError, Compressor, Registry};
    pub use crate::config::{BenchConfig, ReportFormat};
    pub use crate::input::load_input;
    pub use crate::report::write_report;
    pub use crate::runner::{prepare, run_with_config, PreparedRun};
    pub use crate::types::BenchError;
}
