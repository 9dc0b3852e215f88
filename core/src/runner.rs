//! End-to-end entry point: config → input → concurrent run.
//!
//! Selection and reporting stay with the caller so results can be shown
//! before anything is written to disk.

use bytes::Bytes;
use tracing::info;

use crate::benchmark::{run_benchmark, BenchmarkRun, Measurement, ParallelismProfile};
use crate::compression::Registry;
use crate::config::BenchConfig;
use crate::input::load_input;
use crate::types::BenchError;

/// A validated config with its input in memory. No worker has started yet.
pub struct PreparedRun {
    pub input: Bytes,
    pub registry: Registry,
    pub profile: ParallelismProfile,
}

/// Validate `config` and load its input.
///
/// Config and input errors surface here, before any worker is spawned.
pub fn prepare(config: &BenchConfig) -> Result<PreparedRun, BenchError> {
    config.validate()?;
    let input = load_input(&config.input)?;
    let registry = config.registry();
    let profile = config.profile();

    info!(
        target: "runner",
        algorithms = ?registry.algorithms(),
        workers = profile.worker_count,
        "registry ready"
    );
    Ok(PreparedRun { input, registry, profile })
}

impl PreparedRun {
    pub fn original_size(&self) -> u64 {
        self.input.len() as u64
    }

    /// Benchmark every registered codec over the loaded input.
    pub fn run<F>(&self, on_result: F) -> Result<BenchmarkRun, BenchError>
    where
        F: FnMut(&Measurement),
    {
        run_benchmark(&self.registry, &self.input, &self.profile, on_result)
    }
}

/// `prepare` followed by `run`.
pub fn run_with_config<F>(config: &BenchConfig, on_result: F) -> Result<BenchmarkRun, BenchError>
where
    F: FnMut(&Measurement),
{
    prepare(config)?.run(on_result)
}
