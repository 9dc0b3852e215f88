//! telemetry/snapshot.rs
//!
//! Run-level telemetry snapshot.
//!
//! Design notes:
//! - Built once, after the orchestrator has returned the full result set.
//! - Aggregates only; per-codec numbers live on each `Measurement`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::benchmark::Measurement;
use crate::telemetry::timers::throughput;

/// Immutable summary of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub adapters: usize,
    pub completed: usize,
    pub failed: usize,
    pub original_size: u64,
    pub bytes_compressed: u64,
    /// Wall clock from first spawn to last result, not the sum of codec times.
    pub elapsed: Duration,
    pub codec_time: Duration,
    /// Input bytes pushed through all codecs per second of wall clock.
    pub throughput_bytes_per_sec: Option<f64>,
}

impl RunSnapshot {
    pub fn from_measurements(original_size: u64, measurements: &[Measurement], elapsed: Duration) -> Self {
        let completed = measurements.iter().filter(|m| m.is_completed()).count();
        let bytes_compressed = measurements.iter().map(|m| m.compressed_size).sum();
        let codec_time = measurements.iter().map(|m| m.duration).sum();

        Self {
            adapters: measurements.len(),
            completed,
            failed: measurements.len() - completed,
            original_size,
            bytes_compressed,
            elapsed,
            codec_time,
            throughput_bytes_per_sec: throughput(original_size * completed as u64, elapsed),
        }
    }

    /// Parallel speedup: total codec time over wall clock.
    pub fn parallelism(&self) -> Option<f64> {
        let wall = self.elapsed.as_secs_f64();
        (wall > 0.0).then(|| self.codec_time.as_secs_f64() / wall)
    }

    pub fn all_completed(&self) -> bool {
        self.failed == 0
    }
}
