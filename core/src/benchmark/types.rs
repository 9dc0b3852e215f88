//! benchmark/types.rs
//! Measurement records, the selected outcome, and selector errors.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::compression::Algorithm;
use crate::telemetry::{throughput, RunSnapshot};
use crate::utils::bytes_to_mb;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementStatus {
    Completed,
    /// The codec failed or panicked. Size and duration are zero sentinels.
    Failed { reason: String },
}

/// One adapter invocation: what went in, what came out, how long it took.
///
/// Ratio and speed are derived on demand so they can never disagree with the
/// raw fields. Both are `None` where the division would be undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub original_size: u64,
    pub compressed_size: u64,
    pub duration: Duration,
    pub status: MeasurementStatus,
}

impl Measurement {
    pub fn completed(algorithm: Algorithm, original_size: u64, compressed_size: u64, duration: Duration) -> Self {
        Self {
            algorithm,
            original_size,
            compressed_size,
            duration,
            status: MeasurementStatus::Completed,
        }
    }

    pub fn failed(algorithm: Algorithm, original_size: u64, reason: impl Into<String>) -> Self {
        Self {
            algorithm,
            original_size,
            compressed_size: 0,
            duration: Duration::ZERO,
            status: MeasurementStatus::Failed { reason: reason.into() },
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, MeasurementStatus::Completed)
    }

    pub fn is_failed(&self) -> bool {
        !self.is_completed()
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            MeasurementStatus::Failed { reason } => Some(reason),
            MeasurementStatus::Completed => None,
        }
    }

    /// `original_size / compressed_size`. Undefined when either side is empty.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.is_completed() && self.original_size > 0 && self.compressed_size > 0 {
            Some(self.original_size as f64 / self.compressed_size as f64)
        } else {
            None
        }
    }

    /// `original_size / duration_seconds`, in bytes per second.
    pub fn compression_speed(&self) -> Option<f64> {
        if self.is_completed() {
            throughput(self.original_size, self.duration)
        } else {
            None
        }
    }

    pub fn compressed_size_mb(&self) -> f64 {
        bytes_to_mb(self.compressed_size)
    }

    pub fn original_size_mb(&self) -> f64 {
        bytes_to_mb(self.original_size)
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

struct Metric(Option<f64>);

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:.2}", v),
            None => f.write_str("n/a"),
        }
    }
}

/// Console line for one completed measurement.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            MeasurementStatus::Failed { reason } => {
                write!(f, "Algorithm: {}, FAILED ({})", self.algorithm, reason)
            }
            MeasurementStatus::Completed => write!(
                f,
                "Algorithm: {}, Compressed Size: {:.2} MB, Compression Ratio: {}, Compression Speed: {} B/s, Time Taken: {:?}",
                self.algorithm,
                self.compressed_size_mb(),
                Metric(self.compression_ratio()),
                Metric(self.compression_speed()),
                self.duration,
            ),
        }
    }
}

/// Which "best" a selection is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Time,
    Ratio,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Time => f.write_str("time"),
            Criterion::Ratio => f.write_str("ratio"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no measurements to select from (empty adapter registry)")]
    EmptyRegistry,

    #[error("no eligible measurement for best-by-{criterion}: all {total} codecs failed or had undefined metrics")]
    NoEligible { criterion: Criterion, total: usize },
}

/// The two winners of a run. Both borrow from the completed set and may be
/// the same measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome<'a> {
    pub best_by_time: &'a Measurement,
    pub best_by_ratio: &'a Measurement,
}

impl<'a> RunOutcome<'a> {
    /// Time winner first, then ratio winner. Report order.
    pub fn winners(&self) -> [&'a Measurement; 2] {
        [self.best_by_time, self.best_by_ratio]
    }
}

impl fmt::Display for RunOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.best_by_time;
        let r = self.best_by_ratio;
        writeln!(
            f,
            "Best Time Result: {} (Time Taken: {:?}, Speed: {} B/s)",
            t.algorithm,
            t.duration,
            Metric(t.compression_speed()),
        )?;
        write!(
            f,
            "Best Compression Result: {} (Compression Ratio: {}, Compressed Size: {:.2} MB)",
            r.algorithm,
            Metric(r.compression_ratio()),
            r.compressed_size_mb(),
        )
    }
}

/// Completed set of a run, in registry order, plus its telemetry.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub original_size: u64,
    pub measurements: Vec<Measurement>,
    pub snapshot: RunSnapshot,
}

impl BenchmarkRun {
    pub fn outcome(&self) -> Result<RunOutcome<'_>, SelectError> {
        crate::benchmark::selector::select(&self.measurements)
    }

    pub fn failed(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(|m| m.is_failed())
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
