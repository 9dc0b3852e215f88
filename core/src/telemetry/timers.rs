//! telemetry/timers.rs
//! Wall-clock timers for single codec calls and whole runs.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
}

impl TelemetryTimer {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
        }
    }

    /// Stop the timer and return the measured interval. Idempotent.
    pub fn finish(&mut self) -> Duration {
        let end = *self.end_time.get_or_insert_with(Instant::now);
        end.duration_since(self.start_time)
    }

    /// Elapsed so far, or the final interval once finished.
    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Bytes per second over `elapsed`, or `None` when the interval is zero.
pub fn throughput(bytes: u64, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(bytes as f64 / secs)
    } else {
        None
    }
}
