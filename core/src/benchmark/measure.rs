//! benchmark/measure.rs
//! The one timing wrapper every adapter goes through.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::benchmark::types::Measurement;
use crate::compression::{CompressionError, Compressor};
use crate::telemetry::TelemetryTimer;

/// Run `adapter` once over `input` and record size and wall-clock time.
///
/// The timed interval covers encoder setup, all writes, and finish/flush.
/// The output `Vec` is created before the timer starts; its length is read
/// after it stops.
///
/// Never panics and never returns an error: codec errors and codec panics
/// both come back as a `Failed` measurement.
pub fn measure(adapter: &dyn Compressor, input: &[u8]) -> Measurement {
    let algorithm = adapter.algorithm();
    let original_size = input.len() as u64;
    let mut out = Vec::new();

    let mut timer = TelemetryTimer::start();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| adapter.compress(input, &mut out)));
    let duration = timer.finish();

    let err = match outcome {
        Ok(Ok(())) => {
            let compressed_size = out.len() as u64;
            debug!(
                target: "measure",
                %algorithm,
                original_size,
                compressed_size,
                duration_us = duration.as_micros() as u64,
                "codec finished"
            );
            return Measurement::completed(algorithm, original_size, compressed_size, duration);
        }
        Ok(Err(e)) => e,
        Err(payload) => CompressionError::CodecPanicked {
            codec: algorithm,
            msg: panic_message(payload.as_ref()),
        },
    };

    // Surfaced once, through the flagged result.
    debug!(target: "measure", %algorithm, error = %err, "codec failed, recording flagged result");
    Measurement::failed(algorithm, original_size, err.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
