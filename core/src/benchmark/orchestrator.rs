//! benchmark/orchestrator.rs
//! Fan-out / fan-in over scoped worker threads.
//!
//! Wiring:
//! - job channel: every adapter is queued up front, workers pull until empty
//! - result channel: bounded to the adapter count, so producers never block
//! - barrier: a `WaitGroup` held by every worker; a closer thread waits on it
//!   and only then drops the last result sender, which ends the drain loop

use std::thread;

use crossbeam::channel::{bounded, Receiver, Sender};
use crossbeam::sync::WaitGroup;
use tracing::{debug, info, warn};

use crate::benchmark::measure::measure;
use crate::benchmark::parallelism::ParallelismProfile;
use crate::benchmark::types::{BenchmarkRun, Measurement};
use crate::compression::{Compressor, Registry};
use crate::config::ConfigError;
use crate::telemetry::{RunSnapshot, TelemetryTimer};
use crate::types::BenchError;

/// Registry slot plus the adapter to run for it.
type Job<'a> = (usize, &'a dyn Compressor);

/// Run every adapter in `registry` over `input` and collect all results.
///
/// `on_result` is called on the caller's thread once per measurement, in
/// completion order. The returned run holds the measurements in registry
/// order, exactly one per adapter.
pub fn run_benchmark<F>(
    registry: &Registry,
    input: &[u8],
    profile: &ParallelismProfile,
    mut on_result: F,
) -> Result<BenchmarkRun, BenchError>
where
    F: FnMut(&Measurement),
{
    let adapters = registry.adapters();
    let n = adapters.len();
    if n == 0 {
        return Err(ConfigError::EmptyRegistry.into());
    }
    if profile.worker_count == 0 {
        return Err(ConfigError::ZeroWorkers.into());
    }

    let workers = profile.effective_workers(n);
    let original_size = input.len() as u64;
    info!(target: "orchestrator", adapters = n, workers, original_size, "starting benchmark run");

    let (job_tx, job_rx) = bounded::<Job<'_>>(n);
    let (out_tx, out_rx) = bounded::<(usize, Measurement)>(n);
    let barrier = WaitGroup::new();

    for (idx, adapter) in adapters.iter().enumerate() {
        job_tx
            .send((idx, adapter.as_ref()))
            .map_err(|_| BenchError::Pipeline("job channel closed before dispatch"))?;
    }
    // Queue is full and final: workers exit once it drains.
    drop(job_tx);

    let mut slots: Vec<Option<Measurement>> = (0..n).map(|_| None).collect();
    let mut timer = TelemetryTimer::start();

    thread::scope(|scope| {
        for worker_id in 0..workers {
            let rx = job_rx.clone();
            let tx = out_tx.clone();
            let done = barrier.clone();
            scope.spawn(move || {
                run_worker(worker_id, rx, tx, input);
                drop(done);
            });
        }
        drop(job_rx);

        // Closer: the original sender outlives every worker clone.
        scope.spawn(move || {
            barrier.wait();
            debug!(target: "orchestrator", "all workers done, closing result channel");
            drop(out_tx);
        });

        for (idx, measurement) in out_rx.iter() {
            on_result(&measurement);
            match slots.get_mut(idx) {
                Some(slot) if slot.is_none() => *slot = Some(measurement),
                Some(_) => {
                    warn!(target: "orchestrator", slot = idx, "duplicate result dropped");
                }
                None => {
                    warn!(target: "orchestrator", slot = idx, "result for unknown slot dropped");
                }
            }
        }
    });

    let elapsed = timer.finish();

    let measurements: Vec<Measurement> = slots
        .into_iter()
        .zip(adapters)
        .map(|(slot, adapter)| {
            slot.unwrap_or_else(|| {
                let algorithm = adapter.algorithm();
                warn!(target: "orchestrator", %algorithm, "worker produced no result");
                Measurement::failed(algorithm, original_size, "worker produced no result")
            })
        })
        .collect();

    let snapshot = RunSnapshot::from_measurements(original_size, &measurements, elapsed);
    info!(
        target: "orchestrator",
        completed = snapshot.completed,
        failed = snapshot.failed,
        elapsed_ms = elapsed.as_millis() as u64,
        "benchmark run finished"
    );

    Ok(BenchmarkRun { original_size, measurements, snapshot })
}

/// Single worker loop: pull a job, measure it, push the result.
fn run_worker(worker_id: usize, rx: Receiver<Job<'_>>, tx: Sender<(usize, Measurement)>, input: &[u8]) {
    debug!(target: "orchestrator", worker_id, "worker starting");
    while let Ok((idx, adapter)) = rx.recv() {
        let measurement = measure(adapter, input);
        if tx.send((idx, measurement)).is_err() {
            warn!(target: "orchestrator", worker_id, "result channel closed, worker exiting");
            break;
        }
    }
    debug!(target: "orchestrator", worker_id, "worker finished");
}
