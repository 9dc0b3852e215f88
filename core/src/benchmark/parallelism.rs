//! benchmark/parallelism.rs
//! How many worker threads the fan-out uses.

/// Parallelism configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelismProfile {
    pub worker_count: usize,
}

impl ParallelismProfile {
    /// One worker per adapter, all started together. The default.
    pub fn per_adapter(adapters: usize) -> Self {
        Self { worker_count: adapters }
    }

    pub fn fixed(worker_count: usize) -> Self {
        Self { worker_count }
    }

    /// One worker per adapter, but never more than the logical cores.
    pub fn dynamic(adapters: usize) -> Self {
        let cores = num_cpus::get().max(1);
        Self { worker_count: adapters.min(cores) }
    }

    /// Workers actually spawned for `adapters` jobs.
    pub fn effective_workers(&self, adapters: usize) -> usize {
        self.worker_count.min(adapters)
    }
}
