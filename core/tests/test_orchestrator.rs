#[cfg(test)]
mod orchestrator_tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use compress_bench_core::benchmark::{run_benchmark, Criterion, ParallelismProfile, SelectError};
    use compress_bench_core::compression::{Algorithm, CompressionError, Compressor, Registry};
    use compress_bench_core::config::ConfigError;
    use compress_bench_core::types::BenchError;

    /// Stand-in that always fails, registered under a real algorithm.
    struct Broken(Algorithm);

    impl Compressor for Broken {
        fn algorithm(&self) -> Algorithm {
            self.0
        }

        fn compress(&self, _input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
            Err(CompressionError::process(self.0, "forced failure"))
        }
    }

    /// Stand-in that sleeps, to shuffle completion order.
    struct Slow(Algorithm, u64);

    impl Compressor for Slow {
        fn algorithm(&self) -> Algorithm {
            self.0
        }

        fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
            std::thread::sleep(Duration::from_millis(self.1));
            out.extend_from_slice(&input[..input.len() / 2]);
            Ok(())
        }
    }

    fn repetitive(len: usize) -> Vec<u8> {
        b"abcdefgh".iter().copied().cycle().take(len).collect()
    }

    #[test]
    fn returns_one_result_per_adapter() {
        let registry = Registry::with_defaults();
        let input = repetitive(64 * 1024);
        let profile = ParallelismProfile::per_adapter(registry.len());

        let mut seen = Vec::new();
        let run = run_benchmark(&registry, &input, &profile, |m| seen.push(m.algorithm)).unwrap();

        assert_eq!(run.len(), Algorithm::ALL.len());
        assert_eq!(seen.len(), Algorithm::ALL.len());
        let unique: HashSet<_> = run.measurements.iter().map(|m| m.algorithm).collect();
        assert_eq!(unique.len(), Algorithm::ALL.len());
        assert!(run.snapshot.all_completed());
    }

    #[test]
    fn results_are_in_registry_order_regardless_of_completion() {
        let mut registry = Registry::new();
        registry
            .register(Box::new(Slow(Algorithm::Gzip, 40)))
            .register(Box::new(Slow(Algorithm::Zlib, 0)))
            .register(Box::new(Slow(Algorithm::Bzip2, 20)));
        let input = repetitive(1024);

        let run = run_benchmark(&registry, &input, &ParallelismProfile::per_adapter(3), |_| {}).unwrap();
        let order: Vec<_> = run.measurements.iter().map(|m| m.algorithm).collect();
        assert_eq!(order, vec![Algorithm::Gzip, Algorithm::Zlib, Algorithm::Bzip2]);
    }

    #[test]
    fn metrics_follow_their_formulas() {
        let registry = Registry::with_defaults();
        let input = repetitive(256 * 1024);
        let run = run_benchmark(&registry, &input, &ParallelismProfile::per_adapter(registry.len()), |_| {}).unwrap();

        for m in &run.measurements {
            assert_eq!(m.original_size, input.len() as u64);
            let ratio = m.compression_ratio().expect("ratio defined");
            assert_eq!(ratio, m.original_size as f64 / m.compressed_size as f64);
            if let Some(speed) = m.compression_speed() {
                assert_eq!(speed, m.original_size as f64 / m.duration.as_secs_f64());
            }
        }
    }

    #[test]
    fn failing_adapter_is_flagged_and_never_wins() {
        let mut registry = Registry::with_defaults();
        registry.register(Box::new(Broken(Algorithm::Zstd)));
        let input = repetitive(128 * 1024);

        let run = run_benchmark(&registry, &input, &ParallelismProfile::per_adapter(registry.len()), |_| {}).unwrap();
        assert_eq!(run.len(), Algorithm::ALL.len());

        let failed: Vec<_> = run.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].algorithm, Algorithm::Zstd);
        assert!(failed[0].failure_reason().unwrap().contains("forced failure"));

        let outcome = run.outcome().unwrap();
        for winner in outcome.winners() {
            assert_ne!(winner.algorithm, Algorithm::Zstd);
        }
    }

    #[test]
    fn single_adapter_wins_both_criteria() {
        let registry = Registry::from_algorithms(&[Algorithm::Lz4]);
        let input = repetitive(4096);
        let run = run_benchmark(&registry, &input, &ParallelismProfile::per_adapter(1), |_| {}).unwrap();

        let outcome = run.outcome().unwrap();
        assert_eq!(outcome.best_by_time.algorithm, Algorithm::Lz4);
        assert_eq!(outcome.best_by_ratio.algorithm, Algorithm::Lz4);
    }

    #[test]
    fn empty_input_completes_without_panicking() {
        let registry = Registry::with_defaults();
        let run = run_benchmark(&registry, &[], &ParallelismProfile::per_adapter(registry.len()), |_| {}).unwrap();

        assert_eq!(run.len(), Algorithm::ALL.len());
        for m in &run.measurements {
            assert_eq!(m.original_size, 0);
            assert_eq!(m.compression_ratio(), None, "{} has a ratio for empty input", m.algorithm);
        }

        // Time is still measurable, ratio is not.
        let err = run.outcome().unwrap_err();
        assert_eq!(err, SelectError::NoEligible { criterion: Criterion::Ratio, total: Algorithm::ALL.len() });
    }

    #[test]
    fn fewer_workers_than_adapters_still_runs_everything() {
        let registry = Registry::with_defaults();
        let input = repetitive(16 * 1024);
        let run = run_benchmark(&registry, &input, &ParallelismProfile::fixed(2), |_| {}).unwrap();
        assert_eq!(run.len(), Algorithm::ALL.len());
    }

    #[test]
    fn ratio_winner_is_stable_across_runs() {
        let registry = Registry::with_defaults();
        let input = repetitive(512 * 1024);
        let profile = ParallelismProfile::per_adapter(registry.len());

        let first = run_benchmark(&registry, &input, &profile, |_| {}).unwrap();
        let second = run_benchmark(&registry, &input, &profile, |_| {}).unwrap();

        assert_eq!(
            first.outcome().unwrap().best_by_ratio.algorithm,
            second.outcome().unwrap().best_by_ratio.algorithm
        );
    }

    #[test]
    fn empty_registry_is_a_config_error() {
        let registry = Registry::new();
        let err = run_benchmark(&registry, b"data", &ParallelismProfile::per_adapter(1), |_| {}).unwrap_err();
        assert!(matches!(err, BenchError::Config(ConfigError::EmptyRegistry)));
        assert!(err.is_fatal());
    }

    #[test]
    fn zero_workers_is_a_config_error() {
        let registry = Registry::with_defaults();
        let profile = ParallelismProfile { worker_count: 0 };
        let err = run_benchmark(&registry, b"data", &profile, |_| {}).unwrap_err();
        assert!(matches!(err, BenchError::Config(ConfigError::ZeroWorkers)));
    }
}
