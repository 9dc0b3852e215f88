//! benchmark/selector.rs
//! Reduce a completed set to its two winners.
//!
//! Both reductions are single-pass folds starting from "no candidate yet".
//! Ties keep the earlier measurement, so for a fixed iteration order the
//! result is deterministic. `run_benchmark` hands over registry order.

use crate::benchmark::types::{Criterion, Measurement, RunOutcome, SelectError};

/// Fastest completed measurement. Failed measurements never win.
pub fn best_by_time(measurements: &[Measurement]) -> Option<&Measurement> {
    measurements
        .iter()
        .filter(|m| m.is_completed())
        .fold(None, |best: Option<&Measurement>, m| match best {
            Some(b) if b.duration <= m.duration => Some(b),
            _ => Some(m),
        })
}

/// Highest defined compression ratio. Failed measurements, empty inputs and
/// zero-size outputs have no ratio and never win.
pub fn best_by_ratio(measurements: &[Measurement]) -> Option<&Measurement> {
    measurements
        .iter()
        .filter_map(|m| m.compression_ratio().map(|r| (m, r)))
        .fold(None, |best: Option<(&Measurement, f64)>, (m, r)| match best {
            Some((b, br)) if br >= r => Some((b, br)),
            _ => Some((m, r)),
        })
        .map(|(m, _)| m)
}

/// Pick both winners. Must only be called on the full set.
pub fn select(measurements: &[Measurement]) -> Result<RunOutcome<'_>, SelectError> {
    if measurements.is_empty() {
        return Err(SelectError::EmptyRegistry);
    }
    let total = measurements.len();

    let best_by_time = best_by_time(measurements)
        .ok_or(SelectError::NoEligible { criterion: Criterion::Time, total })?;
    let best_by_ratio = best_by_ratio(measurements)
        .ok_or(SelectError::NoEligible { criterion: Criterion::Ratio, total })?;

    Ok(RunOutcome { best_by_time, best_by_ratio })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::compression::Algorithm;

    fn ok(algorithm: Algorithm, compressed: u64, ms: u64) -> Measurement {
        Measurement::completed(algorithm, 1_000, compressed, Duration::from_millis(ms))
    }

    #[test]
    fn picks_min_time_and_max_ratio() {
        let set = vec![
            ok(Algorithm::Gzip, 300, 20),
            ok(Algorithm::Lz4, 500, 2),
            ok(Algorithm::Xz, 100, 90),
        ];
        let outcome = select(&set).unwrap();
        assert_eq!(outcome.best_by_time.algorithm, Algorithm::Lz4);
        assert_eq!(outcome.best_by_ratio.algorithm, Algorithm::Xz);
    }

    #[test]
    fn ties_keep_first_encountered() {
        let set = vec![ok(Algorithm::Gzip, 200, 5), ok(Algorithm::Zlib, 200, 5)];
        let outcome = select(&set).unwrap();
        assert_eq!(outcome.best_by_time.algorithm, Algorithm::Gzip);
        assert_eq!(outcome.best_by_ratio.algorithm, Algorithm::Gzip);
    }

    #[test]
    fn failed_result_never_wins() {
        // A failed result has zero duration and zero size: it would win both
        // criteria under a naive comparison.
        let set = vec![
            Measurement::failed(Algorithm::Zstd, 1_000, "broken"),
            ok(Algorithm::Bzip2, 400, 50),
        ];
        let outcome = select(&set).unwrap();
        assert_eq!(outcome.best_by_time.algorithm, Algorithm::Bzip2);
        assert_eq!(outcome.best_by_ratio.algorithm, Algorithm::Bzip2);
    }

    #[test]
    fn zero_size_output_is_not_a_ratio_winner() {
        let set = vec![ok(Algorithm::Lzw, 0, 1), ok(Algorithm::Gzip, 900, 3)];
        let outcome = select(&set).unwrap();
        assert_eq!(outcome.best_by_time.algorithm, Algorithm::Lzw);
        assert_eq!(outcome.best_by_ratio.algorithm, Algorithm::Gzip);
    }

    #[test]
    fn empty_set_fails_fast() {
        assert_eq!(select(&[]).unwrap_err(), SelectError::EmptyRegistry);
    }

    #[test]
    fn all_failed_is_reported() {
        let set = vec![
            Measurement::failed(Algorithm::Gzip, 10, "a"),
            Measurement::failed(Algorithm::Zlib, 10, "b"),
        ];
        assert_eq!(
            select(&set).unwrap_err(),
            SelectError::NoEligible { criterion: Criterion::Time, total: 2 }
        );
    }

    #[test]
    fn single_result_wins_both() {
        let set = vec![ok(Algorithm::Brotli, 10, 7)];
        let outcome = select(&set).unwrap();
        assert!(std::ptr::eq(outcome.best_by_time, outcome.best_by_ratio));
    }
}
