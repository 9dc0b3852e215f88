//! Crate-wide constants.

/// Sizes in reports are MiB, labelled "MB".
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Report written when no path is configured.
pub const DEFAULT_REPORT_PATH: &str = "compression_results.csv";

/// Rows in a report: time winner, ratio winner.
pub const REPORT_ROWS: usize = 2;
