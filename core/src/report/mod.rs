//! report/mod.rs
//! Report sink: persists the two winners of a run.
//!
//! The core only hands over `RunOutcome::winners()`; everything about the
//! file layout lives here.

pub mod to_csv;
pub mod to_json;
pub mod types;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::benchmark::RunOutcome;
use crate::config::ReportFormat;

pub use to_json::JsonReport;
pub use types::{ReportError, ReportRow};

/// Rows in report order: time winner, then ratio winner.
pub fn report_rows(outcome: &RunOutcome<'_>) -> Vec<ReportRow> {
    outcome.winners().iter().map(|m| ReportRow::from(*m)).collect()
}

/// Write the winners of `outcome` to `path`, creating parent directories.
pub fn write_report(outcome: &RunOutcome<'_>, path: impl AsRef<Path>, format: ReportFormat) -> Result<(), ReportError> {
    let path = path.as_ref();
    let io_err = |source| ReportError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let writer = BufWriter::new(file);

    let rows = report_rows(outcome);
    match format {
        ReportFormat::Csv => to_csv::write_csv(&rows, writer)?,
        ReportFormat::Json => {
            let report = JsonReport::new(outcome.best_by_time.original_size, rows);
            to_json::write_json(&report, writer)?
        }
    }

    info!(target: "report", path = %path.display(), ?format, "report written");
    Ok(())
}
