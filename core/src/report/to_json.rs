//! report/to_json.rs
//! Same rows as the CSV report, wrapped with run metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::types::{ReportError, ReportRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Utc>,
    pub original_size: u64,
    pub rows: Vec<ReportRow>,
}

impl JsonReport {
    pub fn new(original_size: u64, rows: Vec<ReportRow>) -> Self {
        Self {
            generated_at: Utc::now(),
            original_size,
            rows,
        }
    }
}

pub fn write_json<W: Write>(report: &JsonReport, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
