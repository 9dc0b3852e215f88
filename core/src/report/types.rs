//! report/types.rs
//! Row layout shared by every report format, and report errors.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::benchmark::Measurement;

/// One report row. Serde names are the column headers.
///
/// Undefined metrics serialize as empty CSV cells / JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    #[serde(rename = "Original Size (MB)")]
    pub original_size_mb: Option<f64>,
    #[serde(rename = "Compressed Size (MB)")]
    pub compressed_size_mb: f64,
    #[serde(rename = "Compression Ratio")]
    pub compression_ratio: Option<f64>,
    #[serde(rename = "Compression Speed (B/s)")]
    pub compression_speed: Option<f64>,
    #[serde(rename = "Time Taken (seconds)")]
    pub duration_secs: f64,
}

impl From<&Measurement> for ReportRow {
    fn from(m: &Measurement) -> Self {
        Self {
            algorithm: m.algorithm.label().to_string(),
            original_size_mb: Some(m.original_size_mb()),
            compressed_size_mb: m.compressed_size_mb(),
            compression_ratio: m.compression_ratio(),
            compression_speed: m.compression_speed(),
            duration_secs: m.duration_secs(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot write report {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
