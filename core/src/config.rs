//! Run configuration: what to read, which codecs, how many workers, where
//! to write the report.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::benchmark::ParallelismProfile;
use crate::compression::{Algorithm, Registry};
use crate::constants::DEFAULT_REPORT_PATH;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no input path configured")]
    MissingInput,

    #[error("empty adapter registry: at least one algorithm must be selected")]
    EmptyRegistry,

    #[error("algorithm {algorithm} selected more than once")]
    DuplicateAlgorithm { algorithm: Algorithm },

    #[error("worker count must be at least 1")]
    ZeroWorkers,

    #[error("unknown report format: {0} (expected csv or json)")]
    UnknownFormat(String),

    #[error("failed to load config {}: {msg}", .path.display())]
    Load { path: PathBuf, msg: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    /// Infer from the extension. No extension means CSV; an extension other
    /// than `csv` or `json` is rejected rather than written as CSV.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension() {
            None => Ok(ReportFormat::Csv),
            Some(ext) => ext.to_string_lossy().parse(),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub input: PathBuf,
    pub report: PathBuf,
    /// Inferred from the report extension when unset.
    pub format: Option<ReportFormat>,
    pub algorithms: Vec<Algorithm>,
    /// `None` = one worker per adapter.
    pub workers: Option<usize>,
    /// Without an explicit `workers`, cap the pool at the logical core count.
    pub cap_to_cores: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            report: PathBuf::from(DEFAULT_REPORT_PATH),
            format: None,
            algorithms: Algorithm::ALL.to_vec(),
            workers: None,
            cap_to_cores: false,
        }
    }
}

impl BenchConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }

    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let load_err = |msg: String| ConfigError::Load { path: path.to_path_buf(), msg };
        let text = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| load_err(e.to_string()))
    }

    /// Fail fast before any I/O or thread is started.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::MissingInput);
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(algorithm) {
                return Err(ConfigError::DuplicateAlgorithm { algorithm: *algorithm });
            }
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        self.report_format()?;
        Ok(())
    }

    pub fn registry(&self) -> Registry {
        Registry::from_algorithms(&self.algorithms)
    }

    pub fn profile(&self) -> ParallelismProfile {
        match (self.workers, self.cap_to_cores) {
            (Some(n), _) => ParallelismProfile::fixed(n),
            (None, true) => ParallelismProfile::dynamic(self.algorithms.len()),
            (None, false) => ParallelismProfile::per_adapter(self.algorithms.len()),
        }
    }

    /// Explicit format wins; otherwise inferred from the report path.
    pub fn report_format(&self) -> Result<ReportFormat, ConfigError> {
        match self.format {
            Some(format) => Ok(format),
            None => ReportFormat::from_path(&self.report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_every_algorithm() {
        let cfg = BenchConfig::new("in.bin");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.registry().len(), Algorithm::ALL.len());
        assert_eq!(cfg.profile().worker_count, Algorithm::ALL.len());
    }

    #[test]
    fn validation_failures() {
        assert_eq!(BenchConfig::default().validate(), Err(ConfigError::MissingInput));

        let mut cfg = BenchConfig::new("in.bin");
        cfg.algorithms.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyRegistry));

        let mut cfg = BenchConfig::new("in.bin");
        cfg.algorithms = vec![Algorithm::Gzip, Algorithm::Xz, Algorithm::Gzip];
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DuplicateAlgorithm { algorithm: Algorithm::Gzip })
        );

        let mut cfg = BenchConfig::new("in.bin");
        cfg.workers = Some(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn report_format_inference() {
        let mut cfg = BenchConfig::new("in.bin");
        assert_eq!(cfg.report_format(), Ok(ReportFormat::Csv));
        cfg.report = PathBuf::from("out/results.JSON");
        assert_eq!(cfg.report_format(), Ok(ReportFormat::Json));
        cfg.report = PathBuf::from("out/results");
        assert_eq!(cfg.report_format(), Ok(ReportFormat::Csv));
        cfg.format = Some(ReportFormat::Json);
        assert_eq!(cfg.report_format(), Ok(ReportFormat::Json));
    }

    #[test]
    fn core_cap_applies_only_without_explicit_workers() {
        let mut cfg = BenchConfig::new("in.bin");
        cfg.cap_to_cores = true;
        let capped = cfg.profile().worker_count;
        assert!(capped >= 1 && capped <= Algorithm::ALL.len());
        assert!(capped <= num_cpus::get().max(1));

        cfg.workers = Some(3);
        assert_eq!(cfg.profile(), ParallelismProfile::fixed(3));
    }

    #[test]
    fn spreadsheet_extension_is_rejected() {
        let mut cfg = BenchConfig::new("in.bin");
        cfg.report = PathBuf::from("compression_results.xlsx");
        assert_eq!(cfg.validate(), Err(ConfigError::UnknownFormat("xlsx".to_string())));

        // An explicit format overrides the extension.
        cfg.format = Some(ReportFormat::Csv);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn json_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");
        fs::write(&path, r#"{ "input": "data.avi", "algorithms": ["zstd", "lz4"], "workers": 2 }"#).unwrap();

        let cfg = BenchConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.input, PathBuf::from("data.avi"));
        assert_eq!(cfg.algorithms, vec![Algorithm::Zstd, Algorithm::Lz4]);
        assert_eq!(cfg.workers, Some(2));
        assert_eq!(cfg.report, PathBuf::from(DEFAULT_REPORT_PATH));
    }
}
