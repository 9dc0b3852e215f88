use crate::{
    benchmark::SelectError,
    config::ConfigError,
    input::InputError,
    report::ReportError,
};

/// Unified run error covering input, configuration, selection and reporting.
/// - `From<T>` impls let `?` cross stage boundaries.
/// - `stage()` names the failing stage for the one-line diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("selection error: {0}")]
    Select(#[from] SelectError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// Internal channel wiring failed.
    #[error("pipeline error: {0}")]
    Pipeline(&'static str),
}

impl BenchError {
    pub fn stage(&self) -> &'static str {
        match self {
            BenchError::Input(_) => "input",
            BenchError::Config(_) => "config",
            BenchError::Select(_) => "select",
            BenchError::Report(_) => "report",
            BenchError::Pipeline(_) => "orchestrator",
        }
    }

    /// Report failures come after results are already visible; everything
    /// else aborts the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BenchError::Report(_))
    }
}
