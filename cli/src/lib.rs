//! Command-line interface for compress-bench.
//!
//! Wires config → input → concurrent run → console → selection → report.
//! Result lines go to stdout; logs and diagnostics go to stderr.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use compress_bench_core::compression::describe;
use compress_bench_core::prelude::*;
use compress_bench_core::utils::bytes_to_mb;
use tracing_subscriber::EnvFilter;

/// Benchmark every supported compression codec against one file.
///
/// All codecs run concurrently over the same in-memory copy of INPUT. The
/// fastest codec and the best-ratio codec are written to the report.
#[derive(Parser, Debug)]
#[command(name = "compress-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to compress. Required unless given in --config.
    pub input: Option<PathBuf>,

    /// JSON config file; command-line flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report path (default: compression_results.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format: csv or json (default: from the output extension).
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Restrict the run to these algorithms. Repeatable.
    #[arg(short, long = "algorithm", value_name = "ALGORITHM")]
    pub algorithms: Vec<Algorithm>,

    /// Cap on worker threads (default: one per algorithm).
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Without --jobs, use at most one worker per logical core.
    #[arg(long)]
    pub cap_to_cores: bool,

    /// List supported algorithms and exit.
    #[arg(long)]
    pub list: bool,

    /// Debug-level logs on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge config file and flags into one `BenchConfig`.
    pub fn to_config(&self) -> Result<BenchConfig, BenchError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_json_file(path)?,
            None => BenchConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.report = output.clone();
        }
        if self.format.is_some() {
            config.format = self.format;
        }
        if !self.algorithms.is_empty() {
            config.algorithms = self.algorithms.clone();
        }
        if self.jobs.is_some() {
            config.workers = self.jobs;
        }
        if self.cap_to_cores {
            config.cap_to_cores = true;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn list_algorithms() {
    for algorithm in Algorithm::ALL {
        let info = describe(algorithm);
        let id = algorithm.codec_id();
        match info.default_level {
            Some(level) => println!("{:#06x} {:<8} {:<10} level {}", id, algorithm, info.backend, level),
            None => println!("{:#06x} {:<8} {}", id, algorithm, info.backend),
        }
    }
}

/// Parse arguments and run. Exit code is non-zero only for input, config
/// and selection failures.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        list_algorithms();
        return ExitCode::SUCCESS;
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let stage = e
                .downcast_ref::<BenchError>()
                .map(BenchError::stage)
                .unwrap_or("run");
            eprintln!("Error [{}]: {}", stage, e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config()?;

    let prepared = prepare(&config)?;
    let format = config.report_format().map_err(BenchError::from)?;
    println!("Original File Size: {:.2} MB", bytes_to_mb(prepared.original_size()));

    let run = prepared.run(|m| println!("{}", m))?;
    let outcome = run.outcome().map_err(BenchError::from)?;

    println!();
    println!("{}", outcome);

    if let Some(parallelism) = run.snapshot.parallelism() {
        tracing::info!(
            completed = run.snapshot.completed,
            failed = run.snapshot.failed,
            parallelism,
            "run summary"
        );
    }

    // Results are already on screen; a failed write only warns.
    if let Err(e) = write_report(&outcome, &config.report, format) {
        let e = BenchError::from(e);
        eprintln!("Warning [{}]: {}", e.stage(), e);
    }
    Ok(())
}
