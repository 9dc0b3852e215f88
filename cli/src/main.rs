//! compress-bench entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    compress_bench::run()
}
