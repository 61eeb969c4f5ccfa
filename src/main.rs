//! waitcost CLI - queueing delay and cost-tradeoff estimator
//!
//! Thin entry point; all logic lives in the `cli` module.

use std::process::ExitCode;
use waitcost::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(&Args::parse())
}
