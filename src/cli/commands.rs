//! CLI command handlers.
//!
//! Execution logic for each command, extracted from main.rs so command
//! behaviour is testable. This layer parses configuration, hands the
//! resolved inputs to the pure core, and prints the result; nothing
//! below it touches I/O.

use std::path::Path;
use std::process::ExitCode;

use crate::config::TradeoffConfig;
use crate::error::WaitResult;
use crate::estimator::WaitModel;
use crate::scenarios;

use super::output::{print_comparison_report, print_help, print_scenario_report, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed
/// arguments.
#[must_use]
pub fn run_cli(args: &Args) -> ExitCode {
    match &args.command {
        Command::Run {
            scenario_path,
            model_override,
        } => run_scenario(scenario_path, *model_override),
        Command::Compare {
            scenario_path,
            model_override,
        } => run_comparison(scenario_path, *model_override),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Evaluate a single scenario from a YAML file.
#[must_use]
pub fn run_scenario(path: &Path, model_override: Option<WaitModel>) -> ExitCode {
    match evaluate_scenario_file(path, model_override) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn evaluate_scenario_file(path: &Path, model_override: Option<WaitModel>) -> WaitResult<()> {
    let config = TradeoffConfig::load(path)?;
    let model = model_override.unwrap_or(config.model);

    let input = config.single_scenario()?;
    let result = scenarios::evaluate(&input, model)?;

    print_scenario_report(&input, &result);
    Ok(())
}

/// Compare current vs future scenarios from a YAML file.
#[must_use]
pub fn run_comparison(path: &Path, model_override: Option<WaitModel>) -> ExitCode {
    match compare_scenario_file(path, model_override) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn compare_scenario_file(path: &Path, model_override: Option<WaitModel>) -> WaitResult<()> {
    let config = TradeoffConfig::load(path)?;
    let model = model_override.unwrap_or(config.model);

    let (current, future) = config.comparison_pair()?;
    let result = scenarios::compare(&current, &future, model)?;

    print_comparison_report(&result);
    Ok(())
}
