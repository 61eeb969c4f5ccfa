//! CLI argument parsing.
//!
//! Hand-rolled parser over an iterator of strings so every path is
//! testable without touching the process environment.

use crate::estimator::WaitModel;
use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a single scenario
    Run {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Optional wait-model override.
        model_override: Option<WaitModel>,
    },
    /// Compare a current scenario against a future one
    Compare {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Optional wait-model override.
        model_override: Option<WaitModel>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_scenario_command(args, false),
            "compare" => Self::parse_scenario_command(args, true),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' and 'compare' command arguments.
    fn parse_scenario_command(args: &[String], comparison: bool) -> Command {
        if args.len() < 3 {
            eprintln!("Missing scenario file path");
            return Command::Help;
        }

        let scenario_path = PathBuf::from(&args[2]);
        let mut model_override = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--model" => {
                    if i + 1 < args.len() {
                        match parse_model(&args[i + 1]) {
                            Some(model) => model_override = Some(model),
                            None => {
                                eprintln!("Unknown model: {}", args[i + 1]);
                                return Command::Help;
                            }
                        }
                        i += 1;
                    } else {
                        eprintln!("--model requires a value");
                        return Command::Help;
                    }
                }
                unknown => {
                    eprintln!("Unknown option: {unknown}");
                    return Command::Help;
                }
            }
            i += 1;
        }

        if comparison {
            Command::Compare {
                scenario_path,
                model_override,
            }
        } else {
            Command::Run {
                scenario_path,
                model_override,
            }
        }
    }
}

/// Parse a wait-model name as given on the command line.
#[must_use]
pub fn parse_model(name: &str) -> Option<WaitModel> {
    match name {
        "linear" => Some(WaitModel::Linear),
        "erlang" | "erlang_ratio" | "erlang-ratio" => Some(WaitModel::ErlangRatio),
        _ => None,
    }
}
