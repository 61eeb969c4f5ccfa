//! CLI module for waitcost.
//!
//! All CLI logic lives here rather than in main.rs so the argument
//! parsing and command handling are fully testable. The entry point
//! `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{parse_model, Args, Command};
pub use commands::{run_cli, run_comparison, run_scenario};
pub use output::{print_comparison_report, print_help, print_scenario_report, print_version};
