//! CLI output formatting.
//!
//! Prints input echoes alongside the computed figures, the way the
//! numbers are meant to be read side by side when judging a tradeoff.

use crate::scenarios::{ComparisonResult, ScenarioInput, ScenarioResult};

const RULE: &str = "─────────────────────────────────────────────────────";

/// Print version information.
pub fn print_version() {
    println!("waitcost {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"waitcost - queueing delay and cost-tradeoff estimator

USAGE:
    waitcost <COMMAND> [OPTIONS]

COMMANDS:
    run <scenario.yaml>         Evaluate a single scenario
        --model <NAME>          Override the configured wait model

    compare <scenario.yaml>     Compare 'current' vs 'future' scenarios
        --model <NAME>          Override the configured wait model

    help                        Show this help message
    version                     Show version information

MODELS:
    linear          Scale by the ratio of idle capacities
    erlang_ratio    Scale by the ratio of utilisation odds (M/M/1)

EXAMPLES:
    waitcost run team_scenario.yaml
    waitcost compare team_scenario.yaml --model erlang_ratio
"
    );
}

/// Print the input echo for one scenario.
fn print_inputs(input: &ScenarioInput) {
    println!("  Utilisation:            {}", input.utilisation);
    println!("  Volume per week:        {}", input.volume_per_week);
    println!("  Baseline wait (hrs):    {}", input.baseline_wait);
    println!("  Reference utilisation:  {}", input.reference_utilisation);
    println!("  Cost of delay (/hr):    {}", input.cost_per_hour);
    println!("  Willing to pay (/wk):   {}", input.willing_to_pay);
}

/// Print the computed figures for one scenario.
fn print_figures(result: &ScenarioResult) {
    println!("  Wait per request (hrs): {:.2}", result.per_request_wait);
    println!("  Weekly delay (hrs):     {:.2}", result.total_weekly_delay);
    println!("  Weekly delay cost:      {:.2}", result.total_weekly_cost);
    println!("  Net trade-off (/wk):    {:.2}", result.net_tradeoff);
}

/// Print a single-scenario report.
pub fn print_scenario_report(input: &ScenarioInput, result: &ScenarioResult) {
    println!("{RULE}");
    println!("Scenario");
    println!("{RULE}");
    print_inputs(input);
    println!();
    println!("Calculated:");
    print_figures(result);
    println!("{RULE}");
}

/// Print a current-vs-future comparison report.
pub fn print_comparison_report(result: &ComparisonResult) {
    println!("{RULE}");
    println!("Current scenario");
    println!("{RULE}");
    print_inputs(&result.current_input);
    println!();
    print_figures(&result.current);

    println!();
    println!("{RULE}");
    println!("Future scenario");
    println!("{RULE}");
    print_inputs(&result.future_input);
    println!();
    print_figures(&result.future);

    println!();
    println!("{RULE}");
    println!("Net best case (/wk):      {:.2}", result.net_best_case);
    println!("{RULE}");
}
