//! End-to-end pipeline tests: YAML configuration through evaluation and
//! comparison, checking the documented worked examples and the
//! create-compute-discard lifecycle.

use waitcost::prelude::*;

const SINGLE_YAML: &str = r"
schema_version: '1.0'
model: linear
scenario:
  utilisation: 0.5
  volume_per_week: 5
  baseline_wait: 2.0
  reference_utilisation: 0.5
  cost_per_hour: 100
  willing_to_pay: 0
";

const PAIR_YAML: &str = r"
model: erlang_ratio
current:
  utilisation: 0.5
  volume_per_week: 5
  baseline_wait: 2.0
  reference_utilisation: 0.5
  cost_per_hour: 100
future:
  utilisation: 0.8
  volume_per_week: 5
  baseline_wait: 2.0
  reference_utilisation: 0.5
  cost_per_hour: 100
  willing_to_pay: 3000
";

#[test]
fn single_scenario_worked_example() {
    let config = TradeoffConfig::from_yaml(SINGLE_YAML).unwrap();
    let input = config.single_scenario().unwrap();
    let result = evaluate(&input, config.model).unwrap();

    // At the reference utilisation the baseline wait passes through
    assert_eq!(result.per_request_wait, 2.0);
    assert_eq!(result.total_weekly_delay, 10.0);
    assert_eq!(result.total_weekly_cost, 1000.0);
    assert_eq!(result.net_tradeoff, -1000.0);
}

#[test]
fn saturated_scenario_hits_sentinel() {
    let yaml = r"
model: linear
scenario:
  utilisation: 1.0
  volume_per_week: 5
  baseline_wait: 2.0
  reference_utilisation: 0.5
  cost_per_hour: 100
";
    let config = TradeoffConfig::from_yaml(yaml).unwrap();
    let input = config.single_scenario().unwrap();
    let result = evaluate(&input, config.model).unwrap();

    assert_eq!(result.per_request_wait, SENTINEL_WAIT);
}

#[test]
fn comparison_pipeline() {
    let config = TradeoffConfig::from_yaml(PAIR_YAML).unwrap();
    let (current, future) = config.comparison_pair().unwrap();
    let result = compare(&current, &future, config.model).unwrap();

    // Current side: observed 2.0 hours at its own reference
    assert_eq!(result.current.per_request_wait, 2.0);

    // Future side under the odds ratio: odds(0.8)/odds(0.5) = 4
    assert_eq!(result.future.per_request_wait, 8.0);
    assert_eq!(result.future.total_weekly_delay, 40.0);
    assert_eq!(result.future.total_weekly_cost, 4000.0);
    assert_eq!(result.net_best_case, -1000.0);
    assert_eq!(result.net_best_case, result.future.net_tradeoff);
}

#[test]
fn comparison_model_choice_changes_future_only() {
    let config = TradeoffConfig::from_yaml(PAIR_YAML).unwrap();
    let (current, future) = config.comparison_pair().unwrap();

    let linear = compare(&current, &future, WaitModel::Linear).unwrap();
    let erlang = compare(&current, &future, WaitModel::ErlangRatio).unwrap();

    assert_eq!(linear.current, erlang.current);
    // Linear idle-capacity ratio: 2.0 * (0.5 / 0.2) = 5.0 hours
    assert_eq!(linear.future.per_request_wait, 5.0);
    assert_eq!(erlang.future.per_request_wait, 8.0);
}

#[test]
fn percent_units_round_trip() {
    let yaml = r"
units: percent
model: linear
scenario:
  utilisation: 90
  volume_per_week: 5
  baseline_wait: 2.0
  reference_utilisation: 50
  cost_per_hour: 100
";
    let config = TradeoffConfig::from_yaml(yaml).unwrap();
    let input = config.single_scenario().unwrap();
    let result = evaluate(&input, config.model).unwrap();

    // Same figures as the decimal spelling: 2.0 * (0.5 / 0.1) = 10.0
    assert_eq!(result.per_request_wait, 10.0);
    assert_eq!(result.total_weekly_cost, 5000.0);
}

#[test]
fn repeated_evaluation_is_stateless() {
    let config = TradeoffConfig::from_yaml(PAIR_YAML).unwrap();
    let (current, future) = config.comparison_pair().unwrap();

    let first = compare(&current, &future, config.model).unwrap();
    for _ in 0..100 {
        let next = compare(&current, &future, config.model).unwrap();
        assert_eq!(first, next);
    }
}

#[test]
fn out_of_domain_input_is_rejected_not_computed() {
    let input = ScenarioInput {
        utilisation: 1.5,
        volume_per_week: 5.0,
        baseline_wait: 2.0,
        reference_utilisation: 0.5,
        cost_per_hour: 100.0,
        willing_to_pay: 0.0,
    };
    let err = evaluate(&input, WaitModel::Linear).unwrap_err();
    assert!(matches!(err, WaitError::InvalidInput { .. }));
}
