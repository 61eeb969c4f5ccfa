//! Current-vs-future comparison.
//!
//! Evaluates a current scenario against its own baseline, then projects
//! the future scenario by scaling the current observed wait to the
//! future utilisation. The future input's own baseline fields are never
//! consulted: the cross-scenario dependency runs through the current
//! wait and the two utilisation levels only.

use crate::error::WaitResult;
use crate::estimator::WaitModel;
use crate::scenarios::single::{evaluate_unrounded, ScenarioInput, ScenarioResult};
use serde::{Deserialize, Serialize};

/// Paired current/future results with input echoes.
///
/// `net_best_case` restates the future side's tradeoff:
/// `future.willing_to_pay - future.total_weekly_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Inputs the current side was evaluated with.
    pub current_input: ScenarioInput,
    /// Inputs the future side was evaluated with.
    pub future_input: ScenarioInput,
    /// Current-side figures, rounded.
    pub current: ScenarioResult,
    /// Future-side figures, rounded.
    pub future: ScenarioResult,
    /// Weekly net benefit of the future scenario.
    pub net_best_case: f64,
}

/// Compare a current scenario against a hypothetical future one.
///
/// The current side is always evaluated with the linear formula against
/// its own baseline and reference fields; `model` selects how the
/// observed current wait is scaled to the future utilisation (linear
/// idle-capacity ratio or utilisation-odds ratio). Single deterministic
/// pass, no shared state.
///
/// # Errors
///
/// Returns [`crate::error::WaitError::InvalidInput`] when either input
/// lies outside the documented domain.
pub fn compare(
    current_input: &ScenarioInput,
    future_input: &ScenarioInput,
    model: WaitModel,
) -> WaitResult<ComparisonResult> {
    future_input.check()?;

    // Full precision here; rounding happens once, on the way out.
    let current = evaluate_unrounded(current_input, WaitModel::Linear)?;

    let future_wait = model.estimate(
        current.per_request_wait,
        current_input.utilisation,
        future_input.utilisation,
    );
    let future = ScenarioResult::from_wait(future_wait, future_input);
    let net_best_case = future_input.willing_to_pay - future.total_weekly_cost;

    Ok(ComparisonResult {
        current_input: current_input.clone(),
        future_input: future_input.clone(),
        current: current.rounded(),
        future: future.rounded(),
        net_best_case: crate::scenarios::single::round2(net_best_case),
    })
}
