//! Scenario evaluation on top of the wait estimator.
//!
//! - Single scenario: per-request wait, weekly delay, weekly cost, net
//!   tradeoff against willingness to pay
//! - Comparison: current vs future, with the future wait projected from
//!   the current scenario's observed state
//!
//! Everything here is create-compute-discard: no entity outlives one
//! invocation and no state is shared across calls.

pub mod compare;
pub mod single;

pub use compare::{compare, ComparisonResult};
pub use single::{evaluate, round2, ScenarioInput, ScenarioResult};
