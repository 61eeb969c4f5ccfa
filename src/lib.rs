//! # waitcost
//!
//! Queueing delay and cost-tradeoff estimator.
//!
//! Estimates how per-request wait changes with utilisation, converts
//! the delay into a weekly monetary cost, and nets it against what the
//! team is willing to pay for running hotter. Two closed-form scaling
//! strategies are provided: a linear ratio of idle capacities and an
//! M/M/1-style ratio of utilisation odds. This is not a discrete-event
//! simulator; only the scaling ratios are applied.
//!
//! ## Example
//!
//! ```rust
//! use waitcost::prelude::*;
//!
//! let input = ScenarioInput {
//!     utilisation: 0.9,
//!     volume_per_week: 5.0,
//!     baseline_wait: 2.0,
//!     reference_utilisation: 0.5,
//!     cost_per_hour: 100.0,
//!     willing_to_pay: 0.0,
//! };
//! let result = evaluate(&input, WaitModel::Linear)?;
//! assert_eq!(result.per_request_wait, 10.0);
//! # Ok::<(), waitcost::WaitError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::float_cmp, // Exact comparison against 1.0 selects the sentinel path
    clippy::missing_const_for_fn
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod scenarios;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::TradeoffConfig;
    pub use crate::error::{WaitError, WaitResult};
    pub use crate::estimator::{WaitModel, SENTINEL_WAIT};
    pub use crate::scenarios::{
        compare, evaluate, ComparisonResult, ScenarioInput, ScenarioResult,
    };
}

/// Re-export for public API
pub use error::{WaitError, WaitResult};
