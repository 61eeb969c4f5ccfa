//! Wait-time estimation strategies.
//!
//! Scales a wait observed at one utilisation level to another using
//! closed-form ratios:
//! - Linear ratio of idle capacities
//! - Erlang-style ratio of utilisation odds (M/M/1 flavour)
//!
//! Both are deliberate modelling choices and neither supersedes the
//! other; callers pick one per evaluation. This is not a queue solver:
//! no arrival process is simulated, only the scaling ratio is applied.

use serde::{Deserialize, Serialize};

/// Fallback wait (hours) returned when utilisation reaches 1 and the
/// scaling ratio would divide by zero. "Effectively infinite" but finite
/// so downstream cost arithmetic stays well-defined.
pub const SENTINEL_WAIT: f64 = 999_999.9;

/// Wait-scaling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitModel {
    /// Scale by the ratio of idle capacities:
    /// `(1 - reference) / (1 - utilisation)`.
    #[default]
    Linear,
    /// Scale by the ratio of utilisation odds:
    /// `[u/(1-u)]_future / [u/(1-u)]_current`.
    ErlangRatio,
}

impl WaitModel {
    /// Estimate the wait at `utilisation`, scaling `observed_wait` from
    /// the utilisation it was observed at.
    ///
    /// Pure and infallible: utilisations equal to 1 take the sentinel
    /// path instead of failing. Callers guarantee both utilisations are
    /// within `[0, 1]`.
    #[must_use]
    pub fn estimate(self, observed_wait: f64, observed_utilisation: f64, utilisation: f64) -> f64 {
        match self {
            Self::Linear => linear_wait(observed_wait, observed_utilisation, utilisation),
            Self::ErlangRatio => erlang_ratio_wait(observed_wait, observed_utilisation, utilisation),
        }
    }
}

/// Linear-ratio wait estimate.
///
/// `wait = baseline_wait * (1 - reference_utilisation) / (1 - utilisation)`
///
/// Returns [`SENTINEL_WAIT`] when `utilisation` is exactly 1.
#[must_use]
pub fn linear_wait(baseline_wait: f64, reference_utilisation: f64, utilisation: f64) -> f64 {
    let idle = 1.0 - utilisation;
    if idle == 0.0 {
        return SENTINEL_WAIT;
    }
    baseline_wait * ((1.0 - reference_utilisation) / idle)
}

/// Erlang-ratio wait estimate.
///
/// Scales an observed current wait to a hypothetical future utilisation
/// by the ratio of the utilisation odds `u / (1 - u)`.
///
/// Returns [`SENTINEL_WAIT`] when `current_utilisation` is exactly 1
/// (the denominator odds are undefined). When only `future_utilisation`
/// is exactly 1, the numerator odds term itself becomes the sentinel and
/// the ratio is still computed, so the output is very large but finite.
#[must_use]
pub fn erlang_ratio_wait(
    current_wait: f64,
    current_utilisation: f64,
    future_utilisation: f64,
) -> f64 {
    let current_idle = 1.0 - current_utilisation;
    if current_idle == 0.0 {
        return SENTINEL_WAIT;
    }

    let future_idle = 1.0 - future_utilisation;
    let future_odds = if future_idle == 0.0 {
        SENTINEL_WAIT
    } else {
        future_utilisation / future_idle
    };
    let current_odds = current_utilisation / current_idle;

    current_wait * (future_odds / current_odds)
}
