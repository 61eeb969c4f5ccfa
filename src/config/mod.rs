//! YAML scenario configuration with schema validation.
//!
//! Mistake-proofs the boundary that feeds the estimator:
//! - Type-safe configuration structs
//! - Schema validation via serde (`deny_unknown_fields`)
//! - Per-field range validation via `validator`
//! - Semantic validation across fields
//!
//! Utilisation figures may be written as decimals or percentages; the
//! `units` field decides, and percentage inputs are divided by 100 here
//! so the core only ever sees decimals.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{WaitError, WaitResult};
use crate::estimator::WaitModel;
use crate::scenarios::ScenarioInput;

/// How utilisation fields in the file are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilisationUnits {
    /// Decimals in `[0, 1]`, e.g. `0.85`.
    #[default]
    Decimal,
    /// Percentages in `[0, 100]`, e.g. `85`.
    Percent,
}

/// One scenario block as written in the file.
///
/// Range checks on the utilisation fields happen after unit conversion,
/// in the core, so both decimal and percentage spellings pass the
/// schema here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSpec {
    /// Utilisation to evaluate.
    pub utilisation: f64,
    /// Requests (or members) per week.
    #[validate(range(min = 0.0))]
    pub volume_per_week: f64,
    /// Wait in hours observed at the reference utilisation.
    #[validate(range(min = 0.0))]
    pub baseline_wait: f64,
    /// Utilisation at which the baseline wait was observed.
    pub reference_utilisation: f64,
    /// Cost of delay, currency per hour.
    #[validate(range(min = 0.0))]
    pub cost_per_hour: f64,
    /// Willingness to pay, currency per week. Defaults to 0.
    #[serde(default)]
    pub willing_to_pay: f64,
}

impl ScenarioSpec {
    /// Convert to core input, translating percentages to decimals.
    #[must_use]
    pub fn resolve(&self, units: UtilisationUnits) -> ScenarioInput {
        let scale = match units {
            UtilisationUnits::Decimal => 1.0,
            UtilisationUnits::Percent => 0.01,
        };
        ScenarioInput {
            utilisation: self.utilisation * scale,
            volume_per_week: self.volume_per_week,
            baseline_wait: self.baseline_wait,
            reference_utilisation: self.reference_utilisation * scale,
            cost_per_hour: self.cost_per_hour,
            willing_to_pay: self.willing_to_pay,
        }
    }
}

/// Top-level tradeoff configuration.
///
/// Holds either a single `scenario` block or a `current`/`future` pair,
/// never both.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TradeoffConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Wait-scaling strategy.
    #[serde(default)]
    pub model: WaitModel,

    /// Units the utilisation fields are written in.
    #[serde(default)]
    pub units: UtilisationUnits,

    /// Single-scenario block.
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioSpec>,

    /// Current side of a comparison.
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<ScenarioSpec>,

    /// Future side of a comparison.
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future: Option<ScenarioSpec>,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl TradeoffConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> WaitResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> WaitResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Validate semantic constraints beyond per-field schema.
    fn validate_semantic(&self) -> WaitResult<()> {
        match (&self.scenario, &self.current, &self.future) {
            (Some(_), None, None) | (None, Some(_), Some(_)) => Ok(()),
            (None, None, None) => Err(WaitError::config(
                "expected either a 'scenario' block or a 'current'/'future' pair",
            )),
            (Some(_), _, _) => Err(WaitError::config(
                "'scenario' cannot be combined with 'current'/'future'",
            )),
            (None, Some(_), None) => Err(WaitError::config("'current' given without 'future'")),
            (None, None, Some(_)) => Err(WaitError::config("'future' given without 'current'")),
        }
    }

    /// Resolve the single-scenario input.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no `scenario` block is present.
    pub fn single_scenario(&self) -> WaitResult<ScenarioInput> {
        self.scenario
            .as_ref()
            .map(|spec| spec.resolve(self.units))
            .ok_or_else(|| WaitError::config("no 'scenario' block in configuration"))
    }

    /// Resolve the current/future pair for a comparison.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless both `current` and `future`
    /// blocks are present.
    pub fn comparison_pair(&self) -> WaitResult<(ScenarioInput, ScenarioInput)> {
        match (&self.current, &self.future) {
            (Some(cur), Some(fut)) => Ok((cur.resolve(self.units), fut.resolve(self.units))),
            _ => Err(WaitError::config(
                "comparison requires both 'current' and 'future' blocks",
            )),
        }
    }
}
