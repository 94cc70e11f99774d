use serde::{Deserialize, Serialize};

use super::{DecisionRequest, PolicyKind, ScalePolicy};
use crate::elements::{Decision, Trace};
use crate::error::DecisionError;

pub const DEFAULT_ACTIVATION_FRACTION: f64 = 0.5;
pub const DEFAULT_DEACTIVATION_FRACTION: f64 = 0.2;

/// Percentage-based policy whose thresholds scale with cluster size.
///
/// Activates when `load >= activation_fraction * servers * capacity` and deactivates when
/// `load <= deactivation_fraction * servers * capacity`; both bounds are inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConservativePolicy {
    pub activation_fraction: f64,
    pub deactivation_fraction: f64,
}

impl ConservativePolicy {
    pub const fn new(activation_fraction: f64, deactivation_fraction: f64) -> Self {
        Self { activation_fraction, deactivation_fraction }
    }
}

impl Default for ConservativePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_FRACTION, DEFAULT_DEACTIVATION_FRACTION)
    }
}

impl ScalePolicy for ConservativePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Conservative
    }

    fn validate(&self) -> Result<(), DecisionError> {
        let in_unit_range = |fraction: f64| fraction.is_finite() && (0.0..=1.0).contains(&fraction);

        if !in_unit_range(self.activation_fraction) || !in_unit_range(self.deactivation_fraction) {
            return Err(DecisionError::InvalidConfiguration(format!(
                "conservative fractions must lie within [0, 1] but were activation:{} deactivation:{}",
                self.activation_fraction, self.deactivation_fraction
            )));
        }

        if self.activation_fraction <= self.deactivation_fraction {
            return Err(DecisionError::InvalidConfiguration(format!(
                "conservative deactivation fraction, {}, must be less than activation fraction, {}",
                self.deactivation_fraction, self.activation_fraction
            )));
        }

        Ok(())
    }

    fn decide(&self, request: &DecisionRequest, _trace: Option<&Trace>) -> Result<Decision, DecisionError> {
        let total = request.total_capacity() as f64;
        let load = request.load() as f64;

        let decision = if self.activation_fraction * total <= load {
            Decision::ScaleUp
        } else if load <= self.deactivation_fraction * total {
            Decision::ScaleDown
        } else {
            Decision::NoAction
        };

        tracing::debug!(
            activation_point=%(self.activation_fraction * total),
            deactivation_point=%(self.deactivation_fraction * total),
            %decision,
            "conservative policy"
        );
        Ok(decision)
    }
}
