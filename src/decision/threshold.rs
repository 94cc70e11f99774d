use serde::{Deserialize, Serialize};

use super::{below_reduced_capacity, DecisionRequest, PolicyKind, ScalePolicy, DEACTIVATION_SLACK};
use crate::elements::{Decision, Trace};
use crate::error::DecisionError;

pub const DEFAULT_THRESHOLD: u32 = 2;

/// Activates a server once the load comes within `threshold` tasks of full capacity.
///
/// Activation is inclusive, `load >= servers * capacity - threshold`. Deactivation requires the
/// load to fall strictly below `(servers - 1) * capacity - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdBasedPolicy {
    pub threshold: u32,
}

impl ThresholdBasedPolicy {
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for ThresholdBasedPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ScalePolicy for ThresholdBasedPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::ThresholdBased
    }

    fn decide(&self, request: &DecisionRequest, _trace: Option<&Trace>) -> Result<Decision, DecisionError> {
        // load + threshold >= total avoids underflow when threshold exceeds total capacity
        let decision = if request.total_capacity() <= request.load().saturating_add(u64::from(self.threshold)) {
            Decision::ScaleUp
        } else if below_reduced_capacity(request, DEACTIVATION_SLACK) {
            Decision::ScaleDown
        } else {
            Decision::NoAction
        };

        tracing::debug!(
            threshold=%self.threshold,
            total_capacity=%request.total_capacity(),
            %decision,
            "threshold policy"
        );
        Ok(decision)
    }
}
