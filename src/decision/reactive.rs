use serde::{Deserialize, Serialize};

use super::{below_reduced_capacity, DecisionRequest, PolicyKind, ScalePolicy, DEACTIVATION_SLACK};
use crate::elements::{Decision, Trace};
use crate::error::DecisionError;

/// Activates only at full saturation, `load >= servers * capacity`; deactivates as the threshold
/// policy does.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactivePolicy {}

impl ScalePolicy for ReactivePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Reactive
    }

    fn decide(&self, request: &DecisionRequest, _trace: Option<&Trace>) -> Result<Decision, DecisionError> {
        let decision = if request.total_capacity() <= request.load() {
            Decision::ScaleUp
        } else if below_reduced_capacity(request, DEACTIVATION_SLACK) {
            Decision::ScaleDown
        } else {
            Decision::NoAction
        };

        tracing::debug!(total_capacity=%request.total_capacity(), %decision, "reactive policy");
        Ok(decision)
    }
}
