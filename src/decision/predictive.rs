use serde::{Deserialize, Serialize};

use super::{below_reduced_capacity, DecisionRequest, PolicyKind, ScalePolicy};
use crate::elements::{Decision, Trace};
use crate::error::DecisionError;

pub const DEFAULT_LOOKAHEAD: f64 = 1.0;
pub const DEFAULT_DEACTIVATION_MARGIN: f64 = 0.5;

/// Oracle policy that reads the recorded load `lookahead` time units ahead in the trace.
///
/// An activation signal exists only when both the current timestamp and
/// `timestamp + lookahead` are recorded in the trace; lookups are exact, never interpolated.
/// - signal at or above `servers * capacity`: activate.
/// - signal below full capacity: no action.
/// - no signal: deactivate if `load < (servers - 1) * capacity - deactivation_margin`, otherwise
///   no action.
///
/// A `lookahead` of 0 looks up the current point, so a recorded load below capacity is no action.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictivePolicy {
    pub lookahead: f64,
    pub deactivation_margin: f64,
}

impl PredictivePolicy {
    pub const fn new(lookahead: f64, deactivation_margin: f64) -> Self {
        Self { lookahead, deactivation_margin }
    }

    pub const fn with_lookahead(lookahead: f64) -> Self {
        Self::new(lookahead, DEFAULT_DEACTIVATION_MARGIN)
    }

    /// Recorded task count at `timestamp + lookahead`, if the trace holds both points.
    pub fn forecast(&self, request: &DecisionRequest, trace: &Trace) -> Option<u64> {
        if !trace.contains(request.timestamp()) {
            tracing::debug!(timestamp=%request.timestamp(), "current timestamp not in trace - no activation signal");
            return None;
        }

        let future = request.timestamp() + self.lookahead;
        let task_count = trace.task_count_at(future);
        if task_count.is_none() {
            tracing::debug!(%future, "future timestamp not in trace - no activation signal");
        }
        task_count
    }
}

impl Default for PredictivePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD, DEFAULT_DEACTIVATION_MARGIN)
    }
}

impl ScalePolicy for PredictivePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Predictive
    }

    fn validate(&self) -> Result<(), DecisionError> {
        if !self.lookahead.is_finite() || self.lookahead < 0.0 {
            return Err(DecisionError::InvalidConfiguration(format!(
                "predictive lookahead must be finite and non-negative but was {}",
                self.lookahead
            )));
        }

        if !self.deactivation_margin.is_finite() || self.deactivation_margin < 0.0 {
            return Err(DecisionError::InvalidConfiguration(format!(
                "predictive deactivation margin must be finite and non-negative but was {}",
                self.deactivation_margin
            )));
        }

        Ok(())
    }

    fn decide(&self, request: &DecisionRequest, trace: Option<&Trace>) -> Result<Decision, DecisionError> {
        let trace = match trace {
            Some(trace) if !trace.is_empty() => trace,
            _ => return Err(DecisionError::MissingTrace),
        };

        let forecast = self.forecast(request, trace);
        let decision = match forecast {
            Some(future_load) if request.total_capacity() <= future_load => Decision::ScaleUp,
            Some(_) => Decision::NoAction,
            None if below_reduced_capacity(request, self.deactivation_margin) => Decision::ScaleDown,
            None => Decision::NoAction,
        };

        tracing::debug!(?forecast, total_capacity=%request.total_capacity(), %decision, "predictive policy");
        Ok(decision)
    }
}
