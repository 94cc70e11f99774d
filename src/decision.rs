//! Scaling decisions: given the current load, server count and per-server capacity, a policy
//! decides whether to activate a server, deactivate one, or leave the cluster as it is.

use std::fmt::Debug;

use crate::elements::{Decision, Trace};
use crate::error::DecisionError;

mod conservative;
mod policy;
mod predictive;
mod reactive;
mod request;
mod threshold;

pub use conservative::ConservativePolicy;
pub use policy::{PolicyKind, ScalingPolicy};
pub use predictive::PredictivePolicy;
pub use reactive::ReactivePolicy;
pub use request::DecisionRequest;
pub use threshold::ThresholdBasedPolicy;

/// Task-count slack below the reduced capacity, `(servers - 1) * capacity`, that the threshold
/// and reactive policies require before deactivating a server.
pub const DEACTIVATION_SLACK: f64 = 1.0;

/// A rule mapping a decision request onto a scale action.
pub trait ScalePolicy: Debug {
    fn kind(&self) -> PolicyKind;

    /// Checks the policy parameters.
    fn validate(&self) -> Result<(), DecisionError> {
        Ok(())
    }

    /// `trace` is only consulted by policies that need recorded future load; others ignore it.
    fn decide(&self, request: &DecisionRequest, trace: Option<&Trace>) -> Result<Decision, DecisionError>;
}

/// Single-shot scaling decision.
///
/// Fails with `InvalidConfiguration` if `servers` or `capacity` is zero, the timestamp is not
/// finite or the policy parameters are out of range, and with `MissingTrace` if the predictive
/// policy is selected without a non-empty trace.
#[tracing::instrument(level = "debug", skip(policy, trace), fields(policy=%policy.kind()))]
pub fn decide(
    load: u64, servers: u32, capacity: u32, timestamp: f64, policy: &ScalingPolicy, trace: Option<&Trace>,
) -> Result<Decision, DecisionError> {
    let request = DecisionRequest::new(load, servers, capacity, timestamp)?;
    policy.validate()?;
    let decision = policy.decide(&request, trace)?;
    tracing::debug!(?request, %decision, "scaling decision made");
    Ok(decision)
}

/// Deactivation test shared by the threshold, reactive and predictive policies: the load sits
/// more than `margin` tasks below the capacity the cluster would have with one server fewer.
pub(crate) fn below_reduced_capacity(request: &DecisionRequest, margin: f64) -> bool {
    (request.load() as f64) < (request.reduced_capacity() as f64) - margin
}
