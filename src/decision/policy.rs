use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::{
    ConservativePolicy, DecisionRequest, PredictivePolicy, ReactivePolicy, ScalePolicy, ThresholdBasedPolicy,
};
use crate::elements::{Decision, Trace};
use crate::error::DecisionError;
use crate::settings::PolicySettings;

/// Names the scaling policies. Parses the descriptive names as well as the `by_threshold` and
/// `oracle` method names used by the simulation scripts.
#[derive(Debug, Display, EnumString, EnumIter, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[strum(to_string = "threshold_based", serialize = "by_threshold")]
    #[serde(alias = "by_threshold")]
    ThresholdBased,

    #[strum(to_string = "reactive")]
    Reactive,

    #[strum(to_string = "conservative")]
    Conservative,

    #[strum(to_string = "predictive", serialize = "oracle")]
    #[serde(alias = "oracle")]
    Predictive,
}

/// Closed set of configured scaling policies; exactly one applies per decision.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalingPolicy {
    ThresholdBased(ThresholdBasedPolicy),
    Reactive(ReactivePolicy),
    Conservative(ConservativePolicy),
    Predictive(PredictivePolicy),
}

impl Default for ScalingPolicy {
    fn default() -> Self {
        Self::ThresholdBased(ThresholdBasedPolicy::default())
    }
}

impl ScalingPolicy {
    /// Selects the configured instance of the named policy.
    pub fn from_settings(kind: PolicyKind, settings: &PolicySettings) -> Result<Self, DecisionError> {
        let policy = match kind {
            PolicyKind::ThresholdBased => Self::ThresholdBased(settings.threshold_based),
            PolicyKind::Reactive => Self::Reactive(settings.reactive),
            PolicyKind::Conservative => Self::Conservative(settings.conservative),
            PolicyKind::Predictive => Self::Predictive(settings.predictive),
        };

        policy.validate()?;
        Ok(policy)
    }

    /// Whether decisions under this policy read the trace.
    pub const fn requires_trace(&self) -> bool {
        matches!(self, Self::Predictive(_))
    }

    fn inner(&self) -> &dyn ScalePolicy {
        match self {
            Self::ThresholdBased(p) => p,
            Self::Reactive(p) => p,
            Self::Conservative(p) => p,
            Self::Predictive(p) => p,
        }
    }
}

impl From<PolicyKind> for ScalingPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::ThresholdBased => Self::ThresholdBased(ThresholdBasedPolicy::default()),
            PolicyKind::Reactive => Self::Reactive(ReactivePolicy::default()),
            PolicyKind::Conservative => Self::Conservative(ConservativePolicy::default()),
            PolicyKind::Predictive => Self::Predictive(PredictivePolicy::default()),
        }
    }
}

impl ScalePolicy for ScalingPolicy {
    fn kind(&self) -> PolicyKind {
        self.inner().kind()
    }

    fn validate(&self) -> Result<(), DecisionError> {
        self.inner().validate()
    }

    fn decide(&self, request: &DecisionRequest, trace: Option<&Trace>) -> Result<Decision, DecisionError> {
        self.inner().decide(request, trace)
    }
}

#[cfg(test)]
mod tests {
    use claim::*;
    use pretty_assertions::assert_eq;
    use serde_test::{assert_tokens, Token};
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_policy_kind() {
        assert_eq!(assert_ok!("threshold_based".parse::<PolicyKind>()), PolicyKind::ThresholdBased);
        assert_eq!(assert_ok!("by_threshold".parse::<PolicyKind>()), PolicyKind::ThresholdBased);
        assert_eq!(assert_ok!("reactive".parse::<PolicyKind>()), PolicyKind::Reactive);
        assert_eq!(assert_ok!("conservative".parse::<PolicyKind>()), PolicyKind::Conservative);
        assert_eq!(assert_ok!("oracle".parse::<PolicyKind>()), PolicyKind::Predictive);
        assert_eq!(assert_ok!("predictive".parse::<PolicyKind>()), PolicyKind::Predictive);
        assert_err!("aggressive".parse::<PolicyKind>());
    }

    #[test]
    fn test_policy_kind_display_round_trips() {
        for kind in PolicyKind::iter() {
            assert_eq!(assert_ok!(kind.to_string().parse::<PolicyKind>()), kind);
            assert_eq!(ScalingPolicy::from(kind).kind(), kind);
        }
        assert_eq!(PolicyKind::Predictive.to_string(), "predictive");
    }

    #[test]
    fn test_from_settings_uses_configured_parameters() {
        let settings = PolicySettings {
            conservative: ConservativePolicy::new(0.6, 0.3),
            ..PolicySettings::default()
        };

        let policy = assert_ok!(ScalingPolicy::from_settings(PolicyKind::Conservative, &settings));
        assert_eq!(policy, ScalingPolicy::Conservative(ConservativePolicy::new(0.6, 0.3)));
        assert!(!policy.requires_trace());

        let policy = assert_ok!(ScalingPolicy::from_settings(PolicyKind::Predictive, &settings));
        assert!(policy.requires_trace());
    }

    #[test]
    fn test_from_settings_rejects_invalid_parameters() {
        let settings = PolicySettings {
            predictive: PredictivePolicy::with_lookahead(-2.0),
            ..PolicySettings::default()
        };

        assert_ok!(ScalingPolicy::from_settings(PolicyKind::Reactive, &settings));
        assert_err!(ScalingPolicy::from_settings(PolicyKind::Predictive, &settings));
    }

    #[test]
    fn test_serde_tagged_policy() {
        assert_tokens(
            &ScalingPolicy::ThresholdBased(ThresholdBasedPolicy::new(3)),
            &[
                Token::Struct { name: "ThresholdBasedPolicy", len: 2 },
                Token::Str("type"),
                Token::Str("threshold_based"),
                Token::Str("threshold"),
                Token::U32(3),
                Token::StructEnd,
            ],
        );

        assert_tokens(
            &ScalingPolicy::Predictive(PredictivePolicy::default()),
            &[
                Token::Struct { name: "PredictivePolicy", len: 3 },
                Token::Str("type"),
                Token::Str("predictive"),
                Token::Str("lookahead"),
                Token::F64(1.0),
                Token::Str("deactivation_margin"),
                Token::F64(0.5),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_policy_with_defaults() {
        let policy: ScalingPolicy = assert_ok!(serde_json::from_str(r#"{ "type": "conservative" }"#));
        assert_eq!(policy, ScalingPolicy::Conservative(ConservativePolicy::default()));

        let policy: ScalingPolicy =
            assert_ok!(serde_json::from_str(r#"{ "type": "conservative", "deactivation_fraction": 0.3 }"#));
        assert_eq!(policy, ScalingPolicy::Conservative(ConservativePolicy::new(0.5, 0.3)));

        let policy: ScalingPolicy = assert_ok!(serde_json::from_str(r#"{ "type": "reactive" }"#));
        assert_eq!(policy, ScalingPolicy::Reactive(ReactivePolicy::default()));
    }
}
