use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::decision::{ConservativePolicy, PredictivePolicy, ReactivePolicy, ScalePolicy, ThresholdBasedPolicy};
use crate::elements::TraceFormat;
use crate::error::DecisionError;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policies: PolicySettings,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceSettings>,
}

impl Settings {
    /// Trace to load for a decision. An explicit `path` replaces the configured trace along with
    /// its format; an explicit `format` overrides either.
    pub fn trace_source(&self, path: Option<&Path>, format: Option<TraceFormat>) -> Option<TraceSettings> {
        match path {
            Some(path) => Some(TraceSettings { path: path.to_path_buf(), format }),
            None => self
                .trace
                .clone()
                .map(|ts| TraceSettings { format: format.or(ts.format), ..ts }),
        }
    }
}

/// Configured parameters for every policy; the policy used is chosen per invocation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    pub threshold_based: ThresholdBasedPolicy,
    pub reactive: ReactivePolicy,
    pub conservative: ConservativePolicy,
    pub predictive: PredictivePolicy,
}

impl PolicySettings {
    pub fn validate(&self) -> Result<(), DecisionError> {
        self.threshold_based.validate()?;
        self.reactive.validate()?;
        self.conservative.validate()?;
        self.predictive.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSettings {
    pub path: PathBuf,

    /// Inferred from the file extension when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TraceFormat>,
}

impl TraceSettings {
    pub fn format(&self) -> TraceFormat {
        self.format.unwrap_or_else(|| TraceFormat::from_path(&self.path))
    }
}
