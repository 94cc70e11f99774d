#[cfg(test)]
#[macro_use]
extern crate static_assertions;

pub mod decision;
pub mod elements;
pub mod error;
pub mod settings;
pub mod tracing;

pub use decision::{decide, DecisionRequest, PolicyKind, ScalePolicy, ScalingPolicy};
pub use elements::{Decision, Trace, TraceFormat, TraceRecord};

pub type OrchestratorResult<T> = Result<T, error::OrchestratorError>;
