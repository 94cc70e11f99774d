use either::{Either, Right};
use thiserror::Error;

mod decision_errors;
mod settings_errors;
mod trace_errors;

pub use decision_errors::DecisionError;
pub use settings_errors::SettingsError;
pub use trace_errors::TraceError;

/// Stable, hierarchical label for an error, e.g. `orchestrator::trace::malformed`, suitable for
/// tagging log events.
pub trait MetricLabel {
    fn label(&self) -> String {
        match self.next() {
            Either::Right(n) => format!("{}::{}", self.slug(), n.label()),
            Either::Left(ls) => format!("{}::{}", self.slug(), ls),
        }
    }

    fn slug(&self) -> String;
    fn next(&self) -> Either<String, Box<&dyn MetricLabel>>;
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("{0}")]
    Trace(#[from] TraceError),

    #[error("{0}")]
    Decision(#[from] DecisionError),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

impl MetricLabel for OrchestratorError {
    fn slug(&self) -> String {
        "orchestrator".into()
    }

    fn next(&self) -> Either<String, Box<&dyn MetricLabel>> {
        match self {
            Self::Trace(e) => Right(Box::new(e)),
            Self::Decision(e) => Right(Box::new(e)),
            Self::Settings(e) => Right(Box::new(e)),
        }
    }
}
