use either::{Either, Left};
use thiserror::Error;

use super::MetricLabel;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("predictive policy requires a non-empty trace")]
    MissingTrace,

    #[error("invalid decision configuration: {0}")]
    InvalidConfiguration(String),
}

impl MetricLabel for DecisionError {
    fn slug(&self) -> String {
        "decision".into()
    }

    fn next(&self) -> Either<String, Box<&dyn MetricLabel>> {
        match self {
            Self::MissingTrace => Left("missing_trace".into()),
            Self::InvalidConfiguration(_) => Left("invalid_configuration".into()),
        }
    }
}
