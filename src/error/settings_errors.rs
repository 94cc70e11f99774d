use either::{Either, Left, Right};
use thiserror::Error;

use super::{DecisionError, MetricLabel};

/// Error variants related to configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Error in configuration settings.
    #[error(transparent)]
    Configuration(#[from] config::ConfigError),

    /// A configured policy failed validation.
    #[error("{0}")]
    Policy(#[from] DecisionError),
}

impl MetricLabel for SettingsError {
    fn slug(&self) -> String {
        "settings".into()
    }

    fn next(&self) -> Either<String, Box<&dyn MetricLabel>> {
        match self {
            Self::Configuration(_) => Left("configuration".into()),
            Self::Policy(e) => Right(Box::new(e)),
        }
    }
}
