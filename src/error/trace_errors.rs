use either::{Either, Left};
use thiserror::Error;

use super::MetricLabel;

/// Set of errors occurring while loading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// A record did not parse into exactly two numeric fields.
    #[error("malformed trace record at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("duplicate trace timestamp {timestamp} at line {line}")]
    DuplicateTimestamp { line: u64, timestamp: f64 },

    #[error("failed to read trace source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read CSV trace source: {0}")]
    Csv(#[from] csv::Error),
}

impl MetricLabel for TraceError {
    fn slug(&self) -> String {
        "trace".into()
    }

    fn next(&self) -> Either<String, Box<&dyn MetricLabel>> {
        match self {
            Self::Malformed { .. } => Left("malformed".into()),
            Self::DuplicateTimestamp { .. } => Left("duplicate_timestamp".into()),
            Self::Io(_) => Left("io".into()),
            Self::Csv(_) => Left("csv".into()),
        }
    }
}
