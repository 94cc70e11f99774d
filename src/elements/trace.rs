use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::TraceError;

mod loader;

/// One `(timestamp, task_count)` point of a recorded workload.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub timestamp: f64,
    pub task_count: u64,
}

impl TraceRecord {
    pub const fn new(timestamp: f64, task_count: u64) -> Self {
        Self { timestamp, task_count }
    }
}

impl From<(f64, u64)> for TraceRecord {
    fn from((timestamp, task_count): (f64, u64)) -> Self {
        Self::new(timestamp, task_count)
    }
}

/// Textual layout of a trace source.
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TraceFormat {
    /// `<timestamp> <task_count>` per line, separated by any run of whitespace.
    Whitespace,
    /// Headerless `<timestamp>,<task_count>` rows.
    Csv,
}

impl Default for TraceFormat {
    fn default() -> Self {
        Self::Whitespace
    }
}

impl TraceFormat {
    /// Infers the format from the file extension; anything other than `.csv` is whitespace
    /// delimited.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Whitespace,
        }
    }
}

/// Exact-match lookup key for a trace timestamp. `-0.0` and `0.0` map to the same key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct TimestampKey(u64);

impl TimestampKey {
    fn new(timestamp: f64) -> Self {
        let normalized = if timestamp == 0.0 { 0.0_f64 } else { timestamp };
        Self(normalized.to_bits())
    }
}

/// Recorded time series of task counts, immutable once loaded.
///
/// Records keep their source order; lookups by timestamp go through a hash index so the
/// predictive policy stays constant-time regardless of trace length.
#[derive(Clone, PartialEq, Default)]
pub struct Trace {
    records: Vec<TraceRecord>,
    index: HashMap<TimestampKey, usize>,
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("nr_records", &self.records.len())
            .field("span", &self.span())
            .finish()
    }
}

impl Trace {
    /// Builds a trace from records in order. Timestamps must be finite and unique.
    pub fn from_records<I, R>(records: I) -> Result<Self, TraceError>
    where
        I: IntoIterator<Item = R>,
        R: Into<TraceRecord>,
    {
        let mut trace = Self::default();
        for (pos, record) in records.into_iter().enumerate() {
            trace.push(pos as u64 + 1, record.into())?;
        }
        Ok(trace)
    }

    /// Loads a trace file, inferring the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        Self::load_as(path, TraceFormat::from_path(path))
    }

    #[tracing::instrument(level = "info", skip(path), fields(path=?path.as_ref()))]
    pub fn load_as(path: impl AsRef<Path>, format: TraceFormat) -> Result<Self, TraceError> {
        let file = std::fs::File::open(path.as_ref())?;
        let trace = Self::from_reader(file, format)?;
        tracing::info!(nr_records=%trace.len(), span=?trace.span(), "trace loaded");
        Ok(trace)
    }

    pub fn from_reader<R: Read>(reader: R, format: TraceFormat) -> Result<Self, TraceError> {
        let mut trace = Self::default();
        match format {
            TraceFormat::Whitespace => loader::read_whitespace(reader, |line, record| trace.push(line, record))?,
            TraceFormat::Csv => loader::read_csv(reader, |line, record| trace.push(line, record))?,
        }
        Ok(trace)
    }

    fn push(&mut self, line: u64, record: TraceRecord) -> Result<(), TraceError> {
        if !record.timestamp.is_finite() {
            return Err(TraceError::Malformed {
                line,
                reason: format!("timestamp must be finite but was {}", record.timestamp),
            });
        }

        let key = TimestampKey::new(record.timestamp);
        if self.index.contains_key(&key) {
            return Err(TraceError::DuplicateTimestamp { line, timestamp: record.timestamp });
        }

        self.index.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Task count recorded at exactly `timestamp`; no interpolation between points.
    pub fn task_count_at(&self, timestamp: f64) -> Option<u64> {
        self.index
            .get(&TimestampKey::new(timestamp))
            .map(|&pos| self.records[pos].task_count)
    }

    pub fn contains(&self, timestamp: f64) -> bool {
        self.index.contains_key(&TimestampKey::new(timestamp))
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last timestamps in source order.
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type IntoIter = std::slice::Iter<'a, TraceRecord>;
    type Item = &'a TraceRecord;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
