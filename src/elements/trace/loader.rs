use std::io::{BufRead, BufReader, Read};

use itertools::Itertools;

use super::TraceRecord;
use crate::error::TraceError;

/// Reads `<timestamp> <task_count>` lines, handing each record and its 1-based line number to
/// `sink`. Blank lines are skipped; any other line must hold exactly two numeric fields.
pub(super) fn read_whitespace<R, F>(reader: R, mut sink: F) -> Result<(), TraceError>
where
    R: Read,
    F: FnMut(u64, TraceRecord) -> Result<(), TraceError>,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line_nr = 0_u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_nr += 1;

        let line = as_utf8(line_nr, &buf)?;
        if line.trim().is_empty() {
            continue;
        }

        let (timestamp, task_count) = line.split_whitespace().collect_tuple().ok_or_else(|| TraceError::Malformed {
            line: line_nr,
            reason: format!(
                "expected two whitespace-delimited fields but found {}",
                line.split_whitespace().count()
            ),
        })?;

        sink(line_nr, parse_record(line_nr, timestamp, task_count)?)?;
    }

    Ok(())
}

/// Reads headerless `<timestamp>,<task_count>` rows.
pub(super) fn read_csv<R, F>(reader: R, mut sink: F) -> Result<(), TraceError>
where
    R: Read,
    F: FnMut(u64, TraceRecord) -> Result<(), TraceError>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    for row in reader.byte_records() {
        let row = row?;
        let line_nr = row.position().map(|p| p.line()).unwrap_or_default();

        let (timestamp, task_count) = row.iter().collect_tuple().ok_or_else(|| TraceError::Malformed {
            line: line_nr,
            reason: format!("expected two comma-separated fields but found {}", row.len()),
        })?;

        let record = parse_record(line_nr, as_utf8(line_nr, timestamp)?, as_utf8(line_nr, task_count)?)?;
        sink(line_nr, record)?;
    }

    Ok(())
}

fn as_utf8(line: u64, bytes: &[u8]) -> Result<&str, TraceError> {
    std::str::from_utf8(bytes).map_err(|err| TraceError::Malformed {
        line,
        reason: format!("record is not valid UTF-8: {}", err),
    })
}

fn parse_record(line: u64, timestamp: &str, task_count: &str) -> Result<TraceRecord, TraceError> {
    let timestamp: f64 = timestamp.parse().map_err(|err| TraceError::Malformed {
        line,
        reason: format!("timestamp `{}` is not numeric: {}", timestamp, err),
    })?;

    Ok(TraceRecord::new(timestamp, parse_task_count(line, task_count)?))
}

// Integral floats such as `45.0` are accepted; task counts are otherwise whole and non-negative.
fn parse_task_count(line: u64, rep: &str) -> Result<u64, TraceError> {
    if let Ok(count) = rep.parse::<u64>() {
        return Ok(count);
    }

    match rep.parse::<f64>() {
        Ok(count) if count.is_finite() && 0.0 <= count && count.fract() == 0.0 && count <= u64::MAX as f64 => {
            Ok(count as u64)
        }
        Ok(count) => Err(TraceError::Malformed {
            line,
            reason: format!("task count must be a non-negative integer but was {}", count),
        }),
        Err(err) => Err(TraceError::Malformed {
            line,
            reason: format!("task count `{}` is not numeric: {}", rep, err),
        }),
    }
}
