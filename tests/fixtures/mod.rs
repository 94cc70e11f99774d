#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use elastic_orchestrator::Trace;

pub fn data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(file_name)
}

pub fn custom_trace() -> Trace {
    Trace::load(data_path("trace_custom.txt")).expect("failed to load custom trace")
}

pub fn write_trace(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().expect("failed to create trace file");
    file.write_all(body.as_bytes()).expect("failed to write trace file");
    file.flush().expect("failed to flush trace file");
    file
}
