#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use pipedag_test_utils::init_tracing;

/// Write `contents` to a fresh temp file with the given suffix.
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
