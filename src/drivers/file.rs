//! Shared append routine for the file drivers

use crate::core::{Result, TelemetryError};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Open `path` for appending, write `line` plus a newline in one call and
/// close it again.
///
/// An exclusive advisory lock is held for the duration so writers in other
/// processes cannot interleave with this one. Callers serialize in-process
/// writers themselves.
pub(crate) fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TelemetryError::io_operation("opening", path, e))?;

    FileExt::lock_exclusive(&file)
        .map_err(|e| TelemetryError::io_operation("locking", path, e))?;

    let mut buffer = String::with_capacity(line.len() + 1);
    buffer.push_str(line);
    buffer.push('\n');

    let written = file
        .write_all(buffer.as_bytes())
        .map_err(|e| TelemetryError::io_operation("writing to", path, e));
    let unlocked = FileExt::unlock(&file)
        .map_err(|e| TelemetryError::io_operation("unlocking", path, e));

    written.and(unlocked)
}
