//! JSON-lines file driver

use super::file::append_line;
use crate::core::{Driver, LogEntry, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// JSON file driver for structured logging
///
/// Writes each entry as a single-line JSON object (JSONL format) with the
/// keys `timestamp`, `level` (integer ordinal), `message`, `tags` and
/// `transaction_id`. Lines read back with `serde_json` decode into an equal
/// [`LogEntry`].
pub struct JsonFileDriver {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileDriver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Driver for JsonFileDriver {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let json = serde_json::to_string(entry)?;

        let _guard = self.write_lock.lock();
        append_line(&self.path, &json)
    }

    fn name(&self) -> &str {
        "json_file"
    }
}
