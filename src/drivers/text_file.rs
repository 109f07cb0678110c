//! Append-only text file driver

use super::file::append_line;
use crate::core::output_format::format_text;
use crate::core::{Driver, LogEntry, Result, TimestampFormat};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Appends one human-readable line per entry to a file.
///
/// The file is opened, appended to and closed on every write, so it can be
/// moved or truncated externally between writes.
pub struct TextFileDriver {
    path: PathBuf,
    timestamp_format: TimestampFormat,
    write_lock: Mutex<()>,
}

impl TextFileDriver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timestamp_format: TimestampFormat::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Set the timestamp format for this driver
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use telemetry_core::drivers::TextFileDriver;
    /// use telemetry_core::TimestampFormat;
    ///
    /// let driver = TextFileDriver::new("/var/log/app.log")
    ///     .with_timestamp_format(TimestampFormat::Rfc3339Millis);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Driver for TextFileDriver {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = format_text(entry, &self.timestamp_format, entry.level.to_str())?;

        let _guard = self.write_lock.lock();
        append_line(&self.path, &line)
    }

    fn name(&self) -> &str {
        "text_file"
    }
}
