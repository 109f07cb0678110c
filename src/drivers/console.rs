//! Console driver implementation

use crate::core::output_format::format_text;
use crate::core::{Driver, LogEntry, OutputFormat, Result, TimestampFormat};
use colored::Colorize;
use std::io::Write;

/// Prints one line per entry to stdout.
pub struct ConsoleDriver {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the output format for this driver
    ///
    /// # Example
    ///
    /// ```
    /// use telemetry_core::drivers::ConsoleDriver;
    /// use telemetry_core::OutputFormat;
    ///
    /// let driver = ConsoleDriver::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn render(&self, entry: &LogEntry) -> Result<String> {
        match self.output_format {
            OutputFormat::Text if self.use_colors => {
                let level = entry
                    .level
                    .to_str()
                    .color(entry.level.color_code())
                    .to_string();
                format_text(entry, &self.timestamp_format, &level)
            }
            format => format.format(entry, &self.timestamp_format),
        }
    }
}

impl Default for ConsoleDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for ConsoleDriver {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = self.render(entry)?;

        // Holding the stdout lock keeps concurrent lines from interleaving
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_plain_render_matches_text_format() {
        let driver = ConsoleDriver::with_colors(false);
        let entry = LogEntry::new(LogLevel::Warning, "disk almost full").with_transaction("t9");

        let rendered = driver.render(&entry).unwrap();
        let expected = OutputFormat::Text
            .format(&entry, &TimestampFormat::default())
            .unwrap();
        assert_eq!(rendered, expected);
        assert!(rendered.contains("Warning (Transaction: t9): disk almost full"));
    }

    #[test]
    fn test_json_render() {
        let driver = ConsoleDriver::new().with_output_format(OutputFormat::Json);
        let entry = LogEntry::new(LogLevel::Error, "boom");

        let rendered = driver.render(&entry).unwrap();
        let decoded: LogEntry = serde_json::from_str(&rendered).unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_invalid_timestamp_format_returns_error() {
        let driver = ConsoleDriver::with_colors(true)
            .with_timestamp_format(TimestampFormat::Custom("%Q".to_string()));

        let err = driver
            .write(&LogEntry::new(LogLevel::Info, "x"))
            .unwrap_err();
        assert!(matches!(err, crate::core::TelemetryError::Formatter { .. }));
    }

    #[test]
    fn test_write_succeeds() {
        let driver = ConsoleDriver::with_colors(false);
        assert!(driver.write(&LogEntry::new(LogLevel::Info, "hello")).is_ok());
    }
}
