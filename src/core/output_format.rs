//! Rendering of log entries for line-oriented drivers
//!
//! - Text: `[2025-01-08T10:30:45Z] Info (Transaction: t1): message Tags: {"k": "v"}`
//! - Json: one object per line with `timestamp, level, message, tags, transaction_id`

use super::error::Result;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Render `entry` as a single line without the trailing newline
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> Result<String> {
        match self {
            OutputFormat::Text => format_text(entry, timestamp_format, entry.level.to_str()),
            OutputFormat::Json => Ok(serde_json::to_string(entry)?),
        }
    }
}

/// Text rendering with a caller-supplied level label, so the console driver
/// can substitute a colored one.
pub(crate) fn format_text(
    entry: &LogEntry,
    timestamp_format: &TimestampFormat,
    level_label: &str,
) -> Result<String> {
    let mut line = format!(
        "[{}] {}",
        timestamp_format.format(&entry.timestamp)?,
        level_label
    );

    if let Some(id) = entry.transaction() {
        line.push_str(&format!(" (Transaction: {})", id));
    }

    line.push_str(&format!(": {}", entry.message));

    if let Some(tags) = entry.non_empty_tags() {
        line.push_str(&format!(" Tags: {:?}", tags));
    }

    Ok(line)
}
