//! Timestamp formatting for text output

use super::error::{Result, TelemetryError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format used by the text-rendering drivers
///
/// # Examples
///
/// ```
/// use telemetry_core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&ts).unwrap(), "2025-01-08T10:30:45Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2025-01-08T10:30:45Z`
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123Z`
    Rfc3339Millis,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format, e.g. `"%d/%b/%Y:%H:%M:%S %z"`
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`; fails only for a `Custom` string chrono cannot parse
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        match self {
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339_opts(SecondsFormat::Secs, true)),
            TimestampFormat::Rfc3339Millis => {
                Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            TimestampFormat::Unix => Ok(datetime.timestamp().to_string()),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                write!(rendered, "{}", datetime.format(format_str)).map_err(|_| {
                    TelemetryError::formatter(
                        "timestamp",
                        format!("invalid strftime format '{}'", format_str),
                    )
                })?;
                Ok(rendered)
            }
        }
    }
}
