//! Error types for the telemetry core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Configuration source could not be read
    #[error("error reading config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration content could not be decoded
    #[error("error unmarshaling config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Log level ordinal outside of 0..=3
    #[error("Invalid log level ordinal: {0}")]
    InvalidLogLevel(u8),

    /// IO error with context
    #[error("IO error while {operation} '{}': {source}", .path.display())]
    IoOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A driver could not record an entry
    #[error("Driver '{driver}' failed: {message}")]
    DriverWrite { driver: String, message: String },

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    Formatter {
        format_type: String,
        message: String,
    },
}

impl TelemetryError {
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TelemetryError::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        TelemetryError::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        TelemetryError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    pub fn driver_write(driver: impl Into<String>, message: impl Into<String>) -> Self {
        TelemetryError::DriverWrite {
            driver: driver.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        TelemetryError::Formatter {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from loading configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TelemetryError::ConfigRead { .. } | TelemetryError::ConfigParse { .. }
        )
    }
}
