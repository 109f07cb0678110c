//! Configuration loading
//!
//! The configuration is a YAML document read once when the facade is
//! constructed:
//!
//! ```yaml
//! defaultLogLevel: 1
//! ```

use super::error::{Result, TelemetryError};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Ordinal `0` (Debug) to `3` (Error). Informational only: dispatch never
    /// filters on it.
    pub default_log_level: LogLevel,
}

impl Config {
    pub fn new(default_log_level: LogLevel) -> Self {
        Self { default_log_level }
    }

    /// Read and decode the configuration file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| TelemetryError::config_read(path, source))?;
        Self::parse(&raw, path)
    }

    /// Decode configuration from an in-memory YAML document
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Self::parse(raw, Path::new("<inline>"))
    }

    fn parse(raw: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(raw).map_err(|source| TelemetryError::config_parse(origin, source))
    }
}
