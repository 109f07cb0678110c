//! Core telemetry types and traits

pub mod config;
pub mod driver;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod telemetry;
pub mod timestamp;
pub mod transaction;

pub use config::Config;
pub use driver::Driver;
pub use error::{Result, TelemetryError};
pub use log_entry::{LogEntry, Tags};
pub use log_level::LogLevel;
pub use logger::{Log, Logger, LoggerBuilder, LoggerControl};
pub use metrics::DispatchMetrics;
pub use output_format::OutputFormat;
pub use telemetry::Telemetry;
pub use timestamp::TimestampFormat;
pub use transaction::{StartOutcome, TransactionRegistry};
