//! # Telemetry Core
//!
//! Structured logging core: leveled log events enriched with the active
//! transaction and fanned out to pluggable output drivers.
//!
//! ## Features
//!
//! - **Transactions**: a named transaction is stamped onto every entry
//!   logged while it is active
//! - **Multiple Drivers**: console, text file, JSON-lines file and custom drivers
//! - **Thread Safe**: driver registration and logging may happen from any thread
//! - **Fault Isolated**: a failing or panicking driver never affects the others

pub mod core;
pub mod drivers;
pub mod macros;

pub mod prelude {
    pub use crate::drivers::MemoryDriver;
    #[cfg(feature = "console")]
    pub use crate::drivers::ConsoleDriver;
    #[cfg(feature = "file")]
    pub use crate::drivers::{JsonFileDriver, TextFileDriver};
    pub use crate::core::{
        Config, DispatchMetrics, Driver, Log, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerControl, OutputFormat, Result, Tags, Telemetry, TelemetryError, TimestampFormat,
    };
}

pub use core::{
    Config, DispatchMetrics, Driver, Log, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerControl, OutputFormat, Result, Tags, Telemetry, TelemetryError, TimestampFormat,
    TransactionRegistry,
};
