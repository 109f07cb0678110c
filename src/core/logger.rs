//! Main logger implementation

use super::{
    driver::Driver,
    log_entry::{LogEntry, Tags},
    log_level::LogLevel,
    metrics::DispatchMetrics,
    transaction::TransactionRegistry,
};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Public logging capability.
///
/// Only `log` needs implementing; the level methods forward to it.
pub trait Log: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, tags: Option<Tags>);

    #[inline]
    fn debug(&self, message: &str, tags: Option<Tags>) {
        self.log(LogLevel::Debug, message, tags);
    }

    #[inline]
    fn info(&self, message: &str, tags: Option<Tags>) {
        self.log(LogLevel::Info, message, tags);
    }

    #[inline]
    fn warning(&self, message: &str, tags: Option<Tags>) {
        self.log(LogLevel::Warning, message, tags);
    }

    #[inline]
    fn error(&self, message: &str, tags: Option<Tags>) {
        self.log(LogLevel::Error, message, tags);
    }
}

/// Administrative operations the [`Telemetry`](super::Telemetry) facade
/// performs on the logger it owns.
pub trait LoggerControl: Log {
    /// Replace the driver list wholesale
    fn set_drivers(&self, drivers: Vec<Arc<dyn Driver>>);

    fn start_transaction(&self, transaction_id: &str, attributes: Option<Tags>);

    fn end_transaction(&self, transaction_id: &str);
}

/// Default logger: stamps the active transaction onto every entry and fans
/// it out to all drivers in registration order.
pub struct Logger {
    /// Recorded from configuration; never used to filter
    default_level: LogLevel,
    drivers: RwLock<Arc<[Arc<dyn Driver>]>>,
    transactions: Mutex<TransactionRegistry>,
    metrics: DispatchMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(default_level: LogLevel) -> Self {
        Self {
            default_level,
            drivers: RwLock::new(Arc::from(Vec::new())),
            transactions: Mutex::new(TransactionRegistry::new()),
            metrics: DispatchMetrics::new(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.read().len()
    }

    pub fn active_transaction(&self) -> Option<String> {
        self.transactions.lock().active().map(str::to_string)
    }

    pub fn transaction_attributes(&self, transaction_id: &str) -> Option<Tags> {
        self.transactions.lock().attributes(transaction_id).cloned()
    }

    pub fn open_transactions(&self) -> usize {
        self.transactions.lock().len()
    }

    fn stamped(entry: LogEntry, active: Option<&str>) -> LogEntry {
        match active {
            Some(id) => entry.with_transaction(id),
            None => entry,
        }
    }

    /// Hand `entry` to every registered driver.
    ///
    /// Iterates over a snapshot of the driver list, so concurrent
    /// `set_drivers` calls never affect an in-flight dispatch. A driver that
    /// fails or panics is reported on stderr and skipped.
    pub fn dispatch(&self, entry: &LogEntry) {
        let drivers = self.drivers.read().clone();

        if drivers.is_empty() {
            self.metrics.record_no_drivers();
            eprintln!("[TELEMETRY ERROR] Error logging message. There are no drivers set");
            return;
        }

        self.metrics.record_dispatched();

        for (idx, driver) in drivers.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| driver.write(entry)));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.metrics.record_driver_failure();
                    eprintln!(
                        "[TELEMETRY ERROR] Driver #{} '{}' failed: {}",
                        idx,
                        driver.name(),
                        e
                    );
                }
                Err(panic_info) => {
                    self.metrics.record_driver_panic();
                    eprintln!(
                        "[TELEMETRY CRITICAL] Driver #{} '{}' panicked: {}. \
                         Other drivers continue to function.",
                        idx,
                        driver.name(),
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Log for Logger {
    fn log(&self, level: LogLevel, message: &str, tags: Option<Tags>) {
        let entry = LogEntry::new(level, message).with_tags(tags);
        let entry = Self::stamped(entry, self.transactions.lock().active());
        self.dispatch(&entry);
    }
}

impl LoggerControl for Logger {
    fn set_drivers(&self, drivers: Vec<Arc<dyn Driver>>) {
        *self.drivers.write() = Arc::from(drivers);
    }

    fn start_transaction(&self, transaction_id: &str, attributes: Option<Tags>) {
        // State change and event stamping happen under one lock; dispatch
        // runs after it is released.
        let events = {
            let mut registry = self.transactions.lock();
            let mut events = Vec::with_capacity(2);
            let previous_active = registry.active().map(str::to_string);

            let outcome = registry.start(transaction_id, attributes.clone());

            if outcome.overwrote_existing() {
                let warning = LogEntry::new(
                    LogLevel::Warning,
                    format!("Transaction {} already exists. Overwriting.", transaction_id),
                );
                events.push(Self::stamped(warning, previous_active.as_deref()));
            }

            let started = LogEntry::new(
                LogLevel::Info,
                format!("Started transaction {}", transaction_id),
            )
            .with_tags(attributes);
            events.push(Self::stamped(started, registry.active()));
            events
        };

        for event in &events {
            self.dispatch(event);
        }
    }

    fn end_transaction(&self, transaction_id: &str) {
        let event = {
            let mut registry = self.transactions.lock();
            let active = registry.active().map(str::to_string);

            match registry.end(transaction_id) {
                Some(attributes) => Self::stamped(
                    LogEntry::new(LogLevel::Info, format!("Ended transaction {}", transaction_id))
                        .with_tags(attributes),
                    active.as_deref(),
                ),
                None => Self::stamped(
                    LogEntry::new(
                        LogLevel::Warning,
                        format!("Attempted to end non-existent transaction {}", transaction_id),
                    ),
                    active.as_deref(),
                ),
            }
        };

        self.dispatch(&event);
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use telemetry_core::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .default_level(LogLevel::Info)
///     .driver(Arc::new(MemoryDriver::new()))
///     .build();
/// assert_eq!(logger.driver_count(), 1);
/// ```
pub struct LoggerBuilder {
    default_level: LogLevel,
    drivers: Vec<Arc<dyn Driver>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            default_level: LogLevel::default(),
            drivers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn driver(mut self, driver: Arc<dyn Driver>) -> Self {
        self.drivers.push(driver);
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new(self.default_level);
        logger.set_drivers(self.drivers);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
