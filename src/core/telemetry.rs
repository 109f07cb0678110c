//! Telemetry facade
//!
//! Owns the configuration, the active logger and the canonical driver list.
//! Every change to the driver list is republished to the logger while the
//! list's write lock is held, so the logger never observes a stale or
//! partially updated list.

use super::{
    config::Config,
    driver::Driver,
    error::Result,
    log_entry::Tags,
    log_level::LogLevel,
    logger::{Log, Logger, LoggerControl},
};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

pub struct Telemetry {
    config: Config,
    logger: RwLock<Arc<dyn LoggerControl>>,
    drivers: RwLock<Vec<Arc<dyn Driver>>>,
}

impl Telemetry {
    /// Create a telemetry instance from the configuration file at `config_path`.
    ///
    /// Fails if the file cannot be read or decoded; there is no fallback to
    /// a default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use telemetry_core::Telemetry;
    ///
    /// let telemetry = Telemetry::new("telemetry.yaml")?;
    /// telemetry.info("service started", None);
    /// # Ok::<(), telemetry_core::TelemetryError>(())
    /// ```
    pub fn new(config_path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        Ok(Self::with_config(config))
    }

    /// Create a telemetry instance from an already validated configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            logger: RwLock::new(Arc::new(Logger::new(config.default_log_level))),
            drivers: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn default_level(&self) -> LogLevel {
        self.config.default_log_level
    }

    fn logger(&self) -> Arc<dyn LoggerControl> {
        self.logger.read().clone()
    }

    /// Append a driver; entries are delivered in registration order.
    ///
    /// Keep a clone of the handle to remove the driver later.
    pub fn add_driver(&self, driver: Arc<dyn Driver>) {
        let mut drivers = self.drivers.write();
        drivers.push(driver);
        self.logger().set_drivers(drivers.clone());
    }

    /// Remove the first registered handle pointing at the same driver as
    /// `driver`. Returns `false` if it was not registered.
    pub fn remove_driver(&self, driver: &Arc<dyn Driver>) -> bool {
        let mut drivers = self.drivers.write();
        let position = drivers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, driver));

        if let Some(idx) = position {
            drivers.remove(idx);
        }
        self.logger().set_drivers(drivers.clone());
        position.is_some()
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.read().len()
    }

    /// Replace the active logger.
    ///
    /// Drivers registered so far are not handed to the new logger; call
    /// [`LoggerControl::set_drivers`] on it, or re-add them, if needed.
    pub fn set_logger(&self, logger: Arc<dyn LoggerControl>) {
        *self.logger.write() = logger;
    }

    pub fn debug(&self, message: &str, tags: Option<Tags>) {
        self.logger().debug(message, tags);
    }

    /// Log an info message.
    ///
    /// ```
    /// use telemetry_core::{tags, Config, Telemetry};
    ///
    /// let telemetry = Telemetry::with_config(Config::default());
    /// telemetry.info("User logged in", tags! { "username" => "john" });
    /// ```
    pub fn info(&self, message: &str, tags: Option<Tags>) {
        self.logger().info(message, tags);
    }

    pub fn warning(&self, message: &str, tags: Option<Tags>) {
        self.logger().warning(message, tags);
    }

    pub fn error(&self, message: &str, tags: Option<Tags>) {
        self.logger().error(message, tags);
    }

    pub fn log(&self, level: LogLevel, message: &str, tags: Option<Tags>) {
        self.logger().log(level, message, tags);
    }

    /// Open a transaction and make it the one stamped onto new entries
    pub fn start_transaction(&self, transaction_id: &str, attributes: Option<Tags>) {
        self.logger().start_transaction(transaction_id, attributes);
    }

    pub fn end_transaction(&self, transaction_id: &str) {
        self.logger().end_transaction(transaction_id);
    }
}

impl Log for Telemetry {
    fn log(&self, level: LogLevel, message: &str, tags: Option<Tags>) {
        Telemetry::log(self, level, message, tags);
    }
}
