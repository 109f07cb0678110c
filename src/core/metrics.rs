//! Dispatch metrics for observability
//!
//! Counters for the anomalies that dispatch recovers from locally: entries
//! dropped because no driver was registered, driver write failures and
//! driver panics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what dispatch has done so far
///
/// # Example
///
/// ```
/// use telemetry_core::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_no_drivers();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.dropped_no_drivers(), 1);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Entries handed to at least one driver
    dispatched: AtomicU64,

    /// Entries dropped because the driver list was empty
    dropped_no_drivers: AtomicU64,

    /// Driver `write` calls that returned an error
    driver_failures: AtomicU64,

    /// Driver `write` calls that panicked
    driver_panics: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            dropped_no_drivers: AtomicU64::new(0),
            driver_failures: AtomicU64::new(0),
            driver_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_no_drivers(&self) -> u64 {
        self.dropped_no_drivers.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn driver_failures(&self) -> u64 {
        self.driver_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn driver_panics(&self) -> u64 {
        self.driver_panics.load(Ordering::Relaxed)
    }

    /// Record an entry handed to the driver list; returns the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_no_drivers(&self) -> u64 {
        self.dropped_no_drivers.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_driver_failure(&self) -> u64 {
        self.driver_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_driver_panic(&self) -> u64 {
        self.driver_panics.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.dropped_no_drivers.store(0, Ordering::Relaxed);
        self.driver_failures.store(0, Ordering::Relaxed);
        self.driver_panics.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            dropped_no_drivers: AtomicU64::new(self.dropped_no_drivers()),
            driver_failures: AtomicU64::new(self.driver_failures()),
            driver_panics: AtomicU64::new(self.driver_panics()),
        }
    }
}
