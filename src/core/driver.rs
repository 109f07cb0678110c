//! Driver trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// An output sink that records log entries.
///
/// Dispatch calls `write` from whichever thread issued the logging call, so
/// a driver that touches a shared resource must serialize access to it
/// itself. Errors and panics are contained by the dispatcher: they are
/// reported on stderr and never reach the caller or the other drivers.
pub trait Driver: Send + Sync {
    fn write(&self, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str {
        "driver"
    }
}
