//! Concurrency tests
//!
//! These tests verify:
//! - No entries are lost while drivers are added and removed concurrently
//! - Transaction state stays consistent under concurrent start/end calls
//! - File drivers never interleave partial lines

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;
use telemetry_core::drivers::{JsonFileDriver, MemoryDriver, TextFileDriver};
use telemetry_core::prelude::*;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

struct CountingDriver {
    count: AtomicUsize,
}

impl Driver for CountingDriver {
    fn write(&self, _entry: &LogEntry) -> Result<()> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[test]
fn test_concurrent_logging_reaches_every_driver() {
    let telemetry = Arc::new(Telemetry::with_config(Config::default()));
    let memory = Arc::new(MemoryDriver::new());
    let counter = Arc::new(CountingDriver {
        count: AtomicUsize::new(0),
    });
    telemetry.add_driver(memory.clone());
    telemetry.add_driver(counter.clone());

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let telemetry = Arc::clone(&telemetry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_THREAD {
                    telemetry.info(&format!("T{} message {}", thread_id, i), None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    assert_eq!(memory.len(), THREADS * PER_THREAD);
    assert_eq!(counter.count.load(Ordering::Relaxed), THREADS * PER_THREAD);

    let unique: HashSet<String> = memory.messages().into_iter().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}

#[test]
fn test_driver_churn_during_logging() {
    let telemetry = Arc::new(Telemetry::with_config(Config::default()));
    let stable = Arc::new(MemoryDriver::new());
    telemetry.add_driver(stable.clone());

    let churn = {
        let telemetry = Arc::clone(&telemetry);
        thread::spawn(move || {
            for _ in 0..500 {
                let transient: Arc<dyn Driver> = Arc::new(MemoryDriver::new());
                telemetry.add_driver(transient.clone());
                assert!(telemetry.remove_driver(&transient));
            }
        })
    };

    let loggers: Vec<_> = (0..4)
        .map(|thread_id| {
            let telemetry = Arc::clone(&telemetry);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    telemetry.debug(&format!("T{} {}", thread_id, i), None);
                }
            })
        })
        .collect();

    churn.join().expect("Churn thread panicked");
    for handle in loggers {
        handle.join().expect("Logging thread panicked");
    }

    assert_eq!(telemetry.driver_count(), 1);
    assert_eq!(stable.len(), 4 * PER_THREAD);
}

#[test]
fn test_concurrent_transactions_stay_consistent() {
    let logger = Arc::new(Logger::new(LogLevel::Debug));
    let memory = Arc::new(MemoryDriver::new());
    logger.set_drivers(vec![memory.clone() as Arc<dyn Driver>]);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    let id = format!("t{}-{}", thread_id, i);
                    logger.start_transaction(&id, None);
                    logger.info("inside", None);
                    logger.end_transaction(&id);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Transaction thread panicked");
    }

    assert_eq!(logger.open_transactions(), 0);
    assert_eq!(logger.active_transaction(), None);

    // Every entry is either untagged or tagged with a transaction that was started
    let started: HashSet<String> = memory
        .messages()
        .iter()
        .filter_map(|m| m.strip_prefix("Started transaction ").map(str::to_string))
        .collect();
    assert_eq!(started.len(), THREADS * 50);
    for entry in memory.entries() {
        assert!(entry.transaction_id.is_empty() || started.contains(&entry.transaction_id));
    }
}

#[test]
fn test_file_drivers_do_not_interleave() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let text_path = temp_dir.path().join("concurrent.log");
    let json_path = temp_dir.path().join("concurrent.jsonl");

    let telemetry = Arc::new(Telemetry::with_config(Config::default()));
    telemetry.add_driver(Arc::new(TextFileDriver::new(&text_path)));
    telemetry.add_driver(Arc::new(JsonFileDriver::new(&json_path)));

    let payload = "x".repeat(512);
    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let telemetry = Arc::clone(&telemetry);
            let payload = payload.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    telemetry.warning(&format!("T{}-{} {}", thread_id, i, payload), None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    let text = std::fs::read_to_string(&text_path).expect("Failed to read text log");
    let text_lines: Vec<&str> = text.lines().collect();
    assert_eq!(text_lines.len(), THREADS * 50);
    for line in text_lines {
        assert!(line.contains("] Warning: T"), "Malformed line: {}", line);
        assert!(line.ends_with(&payload));
    }

    let json = std::fs::read_to_string(&json_path).expect("Failed to read json log");
    let json_lines: Vec<&str> = json.lines().collect();
    assert_eq!(json_lines.len(), THREADS * 50);
    for line in json_lines {
        let entry: LogEntry = serde_json::from_str(line).expect("Interleaved JSON line");
        assert_eq!(entry.level, LogLevel::Warning);
    }
}
