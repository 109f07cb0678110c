//! Basic telemetry usage example
//!
//! Demonstrates console and file drivers, tags and transactions.
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use telemetry_core::prelude::*;
use telemetry_core::tags;

fn main() -> Result<()> {
    println!("=== Telemetry Core - Basic Usage Example ===\n");

    let telemetry = Telemetry::with_config(Config::from_yaml_str("defaultLogLevel: 0")?);

    let console: Arc<dyn Driver> = Arc::new(ConsoleDriver::new());
    telemetry.add_driver(console.clone());

    let log_dir = std::env::temp_dir();
    telemetry.add_driver(Arc::new(TextFileDriver::new(log_dir.join("telemetry_demo.log"))));
    telemetry.add_driver(Arc::new(JsonFileDriver::new(log_dir.join("telemetry_demo.jsonl"))));

    println!("1. Logging at different levels:");
    telemetry.debug("This is a debug message", None);
    telemetry.info("This is an info message", tags! { "component" => "demo" });
    telemetry.warning("This is a warning message", None);
    telemetry.error("This is an error message", None);

    println!("\n2. Logging inside a transaction:");
    telemetry.start_transaction("checkout-42", tags! { "user" => "john" });
    telemetry.info("Cart validated", tags! { "items" => 3 });
    telemetry.end_transaction("checkout-42");
    telemetry.end_transaction("checkout-42");

    println!("\n3. Removing the console driver:");
    telemetry.remove_driver(&console);
    telemetry.info("Only written to files", None);

    println!(
        "\nFile output in {}",
        log_dir.join("telemetry_demo.{log,jsonl}").display()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
