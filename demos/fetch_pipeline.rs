//! Fetch pipeline example - an async source feeding a sync transform chain
//!
//! A simulated data provider returns a reading after a delay. The reading is
//! square-rooted, rounded, and written to stdout through one of three handlers.
//! The same chain is run against a provider that succeeds, one that returns an
//! empty outcome, one that fails with an I/O error, and one whose task is
//! cancelled before it finishes.
//!
//! Run with: cargo run --example fetch_pipeline --features async

use std::io;
use std::time::Duration;

use manganese::prelude::*;

// ============================================================================
// Data provider
// ============================================================================

async fn get_data(reading: Option<f64>) -> Outcome<f64> {
    tokio::time::sleep(Duration::from_millis(200)).await;
    Outcome::from_nullable(reading)
}

async fn get_data_from_disk() -> Result<f64, io::Error> {
    tokio::time::sleep(Duration::from_millis(200)).await;
    Err(io::Error::other("disk full"))
}

fn parse_reading(input: &str) -> Optional<f64> {
    Optional::from_nullable(input.trim().parse::<f64>().ok())
}

// ============================================================================
// Pipeline
// ============================================================================

fn report(outcome: Outcome<f64>) -> String {
    outcome.write(
        |value| format!("Success: The transformed value is: {}", value),
        || "The input value could not be parsed.".to_string(),
        |fault| format!("An error occurred: {}", fault),
    )
}

async fn transform<F>(source: F) -> Outcome<f64>
where
    F: std::future::Future + Send,
    F::Output: IntoOutcome<Value = f64>,
{
    source
        .map_async(f64::sqrt)
        .map_async(|value| (value * 100.0).round() / 100.0)
        .context_async("transforming reading")
        .await
}

#[tokio::main]
async fn main() {
    println!("=== Optional pipeline ===");
    for input in ["81", "not a number"] {
        let line = parse_reading(input)
            .map(f64::sqrt)
            .map(|value| (value * 100.0).round() / 100.0)
            .write(
                |value| format!("Success: The transformed value is: {}", value),
                || "The input value could not be parsed.".to_string(),
            );
        println!("{:>14} -> {}", input, line);
    }

    println!("\n=== Async pipeline ===");
    println!("{}", report(transform(get_data(Some(42.0))).await));
    println!("{}", report(transform(get_data(None)).await));
    println!("{}", report(transform(get_data_from_disk()).await));

    let task = tokio::spawn(get_data(Some(9.0)));
    task.abort();
    let cancelled = task
        .flatten_async()
        .map_async(f64::sqrt)
        .await;
    println!("{}", report(cancelled));
}
