//! Demonstrates tracing integration with outcome chains
//!
//! Run with: cargo run --example traced_pipeline --features "tracing async"

use std::time::Duration;

use manganese::future::OutcomeTracingExt;
use manganese::prelude::*;

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting traced pipeline");

    let outcome = fetch_reading(16.0)
        .map_async(f64::sqrt)
        .instrument_outcome(tracing::info_span!("reading", source = "sensor-1"))
        .await;
    tracing::info!("first reading: {:?}", outcome);

    let outcome = tokio::time::timeout(Duration::from_millis(10), slow_reading())
        .flatten_async()
        .map_async(f64::sqrt)
        .instrument_outcome(tracing::info_span!("reading", source = "sensor-2"))
        .await;
    tracing::info!("second reading: {:?}", outcome);

    let outcome = fetch_reading(-4.0)
        .try_map_async(|value| {
            if value < 0.0 {
                Err(Fault::msg("negative reading"))
            } else {
                Ok(value.sqrt())
            }
        })
        .instrument_outcome(tracing::info_span!("reading", source = "sensor-3"))
        .await;
    tracing::info!("third reading: {:?}", outcome);
}

async fn fetch_reading(value: f64) -> Outcome<f64> {
    Outcome::from_value(value)
}

async fn slow_reading() -> Outcome<f64> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Outcome::from_value(1.0)
}
