//! Integration tests for async outcome chains over real tokio primitives.
//!
//! These tests drive the adapters against spawned tasks, timers and channels
//! to verify that faults raised while awaiting are captured into the chain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::channel::oneshot;
use manganese::assert_fault;
use manganese::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

async fn fetch(reading: Option<f64>) -> Outcome<f64> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Outcome::from_nullable(reading)
}

fn render(outcome_text: &str) -> String {
    format!("[{}]", outcome_text)
}

async fn pipeline<F>(source: F) -> String
where
    F: std::future::Future + Send,
    F::Output: IntoOutcome<Value = f64>,
{
    source
        .map_async(f64::sqrt)
        .map_async(|value| (value * 100.0).round() / 100.0)
        .write_async(
            |value| render(&format!("value {}", value)),
            || render("empty"),
            |fault| render(&format!("fault {}", fault.message())),
        )
        .await
}

// ============================================================================
// Pipelines
// ============================================================================

#[tokio::test]
async fn pipeline_renders_each_state() {
    assert_eq!(pipeline(fetch(Some(16.0))).await, "[value 4]");
    assert_eq!(pipeline(fetch(Some(2.0))).await, "[value 1.41]");
    assert_eq!(pipeline(fetch(None)).await, "[empty]");
    assert_eq!(
        pipeline(async { Err::<f64, _>(std::io::Error::other("disk full")) }).await,
        "[fault disk full]"
    );
}

#[tokio::test]
async fn pipeline_over_spawned_task() {
    let handle = tokio::spawn(async { 81.0_f64 });
    assert_eq!(pipeline(handle).await, "[value 9]");
}

#[tokio::test]
async fn aborted_task_is_incomplete() {
    let handle = tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        1.0_f64
    });
    handle.abort();

    let outcome = handle.map_async(f64::sqrt).await;
    assert_fault!(outcome, FaultKind::Incomplete);
}

#[tokio::test]
async fn panicking_task_is_panicked() {
    let handle = tokio::spawn(async {
        if true {
            panic!("sensor offline");
        }
        1.0_f64
    });

    let outcome = handle.map_async(f64::sqrt).await;
    let fault = outcome.fault().expect("expected a fault");
    assert_eq!(fault.kind(), FaultKind::Panicked);
    assert!(fault.message().contains("sensor offline"));
}

#[tokio::test]
async fn timer_expiry_becomes_fault() {
    let slow = tokio::time::sleep(Duration::from_secs(10));
    let outcome = tokio::time::timeout(Duration::from_millis(5), slow)
        .map_async(|()| 1)
        .await;
    assert_fault!(outcome, FaultKind::Raised);
}

#[tokio::test]
async fn dropped_sender_is_incomplete() {
    let (tx, rx) = oneshot::channel::<i32>();
    drop(tx);
    let outcome = rx.map_async(|x| x + 1).context_async("waiting for reply").await;

    let fault = outcome.fault().expect("expected a fault");
    assert!(fault.is_incomplete());
    assert_eq!(fault.context_trail(), &["waiting for reply"]);
}

#[tokio::test]
async fn delivered_message_flows_through() {
    let (tx, rx) = oneshot::channel::<i32>();
    tokio::spawn(async move {
        let _ = tx.send(20);
    });
    let value = rx
        .bind_await(|x| async move { Outcome::from_value(x + 1) })
        .map_await(|x| async move { x * 2 })
        .write_or_async(0)
        .await;
    assert_eq!(value, 42);
}

// ============================================================================
// Ordering and short-circuit
// ============================================================================

#[tokio::test]
async fn stages_after_fault_never_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let first = calls.clone();
    let second = calls.clone();

    let outcome = fetch(Some(4.0))
        .try_map_async(|_| Err::<f64, _>(Fault::msg("rejected")))
        .map_async(move |v| {
            first.fetch_add(1, Ordering::SeqCst);
            v
        })
        .map_await(move |v| async move {
            second.fetch_add(1, Ordering::SeqCst);
            v
        })
        .await;

    assert_eq!(outcome.fault().map(Fault::message), Some("rejected"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn stages_run_in_chain_order() {
    let log = Arc::new(std::sync::Mutex::new(Vec::new()));
    let a = log.clone();
    let b = log.clone();
    let c = log.clone();

    fetch(Some(1.0))
        .map_async(move |v| {
            a.lock().unwrap().push("first");
            v
        })
        .map_await(move |v| async move {
            tokio::time::sleep(Duration::from_millis(2)).await;
            b.lock().unwrap().push("second");
            v
        })
        .write_value_async(move |_| c.lock().unwrap().push("third"))
        .await;

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
}
