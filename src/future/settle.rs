//! The suspension point shared by every async adapter.

use std::error::Error as StdError;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::{Fault, Outcome};

/// Values an awaited computation may yield that can be read as an [`Outcome`].
///
/// Implemented for `Outcome<T>` itself, which is forwarded unchanged, and for
/// `Result<T, E>`, whose `Err` is captured with [`Fault::from_error`]. The
/// latter covers `tokio::task::JoinHandle`, `tokio::time::timeout` and
/// `futures::channel::oneshot::Receiver`, so their cancellation and expiry
/// surface as faults.
///
/// A task whose own output is an `Outcome` settles to an outcome of an
/// outcome; use [`OutcomeFutureExt::flatten_async`](crate::OutcomeFutureExt::flatten_async)
/// to forward its inner state.
pub trait IntoOutcome {
    /// The payload type of the resulting outcome.
    type Value;

    /// Read `self` as an outcome.
    fn into_outcome(self) -> Outcome<Self::Value>;
}

impl<T> IntoOutcome for Outcome<T> {
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Fault(captured(Fault::from_error(error))),
        }
    }
}

/// Payload type of the outcome a future settles into.
pub type SettledValue<F> = <<F as Future>::Output as IntoOutcome>::Value;

/// Await `future` and read its completion as an [`Outcome`].
///
/// Nothing raised by the awaited computation escapes:
///
/// - an `Outcome` output is forwarded as-is, whatever its state
/// - an `Err` output becomes a fault carrying that error
/// - a panic while polling becomes a [`FaultKind::Panicked`](crate::FaultKind::Panicked) fault
/// - a cancelled task or dropped sender becomes a
///   [`FaultKind::Incomplete`](crate::FaultKind::Incomplete) fault
///
/// # Example
///
/// ```rust
/// use manganese::future::settle;
///
/// # tokio_test::block_on(async {
/// let outcome = settle(async { Err::<i32, _>(std::io::Error::other("disk full")) }).await;
/// assert_eq!(outcome.fault().unwrap().message(), "disk full");
///
/// let outcome = settle(async {
///     if true {
///         panic!("lost");
///     }
///     Ok::<i32, std::io::Error>(1)
/// })
/// .await;
/// assert_eq!(outcome.fault().unwrap().message(), "lost");
/// # });
/// ```
pub async fn settle<F>(future: F) -> Outcome<SettledValue<F>>
where
    F: Future,
    F::Output: IntoOutcome,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(output) => output.into_outcome(),
        Err(payload) => Outcome::Fault(captured(Fault::from_panic(payload))),
    }
}

/// Await a future yielding a raw value and hold it in an [`Outcome`].
///
/// A panic while polling becomes a fault; otherwise the result is always
/// `Value`.
///
/// # Example
///
/// ```rust
/// use manganese::{future::promote, Outcome};
///
/// # tokio_test::block_on(async {
/// assert_eq!(promote(async { 4 }).await, Outcome::Value(4));
/// # });
/// ```
pub async fn promote<F>(future: F) -> Outcome<F::Output>
where
    F: Future,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Value(value),
        Err(payload) => Outcome::Fault(captured(Fault::from_panic(payload))),
    }
}

fn captured(fault: Fault) -> Fault {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        kind = %fault.kind(),
        fault = %fault.message(),
        "captured fault from awaited computation"
    );
    fault
}
