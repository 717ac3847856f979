//! Extension trait chaining outcome combinators onto in-flight computations.
//!
//! `OutcomeFutureExt` is implemented for every future whose output is an
//! [`IntoOutcome`] value. Each adapter first settles the upstream future (see
//! [`settle`]), so a fault raised while awaiting becomes the `Fault` state and
//! every later stage passes it through without running.

use std::error::Error as StdError;
use std::future::Future;

use crate::future::settle::{promote, settle, IntoOutcome, SettledValue};
use crate::{Fault, Outcome};

/// Combinator methods for futures of outcomes.
///
/// Sync transforms come in `*_async` flavours; transforms that return a
/// future come in `*_await` flavours, and the future they return is settled
/// too. Stages run strictly in chain order.
///
/// # Example
///
/// ```rust
/// use manganese::prelude::*;
///
/// async fn fetch() -> Outcome<f64> {
///     Outcome::from_value(2.0)
/// }
///
/// # tokio_test::block_on(async {
/// let text = fetch()
///     .map_async(f64::sqrt)
///     .map_async(|v| (v * 100.0).round() / 100.0)
///     .write_async(
///         |v| format!("the transformed value is: {}", v),
///         || "the input could not be parsed".to_string(),
///         |f| format!("an error occurred: {}", f.message()),
///     )
///     .await;
/// assert_eq!(text, "the transformed value is: 1.41");
/// # });
/// ```
pub trait OutcomeFutureExt: Future + Sized
where
    Self::Output: IntoOutcome,
{
    /// Await this future and read its completion as an [`Outcome`].
    fn settle(self) -> impl Future<Output = Outcome<SettledValue<Self>>> + Send
    where
        Self: Send,
    {
        settle(self)
    }

    /// Chain a sync function returning an `Outcome`.
    fn bind_async<U, F>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) -> Outcome<U> + Send,
        SettledValue<Self>: Send,
    {
        async move { settle(self).await.bind(f) }
    }

    /// Chain a function returning another in-flight computation.
    ///
    /// The returned future is settled as well: its own faults, panics and
    /// cancellation become the `Fault` state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = std::future::ready(Outcome::from_value(3))
    ///     .bind_await(|x| async move { Ok::<_, std::io::Error>(x * 2) })
    ///     .await;
    /// assert_eq!(outcome, Outcome::Value(6));
    /// # });
    /// ```
    fn bind_await<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) -> Fut + Send,
        Fut: Future + Send,
        Fut::Output: IntoOutcome<Value = U>,
        SettledValue<Self>: Send,
        U: Send,
    {
        async move {
            let value = match settle(self).await {
                Outcome::Value(value) => value,
                Outcome::Empty => return Outcome::Empty,
                Outcome::Fault(fault) => return Outcome::Fault(fault),
            };
            settle(f(value)).await
        }
    }

    /// Read a settled value that is itself outcome-like as the chain's state.
    ///
    /// A spawned task returning an `Outcome` settles to an outcome of an
    /// outcome; this removes the outer layer so the task's own `Empty` and
    /// `Fault` states reach the next stage.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let task = tokio::spawn(async { Outcome::<f64>::empty() });
    /// let outcome = task.flatten_async().map_async(f64::sqrt).await;
    /// assert!(outcome.is_empty());
    /// # });
    /// ```
    fn flatten_async<U>(self) -> impl Future<Output = Outcome<U>> + Send
    where
        Self: Send,
        SettledValue<Self>: IntoOutcome<Value = U> + Send,
    {
        async move { settle(self).await.bind(IntoOutcome::into_outcome) }
    }

    /// Transform the value with a sync function.
    fn map_async<U, F>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) -> U + Send,
        SettledValue<Self>: Send,
    {
        async move { settle(self).await.map(f) }
    }

    /// Transform the value with an async function.
    ///
    /// A panic while awaiting the transform's future becomes the `Fault` state.
    fn map_await<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) -> Fut + Send,
        Fut: Future<Output = U> + Send,
        SettledValue<Self>: Send,
        U: Send,
    {
        async move {
            let value = match settle(self).await {
                Outcome::Value(value) => value,
                Outcome::Empty => return Outcome::Empty,
                Outcome::Fault(fault) => return Outcome::Fault(fault),
            };
            promote(f(value)).await
        }
    }

    /// Transform the value with a sync function that may fail.
    ///
    /// See [`Outcome::try_map`].
    fn try_map_async<U, E, F>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) -> Result<U, E> + Send,
        E: StdError + Send + Sync + 'static,
        SettledValue<Self>: Send,
    {
        async move { settle(self).await.try_map(f) }
    }

    /// Add a context layer to the fault, if the chain ends in one.
    fn context_async<M>(
        self,
        msg: M,
    ) -> impl Future<Output = Outcome<SettledValue<Self>>> + Send
    where
        Self: Send,
        M: Into<String>,
        SettledValue<Self>: Send,
    {
        let msg = msg.into();
        async move { settle(self).await.context(msg) }
    }

    /// Resolve to the value, or `default` for both `Empty` and `Fault`.
    fn write_or_async(
        self,
        default: SettledValue<Self>,
    ) -> impl Future<Output = SettledValue<Self>> + Send
    where
        Self: Send,
        SettledValue<Self>: Send,
    {
        async move { settle(self).await.write_or(default) }
    }

    /// Dispatch to exactly one handler once the chain resolves.
    ///
    /// Handlers are not guarded; a panic inside one unwinds to the caller.
    fn write_async<R, F, G, H>(
        self,
        on_value: F,
        on_empty: G,
        on_fault: H,
    ) -> impl Future<Output = R> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) -> R + Send,
        G: FnOnce() -> R + Send,
        H: FnOnce(Fault) -> R + Send,
        SettledValue<Self>: Send,
    {
        async move { settle(self).await.write(on_value, on_empty, on_fault) }
    }

    /// Run `on_value` once the chain resolves to a value.
    fn write_value_async<F>(self, on_value: F) -> impl Future<Output = ()> + Send
    where
        Self: Send,
        F: FnOnce(SettledValue<Self>) + Send,
        SettledValue<Self>: Send,
    {
        async move { settle(self).await.write_value(on_value) }
    }
}

impl<F> OutcomeFutureExt for F
where
    F: Future,
    F::Output: IntoOutcome,
{
}
