//! Tracing support for outcome chains.
//!
//! This module provides the `instrument_outcome` method for running an outcome
//! future inside a tracing span and recording the state it resolved to.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::future::Future;

use tracing::Instrument as _;

use crate::future::settle::{settle, IntoOutcome, SettledValue};
use crate::Outcome;

/// Extension trait for adding tracing instrumentation to outcome futures.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait OutcomeTracingExt: Future + Sized
where
    Self::Output: IntoOutcome,
{
    /// Settle this future inside `span`, then record the resolved state.
    ///
    /// The span is entered while the future is polled. The final state is
    /// logged at `debug` level inside the span, with kind and message for
    /// faults.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use manganese::prelude::*;
    /// use manganese::future::OutcomeTracingExt;
    /// use tracing::info_span;
    ///
    /// let outcome = fetch_forecast(city)
    ///     .map_async(|f| f.temperature_c)
    ///     .instrument_outcome(info_span!("forecast", %city))
    ///     .await;
    /// ```
    fn instrument_outcome(
        self,
        span: tracing::Span,
    ) -> impl Future<Output = Outcome<SettledValue<Self>>> + Send
    where
        Self: Send,
        SettledValue<Self>: Send,
    {
        async move {
            let outcome = settle(self).await;
            match &outcome {
                Outcome::Value(_) => tracing::debug!("outcome resolved to a value"),
                Outcome::Empty => tracing::debug!("outcome resolved empty"),
                Outcome::Fault(fault) => tracing::debug!(
                    kind = %fault.kind(),
                    fault = %fault.message(),
                    "outcome resolved to a fault"
                ),
            }
            outcome
        }
        .instrument(span)
    }
}

impl<F> OutcomeTracingExt for F
where
    F: Future,
    F::Output: IntoOutcome,
{
}
