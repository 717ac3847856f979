//! Asynchronous adapters for [`Outcome`](crate::Outcome) chains
//!
//! This module lifts `bind`, `map` and `try_map` over in-flight computations.
//! Every adapter awaits the upstream future first and reads its completion as
//! an `Outcome`, so a failure raised while awaiting is never lost and never
//! escapes the chain:
//!
//! - completed with a value: the next stage runs as in the sync contract
//! - completed with an error or a panic: the chain holds a fault carrying it,
//!   and no later stage runs
//! - cancelled, or ended with no observable error: the chain holds a
//!   [`FaultKind::Incomplete`](crate::FaultKind::Incomplete) fault
//!
//! An upstream future that already yields an `Outcome` in the `Empty` or
//! `Fault` state is forwarded unchanged.
//!
//! Cancellation is folded into the fault case; there is no
//! separate "cancelled" disposition. No timeout is built in: wrap the upstream
//! future in `tokio::time::timeout` and the expiry arrives as a fault.
//!
//! # Examples
//!
//! ```
//! use manganese::prelude::*;
//! use std::io;
//!
//! # tokio_test::block_on(async {
//! let message = async { Err::<f64, _>(io::Error::other("disk full")) }
//!     .map_async(f64::sqrt)
//!     .write_async(
//!         |v| v.to_string(),
//!         || "empty".to_string(),
//!         |fault| fault.message().to_string(),
//!     )
//!     .await;
//!
//! assert_eq!(message, "disk full");
//! # });
//! ```
//!
//! ## Cancellation
//!
//! ```
//! use manganese::prelude::*;
//! use futures::channel::oneshot;
//!
//! # tokio_test::block_on(async {
//! let (sender, receiver) = oneshot::channel::<u32>();
//! drop(sender);
//!
//! let outcome = receiver.map_async(|n| n + 1).await;
//! assert!(outcome.fault().unwrap().is_incomplete());
//! # });
//! ```

mod ext;
#[cfg(feature = "tracing")]
mod instrument;
mod settle;

pub use ext::OutcomeFutureExt;
#[cfg(feature = "tracing")]
pub use instrument::OutcomeTracingExt;
pub use settle::{promote, settle, IntoOutcome, SettledValue};
