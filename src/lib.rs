//! # Manganese
//!
//! Containers for the outcome of a computation that may produce a value,
//! produce nothing, or fail, with combinators for composing sync and async
//! pipelines around them.
//!
//! ## The containers
//!
//! - [`Optional<T>`]: a value or nothing. Failures collapse to `Empty`.
//! - [`Outcome<T>`]: a value, nothing, or a [`Fault`] saying what went wrong.
//!
//! Both share the same surface: `bind`, `map` and `try_map` transform the
//! payload while preserving or narrowing the state, and a `write*` call ends the
//! chain by dispatching to the handler for the final state.
//!
//! ## Quick Example
//!
//! ```rust
//! use manganese::Outcome;
//!
//! fn parse(input: &str) -> Outcome<f64> {
//!     Outcome::from_nullable(input.trim().parse::<f64>().ok())
//! }
//!
//! let report = Outcome::from_value("9")
//!     .bind(parse)
//!     .map(f64::sqrt)
//!     .map(|value| (value * 100.0).round() / 100.0)
//!     .write(
//!         |value| format!("Success: the transformed value is: {}", value),
//!         || "The input value could not be parsed.".to_string(),
//!         |fault| format!("An error occurred: {}", fault.message()),
//!     );
//!
//! assert_eq!(report, "Success: the transformed value is: 3");
//! ```
//!
//! ## Async pipelines
//!
//! The [`future`] module chains the same combinators onto in-flight
//! computations. Faults raised while awaiting are captured into the chain
//! instead of escaping:
//!
//! ```rust
//! use manganese::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let value = async { Err::<f64, _>(std::io::Error::other("disk full")) }
//!     .map_async(f64::sqrt)
//!     .write_or_async(-1.0)
//!     .await;
//! assert_eq!(value, -1.0);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod fault;
pub mod future;
pub mod optional;
pub mod outcome;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
#[cfg(feature = "try_trait")]
mod try_trait;

// Re-exports
pub use fault::{Fault, FaultKind};
pub use future::{IntoOutcome, OutcomeFutureExt};
pub use optional::Optional;
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fault::{Fault, FaultKind};
    pub use crate::future::{IntoOutcome, OutcomeFutureExt};
    pub use crate::optional::Optional;
    pub use crate::outcome::Outcome;
}
