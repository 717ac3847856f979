//! The carried error value of the [`Outcome`](crate::Outcome) container
//!
//! A [`Fault`] is an opaque, cloneable error: a message, an optional cause and a
//! trail of context messages added as it travels outward. Faults are produced in
//! four ways, distinguished by [`FaultKind`]:
//!
//! - supplied by a producer or caught from a fallible transform (`Raised`)
//! - caught from a panicking transform or awaited computation (`Panicked`)
//! - synthesized when a transform produced no usable result (`NoResult`)
//! - synthesized when an awaited computation was cancelled or finished without
//!   an observable error (`Incomplete`)
//!
//! # Examples
//!
//! ```
//! use manganese::{Fault, FaultKind};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! let fault = Fault::from_error(io).context("saving report");
//!
//! assert_eq!(fault.kind(), FaultKind::Raised);
//! assert_eq!(fault.message(), "disk full");
//! assert!(fault.downcast_ref::<std::io::Error>().is_some());
//! assert_eq!(format!("{}", fault), "disk full\n  -> saving report");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Message carried by [`FaultKind::NoResult`] faults.
pub const NO_RESULT_MESSAGE: &str = "the function returned no usable result";

/// Message carried by [`FaultKind::Incomplete`] faults.
pub const INCOMPLETE_MESSAGE: &str = "the asynchronous operation did not complete successfully";

const UNKNOWN_PANIC_MESSAGE: &str = "the computation panicked";

/// How a [`Fault`] came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FaultKind {
    /// An error supplied by a producer or returned by a fallible transform.
    Raised,
    /// A panic caught while running a guarded transform or awaited computation.
    Panicked,
    /// A transform returned nothing where a value was required.
    NoResult,
    /// An awaited computation was cancelled or ended without an observable error.
    Incomplete,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultKind::Raised => "raised",
            FaultKind::Panicked => "panicked",
            FaultKind::NoResult => "no result",
            FaultKind::Incomplete => "incomplete",
        };
        f.write_str(name)
    }
}

/// An error value captured into an [`Outcome`](crate::Outcome).
///
/// Cloning a `Fault` is cheap: the cause is shared behind an `Arc`, so the same
/// fault may be forwarded through any number of combinator stages and across
/// threads.
///
/// Equality compares kind, message and context trail. The cause is not
/// compared, as arbitrary errors are not comparable.
#[derive(Debug, Clone)]
pub struct Fault {
    pub(crate) kind: FaultKind,
    pub(crate) message: String,
    pub(crate) cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
    pub(crate) context: Vec<String>,
}

impl Fault {
    fn with_kind(kind: FaultKind, message: impl Into<String>) -> Self {
        Fault {
            kind,
            message: message.into(),
            cause: None,
            context: Vec::new(),
        }
    }

    /// Create a raised fault from a plain message.
    ///
    /// # Examples
    ///
    /// ```
    /// use manganese::{Fault, FaultKind};
    ///
    /// let fault = Fault::msg("boom");
    /// assert_eq!(fault.kind(), FaultKind::Raised);
    /// assert_eq!(fault.message(), "boom");
    /// assert!(fault.cause().is_none());
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Self::with_kind(FaultKind::Raised, message)
    }

    /// Capture an error value.
    ///
    /// The error's `Display` output becomes the message and the error itself is
    /// kept as the cause. A few error types are recognised and classified:
    ///
    /// - a `Fault` is returned unchanged
    /// - `futures::channel::oneshot::Canceled` becomes an [`FaultKind::Incomplete`] fault
    /// - a cancelled `tokio::task::JoinError` becomes `Incomplete` and a
    ///   panicked one becomes [`FaultKind::Panicked`]
    ///
    /// # Examples
    ///
    /// ```
    /// use manganese::{Fault, FaultKind};
    /// use futures::channel::oneshot::Canceled;
    ///
    /// let fault = Fault::from_error(Canceled);
    /// assert_eq!(fault.kind(), FaultKind::Incomplete);
    ///
    /// let original = Fault::msg("kept");
    /// assert_eq!(Fault::from_error(original.clone()), original);
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Capture an already boxed error. See [`Fault::from_error`].
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        let error = match error.downcast::<Fault>() {
            Ok(fault) => return *fault,
            Err(other) => other,
        };

        let error = match error.downcast::<futures::channel::oneshot::Canceled>() {
            Ok(_) => return Self::incomplete(),
            Err(other) => other,
        };

        let error = match error.downcast::<tokio::task::JoinError>() {
            Ok(join_error) => return Self::from_join_error(*join_error),
            Err(other) => other,
        };

        Fault {
            kind: FaultKind::Raised,
            message: error.to_string(),
            cause: Some(Arc::from(error)),
            context: Vec::new(),
        }
    }

    /// The fault synthesized when a transform returned nothing.
    pub fn no_result() -> Self {
        Self::with_kind(FaultKind::NoResult, NO_RESULT_MESSAGE)
    }

    /// The fault synthesized when an awaited computation was cancelled or ended
    /// without an observable error.
    pub fn incomplete() -> Self {
        Self::with_kind(FaultKind::Incomplete, INCOMPLETE_MESSAGE)
    }

    /// Capture a panic payload as returned by `std::panic::catch_unwind`.
    ///
    /// String payloads (the common `panic!("...")` case) become the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use manganese::{Fault, FaultKind};
    ///
    /// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
    /// let fault = Fault::from_panic(payload);
    /// assert_eq!(fault.kind(), FaultKind::Panicked);
    /// assert_eq!(fault.message(), "boom");
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            UNKNOWN_PANIC_MESSAGE.to_string()
        };
        Self::with_kind(FaultKind::Panicked, message)
    }

    fn from_join_error(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            return Self::incomplete();
        }
        match error.try_into_panic() {
            Ok(payload) => Self::from_panic(payload),
            Err(other) => Fault {
                kind: FaultKind::Raised,
                message: other.to_string(),
                cause: Some(Arc::new(other)),
                context: Vec::new(),
            },
        }
    }

    /// Add a context layer.
    ///
    /// Context is accumulated inner to outer, the order in which it is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use manganese::Fault;
    ///
    /// let fault = Fault::msg("parse error")
    ///     .context("reading config file")
    ///     .context("initializing app");
    ///
    /// assert_eq!(fault.context_trail(), &["reading config file", "initializing app"]);
    /// ```
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// How this fault came to exist.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The fault message, without context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The context trail, inner to outer.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// The captured error, if the fault was built from one.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Recover the captured error as its concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.cause.as_deref()?.downcast_ref::<E>()
    }

    /// Returns `true` if this fault was synthesized for a missing result.
    pub fn is_no_result(&self) -> bool {
        self.kind == FaultKind::NoResult
    }

    /// Returns `true` if this fault was synthesized for an unfinished computation.
    pub fn is_incomplete(&self) -> bool {
        self.kind == FaultKind::Incomplete
    }

    /// Iterate over the cause chain, starting with the captured error.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(StdError::source(self), |&error| error.source())
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message && self.context == other.context
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }

        Ok(())
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Fault::msg(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Fault::msg(message)
    }
}
