//! A ternary container: a value, nothing, or a fault.
//!
//! `Outcome<T>` is the result container of this crate. Exactly one of three
//! states holds:
//!
//! - `Value(T)`: the computation produced a value
//! - `Empty`: the computation produced nothing, with no error attached
//! - `Fault(Fault)`: the computation failed, and the [`Fault`] says why
//!
//! Combinators only run in the `Value` state; `Empty` and `Fault` pass through
//! every stage unchanged until a terminal `write*` call leaves the container.
//!
//! # Map vs TryMap
//!
//! [`Outcome::map`] and [`Outcome::bind`] are happy-path operations: a panic in
//! the supplied function unwinds to the caller. [`Outcome::try_map`] guards its
//! function and turns both `Err` returns and panics into the `Fault` state.
//!
//! Where [`Optional`](crate::Optional) silently drops a missing result,
//! `Outcome` records it: [`Outcome::map_nullable`] turns a `None` into a
//! [`FaultKind::NoResult`](crate::FaultKind::NoResult) fault rather than `Empty`.
//!
//! # Examples
//!
//! ```rust
//! use manganese::Outcome;
//!
//! let rounded = Outcome::from_value(9.0_f64)
//!     .map(f64::sqrt)
//!     .map(|r| (r * 100.0).round() / 100.0)
//!     .write_or(-1.0);
//! assert_eq!(rounded, 3.0);
//!
//! let missing = Outcome::<f64>::empty().map(f64::sqrt).write_or(-1.0);
//! assert_eq!(missing, -1.0);
//! ```

use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use crate::{Fault, Optional};

/// The outcome of a computation that may produce a value, produce nothing, or fail.
///
/// Instances are immutable; every combinator consumes `self` and returns a new
/// container. Cloning is cheap when `T` is, since a [`Fault`] shares its cause.
///
/// # Example
///
/// ```rust
/// use manganese::{Fault, Outcome};
///
/// fn describe(outcome: Outcome<u32>) -> String {
///     outcome.write(
///         |v| format!("value {}", v),
///         || "empty".to_string(),
///         |f| format!("fault: {}", f.message()),
///     )
/// }
///
/// assert_eq!(describe(Outcome::from_value(1)), "value 1");
/// assert_eq!(describe(Outcome::empty()), "empty");
/// assert_eq!(describe(Outcome::from_fault(Fault::msg("bad"))), "fault: bad");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome<T> {
    /// The computation produced a value
    Value(T),
    /// The computation produced nothing
    Empty,
    /// The computation failed
    Fault(Fault),
}

impl<T> Outcome<T> {
    // ========== Constructors ==========

    /// Create an outcome holding `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Outcome::Value(value)
    }

    /// Evaluate `f` immediately and hold its result.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Outcome::Value(f())
    }

    /// Create an outcome from a payload that may be absent; `None` becomes `Empty`.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Value(value),
            None => Outcome::Empty,
        }
    }

    /// Create an empty outcome.
    #[inline]
    pub fn empty() -> Self {
        Outcome::Empty
    }

    /// Create a faulted outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// let outcome = Outcome::<i32>::from_fault("connection refused");
    /// assert!(outcome.has_fault());
    /// ```
    #[inline]
    pub fn from_fault(fault: impl Into<Fault>) -> Self {
        Outcome::Fault(fault.into())
    }

    /// Lift a standard `Result`; `Err` is captured with [`Fault::from_error`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// let parsed = Outcome::from_result("7".parse::<i32>());
    /// assert_eq!(parsed, Outcome::Value(7));
    ///
    /// let parsed = Outcome::from_result("seven".parse::<i32>());
    /// assert_eq!(parsed.fault().unwrap().message(), "invalid digit found in string");
    /// ```
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Fault(Fault::from_error(error)),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this outcome holds a value.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// Returns `true` if this outcome holds a fault.
    #[inline]
    pub fn has_fault(&self) -> bool {
        matches!(self, Outcome::Fault(_))
    }

    /// Returns `true` if this outcome holds neither a value nor a fault.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    // ========== Extractors ==========

    /// Borrow the value, if present.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the fault, if present.
    #[inline]
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Outcome::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Convert to `Outcome<&T>`, cloning the fault if there is one.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Empty => Outcome::Empty,
            Outcome::Fault(fault) => Outcome::Fault(fault.clone()),
        }
    }

    /// Convert into a standard `Result`, with `Empty` as `Ok(None)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// assert_eq!(Outcome::from_value(1).into_result(), Ok(Some(1)));
    /// assert_eq!(Outcome::<i32>::empty().into_result(), Ok(None));
    /// assert!(Outcome::<i32>::from_fault("x").into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<Option<T>, Fault> {
        match self {
            Outcome::Value(value) => Ok(Some(value)),
            Outcome::Empty => Ok(None),
            Outcome::Fault(fault) => Err(fault),
        }
    }

    /// Drop the fault channel; both `Empty` and `Fault` become empty.
    pub fn into_optional(self) -> Optional<T> {
        match self {
            Outcome::Value(value) => Optional::Value(value),
            _ => Optional::Empty,
        }
    }

    // ========== Terminal handlers ==========

    /// Return the held value, or `default` for both `Empty` and `Fault`.
    #[inline]
    pub fn write_or(self, default: T) -> T {
        match self {
            Outcome::Value(value) => value,
            _ => default,
        }
    }

    /// Dispatch to exactly one handler matching the current state.
    ///
    /// Handlers are not guarded: a panic inside one unwinds to the caller.
    #[inline]
    pub fn write<R, F, G, H>(self, on_value: F, on_empty: G, on_fault: H) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
        H: FnOnce(Fault) -> R,
    {
        match self {
            Outcome::Value(value) => on_value(value),
            Outcome::Empty => on_empty(),
            Outcome::Fault(fault) => on_fault(fault),
        }
    }

    /// Run `on_value` if a value is present; do nothing otherwise.
    #[inline]
    pub fn write_value<F>(self, on_value: F)
    where
        F: FnOnce(T),
    {
        if let Outcome::Value(value) = self {
            on_value(value);
        }
    }

    // ========== Combinators ==========

    /// Chain a function that itself returns an `Outcome`.
    ///
    /// `f` runs only in the `Value` state. `Empty` and `Fault` pass through with
    /// their payload untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// let checked = |x: i32| {
    ///     if x >= 0 { Outcome::from_value(x) } else { Outcome::from_fault("negative") }
    /// };
    /// assert_eq!(Outcome::from_value(3).bind(checked), Outcome::Value(3));
    /// assert!(Outcome::from_value(-3).bind(checked).has_fault());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Value(value) => f(value),
            Outcome::Empty => Outcome::Empty,
            Outcome::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Transform the value. `f` runs only in the `Value` state.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Transform the value with a function whose result may be absent.
    ///
    /// A `None` result becomes a [`Fault::no_result`] fault, not `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// let outcome = Outcome::from_value(5).map_nullable(|_| None::<String>);
    /// assert!(outcome.fault().unwrap().is_no_result());
    /// ```
    pub fn map_nullable<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Outcome::Value(value) => match f(value) {
                Some(mapped) => Outcome::Value(mapped),
                None => Outcome::Fault(Fault::no_result()),
            },
            Outcome::Empty => Outcome::Empty,
            Outcome::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Transform the value with a function that may fail.
    ///
    /// An `Err` return is captured with [`Fault::from_error`], keeping its message
    /// and the error itself as the cause. A panic is captured with
    /// [`Fault::from_panic`]. Nothing escapes to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::{Fault, Outcome};
    ///
    /// let outcome = Outcome::from_value(5).try_map(|_| Err::<i32, _>(Fault::msg("boom")));
    /// assert_eq!(outcome.fault().unwrap().message(), "boom");
    ///
    /// let outcome = Outcome::from_value("21").try_map(|s: &str| s.parse::<i32>());
    /// assert_eq!(outcome.map(|x| x * 2), Outcome::Value(42));
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: StdError + Send + Sync + 'static,
    {
        let value = match self {
            Outcome::Value(value) => value,
            Outcome::Empty => return Outcome::Empty,
            Outcome::Fault(fault) => return Outcome::Fault(fault),
        };

        let fault = match panic::catch_unwind(AssertUnwindSafe(move || f(value))) {
            Ok(Ok(mapped)) => return Outcome::Value(mapped),
            Ok(Err(error)) => Fault::from_error(error),
            Err(payload) => Fault::from_panic(payload),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %fault.kind(), fault = %fault.message(), "try_map captured a fault");

        Outcome::Fault(fault)
    }

    /// Transform the value with a fallible function whose result may be absent.
    ///
    /// Errors and panics are captured as in [`Outcome::try_map`]. An `Ok(None)`
    /// result becomes a [`Fault::no_result`] fault, as in
    /// [`Outcome::map_nullable`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::{FaultKind, Outcome};
    ///
    /// let lookup = |key: &str| -> Result<Option<u32>, std::num::ParseIntError> {
    ///     if key.is_empty() { Ok(None) } else { key.parse().map(Some) }
    /// };
    ///
    /// assert_eq!(Outcome::from_value("7").try_map_nullable(lookup), Outcome::Value(7));
    /// let missing = Outcome::from_value("").try_map_nullable(lookup);
    /// assert_eq!(missing.fault().unwrap().kind(), FaultKind::NoResult);
    /// let invalid = Outcome::from_value("x").try_map_nullable(lookup);
    /// assert_eq!(invalid.fault().unwrap().kind(), FaultKind::Raised);
    /// ```
    pub fn try_map_nullable<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<Option<U>, E>,
        E: StdError + Send + Sync + 'static,
    {
        self.try_map(f).map_nullable(|mapped| mapped)
    }

    /// Add a context layer to a fault; other states pass through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// let outcome = Outcome::<()>::from_fault("timeout").context("fetching weather");
    /// assert_eq!(outcome.fault().unwrap().context_trail(), &["fetching weather"]);
    /// ```
    pub fn context(self, msg: impl Into<String>) -> Self {
        match self {
            Outcome::Fault(fault) => Outcome::Fault(fault.context(msg)),
            other => other,
        }
    }

    /// Replace an `Empty` outcome with the one produced by `f`.
    pub fn or_else_empty<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Outcome<T>,
    {
        match self {
            Outcome::Empty => f(),
            other => other,
        }
    }

    /// Run `f` on a borrowed value without changing the outcome.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Value(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on a borrowed fault without changing the outcome.
    #[inline]
    pub fn inspect_fault<F>(self, f: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Outcome::Fault(fault) = &self {
            f(fault);
        }
        self
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Remove one level of nesting.
    ///
    /// The inner outcome is returned as-is, so its `Empty` and `Fault` states
    /// are kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Outcome;
    ///
    /// assert_eq!(Outcome::from_value(Outcome::from_value(1)).flatten(), Outcome::Value(1));
    /// assert!(Outcome::from_value(Outcome::<i32>::empty()).flatten().is_empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Empty
    }
}

impl<T> From<Optional<T>> for Outcome<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Value(value) => Outcome::Value(value),
            Optional::Empty => Outcome::Empty,
        }
    }
}

impl<T> From<Fault> for Outcome<T> {
    fn from(fault: Fault) -> Self {
        Outcome::Fault(fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaultKind;
    use std::cell::Cell;
    use std::io;

    fn all_states() -> Vec<Outcome<i32>> {
        vec![
            Outcome::from_value(1),
            Outcome::empty(),
            Outcome::from_fault(Fault::msg("failed").context("somewhere")),
        ]
    }

    #[test]
    fn test_states_are_exclusive() {
        let value = Outcome::from_value(1);
        assert!(value.has_value() && !value.has_fault() && !value.is_empty());

        let empty = Outcome::<i32>::empty();
        assert!(!empty.has_value() && !empty.has_fault() && empty.is_empty());

        let fault = Outcome::<i32>::from_fault("x");
        assert!(!fault.has_value() && fault.has_fault() && !fault.is_empty());
    }

    #[test]
    fn test_write_invokes_exactly_one_handler() {
        for outcome in all_states() {
            let expected = (outcome.has_value(), outcome.is_empty(), outcome.has_fault());
            let calls = Cell::new((false, false, false));

            outcome.write(
                |_| calls.set((true, calls.get().1, calls.get().2)),
                || calls.set((calls.get().0, true, calls.get().2)),
                |_| calls.set((calls.get().0, calls.get().1, true)),
            );

            assert_eq!(calls.get(), expected);
        }
    }

    #[test]
    fn test_write_or_covers_empty_and_fault() {
        assert_eq!(Outcome::from_value(2).write_or(-1), 2);
        assert_eq!(Outcome::<i32>::empty().write_or(-1), -1);
        assert_eq!(Outcome::<i32>::from_fault("x").write_or(-1), -1);
    }

    #[test]
    fn test_bind_on_fault_doesnt_execute_and_keeps_fault() {
        let original = Fault::from_error(io::Error::new(io::ErrorKind::Other, "disk full"));
        let called = Cell::new(false);

        let result = Outcome::<i32>::from_fault(original.clone()).bind(|x| {
            called.set(true);
            Outcome::from_value(x)
        });

        assert!(!called.get());
        let fault = result.fault().unwrap();
        assert_eq!(fault, &original);
        assert!(fault.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_bind_identity_preserves_state() {
        for outcome in all_states() {
            assert_eq!(outcome.clone().bind(Outcome::from_value), outcome);
        }
    }

    #[test]
    fn test_map_on_empty_doesnt_execute() {
        let result = Outcome::<i32>::empty().map(|_| -> i32 { panic!("must not run") });
        assert!(result.is_empty());
    }

    #[test]
    fn test_map_nullable_to_none_is_fault_not_empty() {
        let result = Outcome::from_value(5).map_nullable(|_| None::<&str>);
        assert!(result.has_fault());
        assert_eq!(result.fault().unwrap().kind(), FaultKind::NoResult);
    }

    #[test]
    fn test_map_nullable_passes_through_fault() {
        let result = Outcome::<i32>::from_fault("upstream").map_nullable(|x| Some(x + 1));
        assert_eq!(result.fault().unwrap().message(), "upstream");
    }

    #[test]
    fn test_try_map_captures_error_message() {
        let result = Outcome::from_value(5)
            .try_map(|_| Err::<i32, _>(io::Error::new(io::ErrorKind::Other, "boom")));
        let fault = result.fault().unwrap();
        assert_eq!(fault.message(), "boom");
        assert_eq!(fault.kind(), FaultKind::Raised);
    }

    #[test]
    fn test_try_map_captures_panic() {
        let result = Outcome::from_value(5).try_map(|_| -> Result<i32, Fault> { panic!("boom") });
        let fault = result.fault().unwrap();
        assert_eq!(fault.message(), "boom");
        assert_eq!(fault.kind(), FaultKind::Panicked);
    }

    #[test]
    fn test_try_map_skips_non_value_states() {
        let result = Outcome::<i32>::empty().try_map(|_| -> Result<i32, Fault> { panic!("no") });
        assert!(result.is_empty());
    }

    #[test]
    fn test_sqrt_round_scenarios() {
        let result = Outcome::from_value(9.0_f64)
            .map(f64::sqrt)
            .map(|r| (r * 100.0).round() / 100.0)
            .write_or(-1.0);
        assert_eq!(result, 3.0);

        let result = Outcome::<f64>::empty().map(f64::sqrt).write_or(-1.0);
        assert_eq!(result, -1.0);
    }

    #[test]
    fn test_try_map_nullable_states() {
        let parse = |s: &str| -> Result<Option<i32>, std::num::ParseIntError> {
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some)
            }
        };

        assert_eq!(Outcome::from_value("4").try_map_nullable(parse), Outcome::Value(4));
        crate::assert_fault!(Outcome::from_value("").try_map_nullable(parse), FaultKind::NoResult);
        crate::assert_fault!(Outcome::from_value("z").try_map_nullable(parse), FaultKind::Raised);
        crate::assert_fault!(
            Outcome::from_value(1).try_map_nullable(|_| -> Result<Option<i32>, Fault> {
                panic!("lookup failed")
            }),
            FaultKind::Panicked
        );
        assert!(Outcome::<&str>::empty().try_map_nullable(parse).is_empty());
    }

    #[test]
    fn test_flatten_keeps_inner_state() {
        assert_eq!(Outcome::from_value(Outcome::from_value(2)).flatten(), Outcome::Value(2));
        assert!(Outcome::from_value(Outcome::<i32>::empty()).flatten().is_empty());

        let inner = Fault::msg("inner").context("task");
        let nested = Outcome::from_value(Outcome::<i32>::from_fault(inner.clone()));
        assert_eq!(nested.flatten().fault(), Some(&inner));

        let outer = Outcome::<Outcome<i32>>::from_fault("outer");
        assert_eq!(outer.flatten().fault().unwrap().message(), "outer");
    }

    #[test]
    fn test_context_only_touches_fault() {
        assert_eq!(Outcome::from_value(1).context("ignored"), Outcome::Value(1));
        let faulted = Outcome::<i32>::from_fault("x").context("outer");
        assert_eq!(faulted.fault().unwrap().context_trail(), &["outer"]);
    }

    #[test]
    fn test_or_else_empty() {
        assert_eq!(
            Outcome::<i32>::empty().or_else_empty(|| Outcome::from_value(4)),
            Outcome::Value(4)
        );
        assert!(Outcome::<i32>::from_fault("x")
            .or_else_empty(|| Outcome::from_value(4))
            .has_fault());
    }

    #[test]
    fn test_inspect_fault() {
        let seen = Cell::new(false);
        let _ = Outcome::<i32>::from_fault("x").inspect_fault(|_| seen.set(true));
        assert!(seen.get());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Outcome::from(Optional::Value(1)), Outcome::Value(1));
        assert_eq!(Outcome::<i32>::from(Optional::Empty), Outcome::Empty);
        assert!(Outcome::<i32>::from(Fault::no_result()).has_fault());
        assert_eq!(Outcome::<i32>::from_fault("x").into_optional(), Optional::Empty);
        assert_eq!(Outcome::from_nullable(None::<i32>), Outcome::Empty);
        assert_eq!(Outcome::from_fn(|| 2), Outcome::Value(2));
    }
}
