//! A binary container: a value is present, or it is not.
//!
//! `Optional<T>` has no fault channel. Absence carries no diagnostic
//! information, so every way a transform can go wrong (returning nothing,
//! returning an error, panicking inside [`Optional::try_map`]) collapses to
//! [`Optional::Empty`]. Use [`Outcome`](crate::Outcome) when the reason matters.
//!
//! # Absent payloads
//!
//! Plain payloads never collapse: `Optional::from_value(0)` holds `0`. Payloads
//! that admit an absent representation are written as `Option<T>` and go
//! through the `nullable` entry points, which turn `None` into `Empty`:
//!
//! ```rust
//! use manganese::Optional;
//!
//! let name: Option<&str> = None;
//! assert!(Optional::from_nullable(name).is_empty());
//!
//! let greeting = Optional::from_value("x")
//!     .map_nullable(|_| None::<String>)
//!     .write(|s| s, || "nobody home".to_string());
//! assert_eq!(greeting, "nobody home");
//! ```
//!
//! # Examples
//!
//! ```rust
//! use manganese::Optional;
//!
//! fn parse(input: &str) -> Optional<f64> {
//!     match input.trim().parse::<f64>() {
//!         Ok(value) => Optional::from_value(value),
//!         Err(_) => Optional::empty(),
//!     }
//! }
//!
//! let message = Optional::from_value("81")
//!     .bind(parse)
//!     .map(f64::sqrt)
//!     .write(
//!         |value| format!("the transformed value is: {}", value),
//!         || "the input could not be parsed".to_string(),
//!     );
//! assert_eq!(message, "the transformed value is: 9");
//! ```

use std::panic::{self, AssertUnwindSafe};

/// A value that is either present (`Value(T)`) or absent (`Empty`).
///
/// Instances are immutable; every combinator consumes `self` and returns a new
/// container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Optional<T> {
    /// A value is present
    Value(T),
    /// No value
    Empty,
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create a container holding `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// assert_eq!(Optional::from_value(0).write_or(5), 0);
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Self {
        Optional::Value(value)
    }

    /// Evaluate `f` immediately and hold its result.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Optional::Value(f())
    }

    /// Create a container from a payload that may be absent; `None` becomes `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(3)), Optional::Value(3));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::Empty);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Value(value),
            None => Optional::Empty,
        }
    }

    /// Create an empty container.
    #[inline]
    pub fn empty() -> Self {
        Optional::Empty
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, Optional::Value(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    // ========== Extractors ==========

    /// Borrow the value, if present.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Optional::Value(value) => Some(value),
            Optional::Empty => None,
        }
    }

    /// Convert to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Value(value) => Optional::Value(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Convert into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    // ========== Terminal handlers ==========

    /// Return the held value, or `default` when empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// assert_eq!(Optional::from_value(4).write_or(-1), 4);
    /// assert_eq!(Optional::empty().write_or(-1), -1);
    /// ```
    #[inline]
    pub fn write_or(self, default: T) -> T {
        match self {
            Optional::Value(value) => value,
            Optional::Empty => default,
        }
    }

    /// Dispatch to exactly one handler matching the current state.
    ///
    /// Handlers may return `()` for side effects only, or a value to leave
    /// the container.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// let text = Optional::from_value(2).write(|v| format!("got {}", v), || "none".into());
    /// assert_eq!(text, "got 2");
    /// ```
    #[inline]
    pub fn write<R, F, G>(self, on_value: F, on_empty: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Optional::Value(value) => on_value(value),
            Optional::Empty => on_empty(),
        }
    }

    /// Run `on_value` if a value is present; do nothing otherwise.
    #[inline]
    pub fn write_value<F>(self, on_value: F)
    where
        F: FnOnce(T),
    {
        if let Optional::Value(value) = self {
            on_value(value);
        }
    }

    // ========== Combinators ==========

    /// Chain a function that itself returns an `Optional`.
    ///
    /// `f` is not called when empty. Its result is returned as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::from_value(x / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::from_value(8).bind(half), Optional::Value(4));
    /// assert_eq!(Optional::from_value(7).bind(half), Optional::Empty);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Value(value) => f(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Transform the value. `f` is not called when empty.
    ///
    /// A panic inside `f` propagates to the caller; use [`Optional::try_map`]
    /// for transforms that may fail.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Value(value) => Optional::Value(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Transform the value with a function whose result may be absent.
    ///
    /// A `None` result collapses the container to `Empty`. This is the normal
    /// path, not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// let first = Optional::from_value("").map_nullable(|s: &str| s.chars().next());
    /// assert!(first.is_empty());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Optional::Value(value) => Optional::from_nullable(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Transform the value with a function that may fail.
    ///
    /// Both an `Err` return and a panic inside `f` become `Empty`: the error is
    /// discarded because `Optional` has nowhere to keep it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// let parsed = Optional::from_value("4x").try_map(|s: &str| s.parse::<i32>());
    /// assert!(parsed.is_empty());
    ///
    /// let parsed = Optional::from_value("42").try_map(|s: &str| s.parse::<i32>());
    /// assert_eq!(parsed, Optional::Value(42));
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let value = match self {
            Optional::Value(value) => value,
            Optional::Empty => return Optional::Empty,
        };

        match panic::catch_unwind(AssertUnwindSafe(move || f(value))) {
            Ok(Ok(mapped)) => Optional::Value(mapped),
            Ok(Err(_)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("optional try_map discarded an error");
                Optional::Empty
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("optional try_map discarded a panic");
                Optional::Empty
            }
        }
    }

    /// Transform the value with a fallible function whose result may be absent.
    ///
    /// An `Err`, a panic and an `Ok(None)` all become `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manganese::Optional;
    ///
    /// let first_digit = |s: &str| s.chars().next().map(|c| c.to_string().parse::<u8>()).transpose();
    /// assert_eq!(Optional::from_value("42").try_map_nullable(first_digit), Optional::Value(4));
    /// assert!(Optional::from_value("").try_map_nullable(first_digit).is_empty());
    /// assert!(Optional::from_value("x").try_map_nullable(first_digit).is_empty());
    /// ```
    pub fn try_map_nullable<U, E, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Result<Option<U>, E>,
    {
        self.try_map(f).bind(Optional::from_nullable)
    }

    /// Keep the value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Value(value) => {
                if predicate(&value) {
                    Optional::Value(value)
                } else {
                    Optional::Empty
                }
            }
            Optional::Empty => Optional::Empty,
        }
    }

    /// Return `self` if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Optional<T>) -> Self {
        match self {
            Optional::Value(_) => self,
            Optional::Empty => other,
        }
    }

    /// Run `f` on a borrowed value without changing the container.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Optional::Value(value) = &self {
            f(value);
        }
        self
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Value(value) => Some(value),
            Optional::Empty => None,
        }
    }
}
