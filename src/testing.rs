//! Testing utilities for code built on Manganese containers
//!
//! This module provides assertion macros for container states and, with the
//! `proptest` feature, `Arbitrary` implementations for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use manganese::{assert_empty, assert_fault, assert_value, FaultKind, Optional, Outcome};
//!
//! assert_value!(Outcome::from_value(42));
//! assert_value!(Optional::from_value(42));
//! assert_empty!(Outcome::<i32>::empty());
//! assert_fault!(Outcome::<i32>::from_fault("boom"));
//! assert_fault!(Outcome::from_value(1).map_nullable(|_| None::<i32>), FaultKind::NoResult);
//! ```

/// Assert that a container holds a value.
///
/// Works with both `Optional` and `Outcome`.
///
/// # Example
///
/// ```rust
/// use manganese::{assert_value, Outcome};
///
/// assert_value!(Outcome::from_value(42));
/// ```
#[macro_export]
macro_rules! assert_value {
    ($container:expr) => {{
        let container = $container;
        if !container.has_value() {
            panic!("Expected Value, got {:?}", container);
        }
    }};
}

/// Assert that a container is empty.
///
/// Works with both `Optional` and `Outcome`.
///
/// # Example
///
/// ```rust
/// use manganese::{assert_empty, Optional};
///
/// assert_empty!(Optional::<i32>::empty());
/// ```
#[macro_export]
macro_rules! assert_empty {
    ($container:expr) => {{
        let container = $container;
        if !container.is_empty() {
            panic!("Expected Empty, got {:?}", container);
        }
    }};
}

/// Assert that an outcome holds a fault, optionally of a given kind.
///
/// # Example
///
/// ```rust
/// use manganese::{assert_fault, FaultKind, Outcome};
///
/// let outcome = Outcome::<i32>::from_fault("boom");
/// assert_fault!(outcome, FaultKind::Raised);
/// ```
#[macro_export]
macro_rules! assert_fault {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Fault(_) => {}
            other => {
                panic!("Expected Fault, got {:?}", other);
            }
        }
    };
    ($outcome:expr, $kind:expr) => {
        match $outcome {
            $crate::Outcome::Fault(fault) => {
                assert_eq!(fault.kind(), $kind, "Fault kind mismatch: {}", fault);
            }
            other => {
                panic!("Expected Fault of kind {:?}, got {:?}", $kind, other);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Fault, FaultKind, Optional, Outcome};

#[cfg(feature = "proptest")]
impl Arbitrary for FaultKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(FaultKind::Raised),
            Just(FaultKind::Panicked),
            Just(FaultKind::NoResult),
            Just(FaultKind::Incomplete),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Fault {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<FaultKind>(),
            "[a-z ]{1,24}",
            prop::collection::vec("[a-z ]{1,12}", 0..3),
        )
            .prop_map(|(kind, message, context)| Fault {
                kind,
                message,
                cause: None,
                context,
            })
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Optional::from_value),
            Just(()).prop_map(|_| Optional::empty()),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Outcome<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Outcome::from_value),
            Just(()).prop_map(|_| Outcome::empty()),
            any::<Fault>().prop_map(Outcome::Fault),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{FaultKind, Optional, Outcome};

    #[test]
    fn assert_value_macro() {
        assert_value!(Outcome::from_value(42));
        assert_value!(Optional::from_value("x"));
    }

    #[test]
    fn assert_empty_macro() {
        assert_empty!(Outcome::<i32>::empty());
        assert_empty!(Optional::<i32>::empty());
    }

    #[test]
    fn assert_fault_macro() {
        assert_fault!(Outcome::<i32>::from_fault("error"));
        assert_fault!(
            Outcome::from_value(1).map_nullable(|_| None::<i32>),
            FaultKind::NoResult
        );
    }

    #[test]
    #[should_panic(expected = "Expected Value, got")]
    fn assert_value_panics_on_empty() {
        assert_value!(Outcome::<i32>::empty());
    }

    #[test]
    #[should_panic(expected = "Expected Empty, got")]
    fn assert_empty_panics_on_value() {
        assert_empty!(Optional::from_value(1));
    }

    #[test]
    #[should_panic(expected = "Expected Fault, got")]
    fn assert_fault_panics_on_value() {
        assert_fault!(Outcome::from_value(1));
    }

    #[test]
    #[should_panic(expected = "Fault kind mismatch")]
    fn assert_fault_panics_on_wrong_kind() {
        assert_fault!(Outcome::<i32>::from_fault("x"), FaultKind::Incomplete);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{Optional, Outcome};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_valid_instances(
                outcome in any::<Outcome<i32>>()
            ) {
                let states = [outcome.has_value(), outcome.is_empty(), outcome.has_fault()];
                prop_assert_eq!(states.iter().filter(|s| **s).count(), 1);
            }

            #[test]
            fn optional_arbitrary_generates_valid_instances(
                optional in any::<Optional<i32>>()
            ) {
                prop_assert_ne!(optional.has_value(), optional.is_empty());
            }
        }
    }
}
