//! `?` support for containers (nightly, `try_trait` feature)
//!
//! With the `try_trait` feature enabled on a nightly toolchain, `?` works
//! inside functions returning `Optional` or `Outcome`:
//!
//! - `Optional::Empty` returns early as `Empty`
//! - `Outcome::Empty` and `Outcome::Fault` return early unchanged
//! - a `Result::Err` inside an `Outcome` function returns early as a fault
//!
//! ```rust,ignore
//! #![feature(try_trait_v2)]
//! use manganese::Outcome;
//!
//! fn double_parsed(input: &str) -> Outcome<i32> {
//!     let parsed: i32 = input.parse()?;
//!     Outcome::from_value(parsed * 2)
//! }
//! ```

use std::convert::Infallible;
use std::error::Error as StdError;
use std::ops::{ControlFlow, FromResidual, Try};

use crate::{Fault, Optional, Outcome};

impl<T> Try for Optional<T> {
    type Output = T;
    type Residual = Optional<Infallible>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Optional::Value(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Optional::Value(value) => ControlFlow::Continue(value),
            Optional::Empty => ControlFlow::Break(Optional::Empty),
        }
    }
}

impl<T> FromResidual<Optional<Infallible>> for Optional<T> {
    #[inline]
    fn from_residual(residual: Optional<Infallible>) -> Self {
        match residual {
            Optional::Empty => Optional::Empty,
            Optional::Value(never) => match never {},
        }
    }
}

impl<T> Try for Outcome<T> {
    type Output = T;
    type Residual = Outcome<Infallible>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Outcome::Value(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Outcome::Value(value) => ControlFlow::Continue(value),
            Outcome::Empty => ControlFlow::Break(Outcome::Empty),
            Outcome::Fault(fault) => ControlFlow::Break(Outcome::Fault(fault)),
        }
    }
}

impl<T> FromResidual<Outcome<Infallible>> for Outcome<T> {
    #[inline]
    fn from_residual(residual: Outcome<Infallible>) -> Self {
        match residual {
            Outcome::Empty => Outcome::Empty,
            Outcome::Fault(fault) => Outcome::Fault(fault),
            Outcome::Value(never) => match never {},
        }
    }
}

impl<T, E> FromResidual<Result<Infallible, E>> for Outcome<T>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Err(error) => Outcome::Fault(Fault::from_error(error)),
            Ok(never) => match never {},
        }
    }
}
