//! Applicative type class - lifting values and applying wrapped functions.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to lift a plain value into the container (`pure`) and
//! to apply a container-wrapped function to a container-wrapped value
//! (`apply`).
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! - **Identity**: `pure(|x| x).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::Applicative;
//! use fnkit::types::Optional;
//!
//! let lifted: Optional<i32> = Optional::<()>::pure(5);
//! assert_eq!(lifted, Optional::Some(5));
//! ```

use super::functor::Functor;
use crate::types::{Optional, Result, Try};

/// A type class for types that support lifting values and applying wrapped
/// functions.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Applicative;
/// use fnkit::types::Optional;
///
/// let function = Optional::Some(|x: i32| x * 2);
/// assert_eq!(function.apply(Optional::Some(5)), Optional::Some(10));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Applicative;
    /// use fnkit::types::Try;
    ///
    /// let lifted: Try<i32> = Try::<()>::pure(5);
    /// assert_eq!(lifted, Try::Success(5));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a wrapped function to a wrapped value.
    ///
    /// The receiver holds the function; `other` holds the argument. An
    /// empty or failed receiver propagates without touching `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Applicative;
    /// use fnkit::types::Optional;
    ///
    /// let function: Optional<fn(i32) -> i32> = Optional::None;
    /// assert_eq!(function.apply(Optional::Some(5)), Optional::None);
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match self {
            Self::Some(function) => other.map(function),
            Self::None => Optional::None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::Ok(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match self {
            Self::Ok(function) => other.map(function),
            Self::Error(error) => Result::Error(error),
        }
    }
}

impl<T> Applicative for Try<T> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::Success(value)
    }

    /// Application runs behind the fault capture boundary, like
    /// [`Try::map`](crate::types::Try::map).
    #[inline]
    fn apply<B, Output>(self, other: Try<B>) -> Try<Output>
    where
        T: FnOnce(B) -> Output,
    {
        match self {
            Self::Success(function) => other.map(function),
            Self::Failure(fault) => Try::Failure(fault),
        }
    }
}
