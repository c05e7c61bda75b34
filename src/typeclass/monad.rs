//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative`
//! with the ability to sequence computations where each step can depend on
//! the result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the
//! function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::Monad;
//! use fnkit::types::Optional;
//!
//! let chained = Optional::Some(5)
//!     .and_then(|n| if n > 0 { Optional::Some(n * 2) } else { Optional::None });
//! assert_eq!(chained, Optional::Some(10));
//! ```

use super::applicative::Applicative;
use crate::types::{Optional, Result, Try};

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Monad;
/// use fnkit::types::Result;
///
/// let outcome: Result<i32, String> = Result::Ok(10);
/// let halved = Monad::flat_map(outcome, |n| Result::Ok(n / 2));
/// assert_eq!(halved, Result::Ok(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a container-producing function to the inner value and
    /// flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class; in
    /// Haskell it is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Monad;
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(5).and_then(|n| Optional::Some(n * 2)), Optional::Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// An empty or failed receiver propagates and `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Monad;
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(5).then(Optional::Some("hello")), Optional::Some("hello"));
    /// assert_eq!(Optional::<i32>::None.then(Optional::Some("hello")), Optional::None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        // Delegate to the inherent flat_map
        Optional::flat_map(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Result::flat_map(self, function)
    }
}

impl<T> Monad for Try<T> {
    /// Binding a `Try` routes the function through the fault capture
    /// boundary: an unwinding function yields `Failure`, not an unwind.
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(T) -> Try<B>,
    {
        Try::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_identity_law() {
        let function = |n: i32| Optional::Some(n * 2);
        assert_eq!(Optional::<()>::pure(5).and_then(function), function(5));
    }

    #[rstest]
    fn right_identity_law() {
        let value = Optional::Some(5);
        assert_eq!(value.and_then(Optional::<()>::pure), value);
    }
}
