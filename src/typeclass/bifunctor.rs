//! Bifunctor type class - mapping over two type parameters.
//!
//! This module provides the `Bifunctor` trait, which represents types with
//! two type parameters that can both have functions mapped over them.
//! While `Functor` transforms `F<A>` to `F<B>`, `Bifunctor` transforms
//! `F<A, B>` to `F<C, D>`.
//!
//! # Laws
//!
//! All `Bifunctor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Instances
//!
//! [`Either<L, R>`] implements `Bifunctor<L, R>`; this is the whole-value
//! mapping surface of `Either`, whose one-sided maps otherwise live on its
//! projections. [`Result<T, E>`] implements `Bifunctor<T, E>` in its own
//! parameter order: `first` transforms the success value and `second`
//! transforms the failure value, consistent with the inherent
//! [`Result::bimap`](crate::types::Result::bimap).
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::Bifunctor;
//! use fnkit::types::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
//! ```

use crate::types::{Either, Result};

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See the module-level documentation for laws and instances.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Bifunctor;
/// use fnkit::types::Result;
///
/// let outcome: Result<i32, String> = Result::Error("boom".to_string());
/// assert_eq!(outcome.second(|e| e.len()), Result::Error(4));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Either<L, R>`, `Target<C, D> = Either<C, D>`.
    /// For `Result<T, E>`, `Target<C, D> = Result<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Bifunctor;
    /// use fnkit::types::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Bifunctor;
    /// use fnkit::types::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.first(|x| x.to_string()), Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Bifunctor;
    /// use fnkit::types::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.second(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        // Delegate to the inherent bimap
        Either::bimap(self, first_function, second_function)
    }
}

impl<T, E> Bifunctor<T, E> for Result<T, E> {
    type Target<C, D> = Result<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<C, D>
    where
        F: FnOnce(T) -> C,
        G: FnOnce(E) -> D,
    {
        Result::bimap(self, first_function, second_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bimap_identity_law() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert_eq!(value.clone().bimap(|x| x, |y| y), value);
    }

    #[rstest]
    fn first_second_consistency() {
        let value: Result<i32, String> = Result::Ok(5);
        let by_bimap = value.clone().bimap(|x| x * 2, |e: String| e.len());
        let by_steps = value.first(|x| x * 2).second(|e: String| e.len());
        assert_eq!(by_bimap, by_steps);
    }
}
