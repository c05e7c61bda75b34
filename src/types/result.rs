//! Result type - a success or failure outcome.
//!
//! This module provides the crate's `Result<T, E>` type: structurally a
//! disjoint union like [`Either`](super::Either), but semantically fixed so
//! that `Ok` always carries the success value and `Error` always carries the
//! failure value. On top of the shared monadic vocabulary it adds
//! error-side operations (`error_map`, `recover`, `recover_with`) and
//! predicate-driven failure (`filter` with an error payload).
//!
//! This type is distinct from `core::result::Result`; conversions in both
//! directions are provided.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::types::Result;
//!
//! let ok: Result<i32, String> = Result::Ok(10);
//! let rejected = ok.filter(|x| *x < 0, "negative-required".to_string());
//! assert_eq!(rejected, Result::Error("negative-required".to_string()));
//! ```

use std::fmt;

use super::either::Either;
use super::nothing::Nothing;
use super::optional::Optional;

/// A success (`Ok`) or failure (`Error`) outcome.
///
/// `Ok` is the truthy branch: `map`, `flat_map`, `filter` and `get` operate
/// on the success value, while `error_map`, `recover` and `recover_with`
/// operate on the failure value.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use fnkit::types::Result;
///
/// let outcome: Result<i32, String> = Result::Ok(5);
/// assert_eq!(outcome.map(|x| x * 2).get_or_else(0), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Error(E),
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(42);
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Error("boom".to_string());
    /// assert!(outcome.is_error());
    /// ```
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Error` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(42);
    /// assert_eq!(outcome.get(), 42);
    /// ```
    #[inline]
    pub fn get(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic!("called `Result::get()` on an `Error` value"),
        }
    }

    /// Returns the success value, or `or` if this is an `Error`.
    #[inline]
    pub fn get_or_else(self, or: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => or,
        }
    }

    /// Returns the success value, or the result of evaluating `or` if this
    /// is an `Error`. The supplier is only invoked for an `Error` receiver.
    #[inline]
    pub fn get_or_else_with<F>(self, or: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => or(),
        }
    }

    /// Returns the failure value, consuming the result.
    ///
    /// This is the narrowing conversion to `E`.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Error("boom".to_string());
    /// assert_eq!(outcome.unwrap_error(), "boom".to_string());
    /// ```
    #[inline]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Ok(_) => panic!("called `Result::unwrap_error()` on an `Ok` value"),
            Self::Error(error) => error,
        }
    }

    /// Returns `Some` of the failure value, or `None` if this is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Optional, Result};
    ///
    /// let outcome: Result<i32, String> = Result::Error("boom".to_string());
    /// assert_eq!(outcome.error(), Optional::Some("boom".to_string()));
    /// ```
    #[inline]
    pub fn error(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::None,
            Self::Error(error) => Optional::Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// An `Error` receiver passes through unchanged without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(5);
    /// assert_eq!(outcome.map(|x| x * 2), Result::Ok(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Applies a function to the failure value, leaving `Ok` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Error("boom".to_string());
    /// assert_eq!(outcome.error_map(|e| e.len()), Result::Error(4));
    /// ```
    #[inline]
    pub fn error_map<U, F>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(function(error)),
        }
    }

    /// Applies one of two functions, transforming both type parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(5);
    /// assert_eq!(outcome.bimap(|x| x * 2, |e: String| e.len()), Result::Ok(10));
    /// ```
    #[inline]
    pub fn bimap<U, V, F, G>(self, ok_function: F, error_function: G) -> Result<U, V>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => Result::Ok(ok_function(value)),
            Self::Error(error) => Result::Error(error_function(error)),
        }
    }

    /// Applies a result-producing function to the success value.
    ///
    /// Slightly different from `map` in that the function is expected to
    /// return a `Result` (which could be `Error`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// fn checked_half(x: i32) -> Result<i32, String> {
    ///     if x % 2 == 0 { Result::Ok(x / 2) } else { Result::Error("odd".to_string()) }
    /// }
    ///
    /// assert_eq!(Result::Ok(8).flat_map(checked_half), Result::Ok(4));
    /// assert_eq!(Result::Ok(5).flat_map(checked_half), Result::Error("odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Runs a result-producing function for its effect on the success
    /// value, discarding its payload but propagating its failure.
    ///
    /// On success the original `Ok` value is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// fn validate(x: &i32) -> Result<(), String> {
    ///     if *x > 0 { Result::Ok(()) } else { Result::Error("not positive".to_string()) }
    /// }
    ///
    /// assert_eq!(Result::Ok(5).flat_tap(validate), Result::Ok(5));
    /// assert_eq!(Result::Ok(-5).flat_tap(validate), Result::Error("not positive".to_string()));
    /// ```
    #[inline]
    pub fn flat_tap<U, F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => match function(&value) {
                Result::Ok(_) => Self::Ok(value),
                Result::Error(error) => Self::Error(error),
            },
            Self::Error(error) => Self::Error(error),
        }
    }

    // =========================================================================
    // Recovery Operations
    // =========================================================================

    /// Converts a failure into a success by applying `recover` to the
    /// failure value. An `Ok` receiver passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Error("boom".to_string());
    /// assert_eq!(outcome.recover(|e| e.len() as i32), Result::Ok(4));
    /// ```
    #[inline]
    pub fn recover<F>(self, recover: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Error(error) => Self::Ok(recover(error)),
        }
    }

    /// Applies a result-producing recovery function to the failure value,
    /// allowing the error type to change. This is `flat_map` for the
    /// failure side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Error("boom".to_string());
    /// let recovered: Result<i32, usize> = outcome.recover_with(|e| Result::Error(e.len()));
    /// assert_eq!(recovered, Result::Error(4));
    /// ```
    #[inline]
    pub fn recover_with<V, F>(self, recover: F) -> Result<T, V>
    where
        F: FnOnce(E) -> Result<T, V>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => recover(error),
        }
    }

    // =========================================================================
    // Predicates, Fold and Match
    // =========================================================================

    /// Returns `true` if this is an `Ok` whose value satisfies the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(5);
    /// assert!(outcome.exists(|x| *x > 3));
    /// ```
    #[inline]
    pub fn exists<P>(&self, condition: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => condition(value),
            Self::Error(_) => false,
        }
    }

    /// Eliminates the result by applying `ok_function` to a success value
    /// or `error_function` to a failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(5);
    /// assert_eq!(outcome.fold(|x| x.to_string(), |e| e), "5");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, ok_function: F, error_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Error(error) => error_function(error),
        }
    }

    /// Executes `ok_function` for a success value or `error_function` for a
    /// failure value.
    ///
    /// This is the side-effecting analogue of [`Result::fold`].
    #[inline]
    pub fn match_with<F, G>(self, ok_function: F, error_function: G)
    where
        F: FnOnce(T),
        G: FnOnce(E),
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Error(error) => error_function(error),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Turns a success into a failure carrying `error` when the predicate
    /// rejects the success value. An `Error` receiver passes through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Result::Ok(10);
    /// let rejected = outcome.filter(|x| *x < 0, "negative-required".to_string());
    /// assert_eq!(rejected, Result::Error("negative-required".to_string()));
    /// ```
    #[inline]
    pub fn filter<P>(self, condition: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => {
                if condition(&value) {
                    Self::Ok(value)
                } else {
                    Self::Error(error)
                }
            }
            Self::Error(original) => Self::Error(original),
        }
    }

    /// Like [`Result::filter`], but the error value is produced lazily. The
    /// supplier is only invoked when the predicate rejects the value.
    #[inline]
    pub fn filter_with<P, F>(self, condition: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Self::Ok(value) => {
                if condition(&value) {
                    Self::Ok(value)
                } else {
                    Self::Error(error())
                }
            }
            Self::Error(original) => Self::Error(original),
        }
    }

    /// Turns a success into a failure carrying `error` when `condition` is
    /// `false`. Equivalent to `filter(|_| condition, error)`.
    #[inline]
    pub fn filter_if(self, condition: bool, error: E) -> Self {
        match self {
            Self::Ok(value) if condition => Self::Ok(value),
            Self::Ok(_) => Self::Error(error),
            Self::Error(original) => Self::Error(original),
        }
    }

    /// Like [`Result::filter_if`], but the error value is produced lazily.
    #[inline]
    pub fn filter_if_with<F>(self, condition: bool, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Ok(value) if condition => Self::Ok(value),
            Self::Ok(_) => Self::Error(error()),
            Self::Error(original) => Self::Error(original),
        }
    }

    // =========================================================================
    // Boolean Combination
    // =========================================================================

    /// Returns `other` if this is an `Ok`, otherwise keeps the `Error`.
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Ok(_) => other,
            Self::Error(error) => Self::Error(error),
        }
    }

    /// Returns this result if it is an `Ok`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Error(_) => other,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns `Some` containing the success value, or `None` if this is an
    /// `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Optional, Result};
    ///
    /// assert_eq!(Result::<i32, String>::Ok(5).to_option(), Optional::Some(5));
    /// assert_eq!(Result::<i32, String>::Error("boom".to_string()).to_option(), Optional::None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Error(_) => Optional::None,
        }
    }

    /// Converts to an [`Either`], placing a success value on the left and
    /// `right` on the right when failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Result};
    ///
    /// let outcome: Result<i32, String> = Result::Ok(5);
    /// assert_eq!(outcome.to_left("fallback"), Either::Left(5));
    /// ```
    #[inline]
    pub fn to_left<R>(self, right: R) -> Either<T, R> {
        match self {
            Self::Ok(value) => Either::Left(value),
            Self::Error(_) => Either::Right(right),
        }
    }

    /// Converts to an [`Either`], placing a success value on the left and
    /// the result of `right` on the right when failed. The supplier is only
    /// invoked for an `Error` receiver.
    #[inline]
    pub fn to_left_with<R, F>(self, right: F) -> Either<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Ok(value) => Either::Left(value),
            Self::Error(_) => Either::Right(right()),
        }
    }

    /// Converts to an [`Either`], placing a success value on the right and
    /// `left` on the left when failed.
    #[inline]
    pub fn to_right<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Ok(value) => Either::Right(value),
            Self::Error(_) => Either::Left(left),
        }
    }

    /// Converts to an [`Either`], placing a success value on the right and
    /// the result of `left` on the left when failed. The supplier is only
    /// invoked for an `Error` receiver.
    #[inline]
    pub fn to_right_with<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Ok(value) => Either::Right(value),
            Self::Error(_) => Either::Left(left()),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Result<T, E> {
    /// Returns the success value, or `T::default()` if this is an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// assert_eq!(Result::<i32, String>::Error("boom".to_string()).get_or_default(), 0);
    /// ```
    #[inline]
    pub fn get_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => T::default(),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T, E> Result<Result<T, E>, E> {
    /// Collapses a nested result by one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let nested: Result<Result<i32, String>, String> = Result::Ok(Result::Ok(5));
    /// assert_eq!(nested.flatten(), Result::Ok(5));
    /// ```
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Widening from One-sided Values
// =============================================================================

impl<T> Result<T, Nothing> {
    /// Widens a success-only result into a general one.
    ///
    /// Because [`Nothing`] is uninhabited, this value is statically an
    /// `Ok` and the conversion is total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Nothing, Result};
    ///
    /// let one_sided: Result<i32, Nothing> = Result::Ok(42);
    /// let general: Result<i32, String> = one_sided.widen_error();
    /// assert_eq!(general, Result::Ok(42));
    /// ```
    #[inline]
    pub fn widen_error<E>(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(nothing) => match nothing {},
        }
    }
}

impl<E> Result<Nothing, E> {
    /// Widens a failure-only result into a general one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Nothing, Result};
    ///
    /// let one_sided: Result<Nothing, String> = Result::Error("boom".to_string());
    /// let general: Result<i32, String> = one_sided.widen_ok();
    /// assert_eq!(general, Result::Error("boom".to_string()));
    /// ```
    #[inline]
    pub fn widen_ok<T>(self) -> Result<T, E> {
        match self {
            Self::Ok(nothing) => match nothing {},
            Self::Error(error) => Result::Error(error),
        }
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    /// Converts from the standard library result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: Result<i32, String> = Ok(5).into();
    /// assert_eq!(outcome, Result::Ok(5));
    /// ```
    #[inline]
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    /// Converts into the standard library result, enabling `?` at the
    /// caller's boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Result;
    ///
    /// let outcome: core::result::Result<i32, String> = Result::Ok(5).into();
    /// assert_eq!(outcome, Ok(5));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Error(error) => Err(error),
        }
    }
}
