//! Either type - a left-biased disjoint union of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`, together with the side
//! projections [`LeftProjection`] and [`RightProjection`] that scope the
//! monadic operation set to one side.
//!
//! By convention `Either` is left-biased: `Left` is the "truthy" branch
//! selected by [`Either::and`]/[`Either::or`], mirroring the conversion
//! [`Optional::to_left`](super::Optional::to_left) that places a present
//! value on the left.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::types::Either;
//!
//! let division: Either<i32, String> = Either::Left(5);
//! let failure: Either<i32, String> = Either::Right("div by zero".to_string());
//!
//! // Fold handles both cases
//! let rendered = failure.fold(
//!     |quotient| quotient.to_string(),
//!     |message| format!("Error: {message}"),
//! );
//! assert_eq!(rendered, "Error: div by zero");
//!
//! // Projections scope operations to one side
//! assert_eq!(division.left().map(|x| x * 2), Either::Left(10));
//! ```

use std::fmt;

use super::nothing::Nothing;
use super::optional::Optional;

/// A value that is exactly one of two types.
///
/// `Either<L, R>` represents a disjoint union: a `Left(L)` or a `Right(R)`,
/// never both and never neither. Whole-value operations (`fold`, `bimap`,
/// `swap`) treat the sides symmetrically; the [`left`](Either::left) and
/// [`right`](Either::right) projections expose a one-sided monadic view.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use fnkit::types::Either;
///
/// let value: Either<i32, String> = Either::Left(42);
/// assert_eq!(value.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the truthy or primary branch.
    Left(L),
    /// The right variant, conventionally the fallback branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Projects this either as a left-sided view.
    ///
    /// Operations applied through the projection treat a `Right` receiver as
    /// the empty case: mappers are not invoked and the value passes through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.left().map(|x| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn left(self) -> LeftProjection<L, R> {
        LeftProjection { either: self }
    }

    /// Projects this either as a right-sided view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.right().map(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn right(self) -> RightProjection<L, R> {
        RightProjection { either: self }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies one of two functions, transforming both type parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Fold and Match
    // =========================================================================

    /// Eliminates the either by applying `left_function` to a `Left` value
    /// or `right_function` to a `Right` value.
    ///
    /// This is also known as "case analysis" or "pattern matching" as a
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<String, i32> = Either::Left("div by zero".to_string());
    /// let rendered = value.fold(|l| format!("Error: {l}"), |r| r.to_string());
    /// assert_eq!(rendered, "Error: div by zero");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Executes `left_function` for a `Left` value or `right_function` for a
    /// `Right` value.
    ///
    /// This is the side-effecting analogue of [`Either::fold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let mut seen = Vec::new();
    /// let value: Either<i32, String> = Either::Left(42);
    /// value.match_with(|l| seen.push(l), |_| {});
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn match_with<F, G>(self, left_function: F, right_function: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the `Left` and `Right` variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Boolean Combination
    // =========================================================================

    /// Returns `other` if this is a `Left`, otherwise keeps the `Right`.
    ///
    /// `Left` is the truthy branch of this type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let first: Either<i32, String> = Either::Left(1);
    /// let second: Either<i32, String> = Either::Left(2);
    /// assert_eq!(first.and(second), Either::Left(2));
    /// ```
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Left(_) => other,
            Self::Right(value) => Self::Right(value),
        }
    }

    /// Returns this either if it is a `Left`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let first: Either<i32, String> = Either::Right("fallback".to_string());
    /// let second: Either<i32, String> = Either::Left(2);
    /// assert_eq!(first.or(second), Either::Left(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(_) => other,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// This is the narrowing conversion to `L`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.unwrap_left(), 42);
    /// ```
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// This is the narrowing conversion to `R`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.unwrap_right(), "hello".to_string());
    /// ```
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Deconstructs into a pair of optionals.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for
    /// `Right(r)`; exactly one side is ever present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Optional};
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.into_options(), (Optional::Some(42), Optional::None));
    /// ```
    #[inline]
    pub fn into_options(self) -> (Optional<L>, Optional<R>) {
        match self {
            Self::Left(value) => (Optional::Some(value), Optional::None),
            Self::Right(value) => (Optional::None, Optional::Some(value)),
        }
    }
}

// =============================================================================
// Join Operations
// =============================================================================

impl<L, R> Either<Either<L, R>, R> {
    /// Collapses one level of nesting through the left side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let nested: Either<Either<i32, String>, String> = Either::Left(Either::Left(42));
    /// assert_eq!(nested.join_left(), Either::Left(42));
    ///
    /// let outer_right: Either<Either<i32, String>, String> = Either::Right("fallback".to_string());
    /// assert_eq!(outer_right.join_left(), Either::Right("fallback".to_string()));
    /// ```
    #[inline]
    pub fn join_left(self) -> Either<L, R> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Collapses one level of nesting through the right side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let nested: Either<i32, Either<i32, String>> = Either::Right(Either::Right("hello".to_string()));
    /// assert_eq!(nested.join_right(), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn join_right(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

// =============================================================================
// Widening from One-sided Values
// =============================================================================

impl<L> Either<L, Nothing> {
    /// Widens a left-only either into a general one.
    ///
    /// Because [`Nothing`] is uninhabited, this value is statically a
    /// `Left` and the conversion is total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Nothing};
    ///
    /// let one_sided: Either<i32, Nothing> = Either::Left(42);
    /// let general: Either<i32, String> = one_sided.widen_right();
    /// assert_eq!(general, Either::Left(42));
    /// ```
    #[inline]
    pub fn widen_right<R>(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(nothing) => match nothing {},
        }
    }
}

impl<R> Either<Nothing, R> {
    /// Widens a right-only either into a general one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Nothing};
    ///
    /// let one_sided: Either<Nothing, i32> = Either::Right(42);
    /// let general: Either<String, i32> = one_sided.widen_left();
    /// assert_eq!(general, Either::Right(42));
    /// ```
    #[inline]
    pub fn widen_left<L>(self) -> Either<L, R> {
        match self {
            Self::Left(nothing) => match nothing {},
            Self::Right(value) => Either::Right(value),
        }
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<core::result::Result<R, L>> for Either<L, R> {
    /// Converts a standard `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: core::result::Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for core::result::Result<R, L> {
    /// Converts an `Either` to a standard `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// let result: Result<i32, String> = left.into();
    /// assert_eq!(result, Err("error".to_string()));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Left Projection
// =============================================================================

/// A left-sided view over an [`Either`].
///
/// Every operation treats a `Right` receiver as the empty case: suppliers
/// and mappers are never invoked for the inactive side.
///
/// # Examples
///
/// ```rust
/// use fnkit::types::{Either, Optional};
///
/// let value: Either<i32, String> = Either::Left(42);
/// assert_eq!(value.left().to_option(), Optional::Some(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if the underlying either is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left().get(), 42);
    /// ```
    #[inline]
    pub fn get(self) -> L {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => panic!("called `LeftProjection::get()` on a `Right` value"),
        }
    }

    /// Returns the left value, or `or` if this is a `Right`.
    #[inline]
    pub fn get_or_else(self, or: L) -> L {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => or,
        }
    }

    /// Returns the left value, or the result of evaluating `or` if this is
    /// a `Right`. The supplier is only invoked for a `Right` receiver.
    #[inline]
    pub fn get_or_else_with<F>(self, or: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => or(),
        }
    }

    /// Maps the given function through the left side.
    ///
    /// A `Right` receiver passes through unchanged without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left().map(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self.either {
            Either::Left(value) => Either::Left(function(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Binds the given either-producing function across the left side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// let chained = value.left().flat_map(|x| Either::Left(x + 1));
    /// assert_eq!(chained, Either::Left(43));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self.either {
            Either::Left(value) => function(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Returns `Some` of the underlying either if this is a `Left` whose
    /// value satisfies the predicate, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Optional};
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left().filter(|x| *x > 10), Optional::Some(Either::Left(42)));
    /// assert_eq!(value.left().filter(|x| *x < 10), Optional::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, condition: P) -> Optional<Either<L, R>>
    where
        P: FnOnce(&L) -> bool,
    {
        match self.either {
            Either::Left(value) => {
                if condition(&value) {
                    Optional::Some(Either::Left(value))
                } else {
                    Optional::None
                }
            }
            Either::Right(_) => Optional::None,
        }
    }

    /// Returns `Some` of the underlying either if this is a `Left` and
    /// `condition` is `true`, otherwise `None`.
    #[inline]
    pub fn filter_if(self, condition: bool) -> Optional<Either<L, R>> {
        match self.either {
            Either::Left(value) if condition => Optional::Some(Either::Left(value)),
            _ => Optional::None,
        }
    }

    /// Returns `true` if this is a `Left` whose value satisfies the
    /// predicate.
    #[inline]
    pub fn exists<P>(&self, condition: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.either {
            Either::Left(value) => condition(value),
            Either::Right(_) => false,
        }
    }

    /// Returns `Some` containing the left value, or `None` if this is a
    /// `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Optional};
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.left().to_option(), Optional::None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Optional<L> {
        match self.either {
            Either::Left(value) => Optional::Some(value),
            Either::Right(_) => Optional::None,
        }
    }
}

impl<L: Default, R> LeftProjection<L, R> {
    /// Returns the left value, or `L::default()` if this is a `Right`.
    #[inline]
    pub fn get_or_default(self) -> L {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => L::default(),
        }
    }
}

// =============================================================================
// Right Projection
// =============================================================================

/// A right-sided view over an [`Either`].
///
/// Every operation treats a `Left` receiver as the empty case: suppliers
/// and mappers are never invoked for the inactive side.
///
/// # Examples
///
/// ```rust
/// use fnkit::types::{Either, Optional};
///
/// let value: Either<i32, String> = Either::Right("hello".to_string());
/// assert_eq!(value.right().to_option(), Optional::Some("hello".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if the underlying either is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.right().get(), "hello".to_string());
    /// ```
    #[inline]
    pub fn get(self) -> R {
        match self.either {
            Either::Left(_) => panic!("called `RightProjection::get()` on a `Left` value"),
            Either::Right(value) => value,
        }
    }

    /// Returns the right value, or `or` if this is a `Left`.
    #[inline]
    pub fn get_or_else(self, or: R) -> R {
        match self.either {
            Either::Left(_) => or,
            Either::Right(value) => value,
        }
    }

    /// Returns the right value, or the result of evaluating `or` if this is
    /// a `Left`. The supplier is only invoked for a `Left` receiver.
    #[inline]
    pub fn get_or_else_with<F>(self, or: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self.either {
            Either::Left(_) => or(),
            Either::Right(value) => value,
        }
    }

    /// Maps the given function through the right side.
    ///
    /// A `Left` receiver passes through unchanged without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.right().map(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self.either {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(function(value)),
        }
    }

    /// Binds the given either-producing function across the right side.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self.either {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => function(value),
        }
    }

    /// Returns `Some` of the underlying either if this is a `Right` whose
    /// value satisfies the predicate, otherwise `None`.
    #[inline]
    pub fn filter<P>(self, condition: P) -> Optional<Either<L, R>>
    where
        P: FnOnce(&R) -> bool,
    {
        match self.either {
            Either::Right(value) => {
                if condition(&value) {
                    Optional::Some(Either::Right(value))
                } else {
                    Optional::None
                }
            }
            Either::Left(_) => Optional::None,
        }
    }

    /// Returns `Some` of the underlying either if this is a `Right` and
    /// `condition` is `true`, otherwise `None`.
    #[inline]
    pub fn filter_if(self, condition: bool) -> Optional<Either<L, R>> {
        match self.either {
            Either::Right(value) if condition => Optional::Some(Either::Right(value)),
            _ => Optional::None,
        }
    }

    /// Returns `true` if this is a `Right` whose value satisfies the
    /// predicate.
    #[inline]
    pub fn exists<P>(&self, condition: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.either {
            Either::Left(_) => false,
            Either::Right(value) => condition(value),
        }
    }

    /// Returns `Some` containing the right value, or `None` if this is a
    /// `Left`.
    #[inline]
    pub fn to_option(self) -> Optional<R> {
        match self.either {
            Either::Left(_) => Optional::None,
            Either::Right(value) => Optional::Some(value),
        }
    }
}

impl<L, R: Default> RightProjection<L, R> {
    /// Returns the right value, or `R::default()` if this is a `Left`.
    #[inline]
    pub fn get_or_default(self) -> R {
        match self.either {
            Either::Left(_) => R::default(),
            Either::Right(value) => value,
        }
    }
}
