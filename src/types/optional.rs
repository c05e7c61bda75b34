//! Optional values - a value that may be present or absent.
//!
//! This module provides the `Optional<T>` type, which represents a value
//! that is either `Some(value)` or `None`. The most idiomatic way to use an
//! `Optional` is to treat it as a monad and chain `map`, `flat_map` and
//! `filter` instead of inspecting it with `is_some`.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::types::Optional;
//!
//! // Creating Optional values
//! let present = Optional::Some(42);
//! let absent: Optional<i32> = Optional::None;
//!
//! // Chaining transformations
//! let result = present.map(|x| x + 1).filter(|x| *x > 10).get_or_else(0);
//! assert_eq!(result, 43);
//!
//! // Absent values short-circuit the whole chain
//! let result = absent.map(|x| x + 1).get_or_else(0);
//! assert_eq!(result, 0);
//! ```

use std::fmt;

use super::either::Either;

/// A value that may be present (`Some`) or absent (`None`).
///
/// Unlike a null reference, the absence case is part of the type, so every
/// consumer is forced to decide what happens when no value exists. `None` is
/// a value of `Optional<T>` in its own right: a `Some` holding a
/// `Default::default()` payload is never equal to `None`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fnkit::types::Optional;
///
/// let value: Optional<i32> = Optional::from(5);
/// assert_eq!(value.map(|x| x * 2), Optional::Some(10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// The absence of a value. Default construction yields this variant.
    None,
}

impl<T> Default for Optional<T> {
    /// Returns `None`, for any `T`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> Optional<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert!(Optional::Some(42).is_some());
    /// assert!(!Optional::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert!(Optional::<i32>::None.is_none());
    /// assert!(!Optional::Some(42).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(42).get(), 42);
    /// ```
    #[inline]
    pub fn get(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Optional::get()` on a `None` value"),
        }
    }

    /// Returns the contained value, or `or` if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(42).get_or_else(0), 42);
    /// assert_eq!(Optional::<i32>::None.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, or: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => or,
        }
    }

    /// Returns the contained value, or the result of evaluating `or` if this
    /// is a `None`.
    ///
    /// The supplier is only invoked when the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(42).get_or_else_with(|| 0), 42);
    /// assert_eq!(Optional::<i32>::None.get_or_else_with(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, or: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => or(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// Returns `Some(function(value))` if this is `Some(value)`, otherwise
    /// `None`. The function is not invoked for a `None` receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(5).map(|x| x * 2), Optional::Some(10));
    /// assert_eq!(Optional::<i32>::None.map(|x| x * 2), Optional::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Applies an optional-producing function to the contained value.
    ///
    /// Slightly different from `map` in that the function is expected to
    /// return an `Optional` (which could be `None`), sequencing
    /// optional-producing computations without nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// fn half(x: i32) -> Optional<i32> {
    ///     if x % 2 == 0 { Optional::Some(x / 2) } else { Optional::None }
    /// }
    ///
    /// assert_eq!(Optional::Some(8).flat_map(half), Optional::Some(4));
    /// assert_eq!(Optional::Some(5).flat_map(half), Optional::None);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Returns this optional if it is `Some` and the predicate holds for the
    /// contained value, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(5).filter(|x| *x > 3), Optional::Some(5));
    /// assert_eq!(Optional::Some(5).filter(|x| *x > 10), Optional::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, condition: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if condition(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns this optional if it is `Some` and `condition` is `true`,
    /// otherwise `None`.
    ///
    /// Equivalent to `filter(|_| condition)` with a precomputed condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(5).filter_if(true), Optional::Some(5));
    /// assert_eq!(Optional::Some(5).filter_if(false), Optional::None);
    /// ```
    #[inline]
    pub fn filter_if(self, condition: bool) -> Self {
        match self {
            Self::Some(value) if condition => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns `true` if this is `Some` and the predicate holds for the
    /// contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert!(Optional::Some(5).exists(|x| *x > 3));
    /// assert!(!Optional::<i32>::None.exists(|x| *x > 3));
    /// ```
    #[inline]
    pub fn exists<P>(&self, condition: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => condition(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Fold and Match
    // =========================================================================

    /// Eliminates the optional by applying `some_function` to a present
    /// value, or returning `none_value` for an absent one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(5).fold(|x| x * 2, 0), 10);
    /// assert_eq!(Optional::<i32>::None.fold(|x| x * 2, 0), 0);
    /// ```
    #[inline]
    pub fn fold<U, F>(self, some_function: F, none_value: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_value,
        }
    }

    /// Eliminates the optional by applying `some_function` to a present
    /// value, or evaluating `none_function` for an absent one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// let rendered = Optional::Some(5).fold_with(|x| x.to_string(), || "empty".to_string());
    /// assert_eq!(rendered, "5");
    /// ```
    #[inline]
    pub fn fold_with<U, F, G>(self, some_function: F, none_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    /// Executes `some_function` for a present value, or `none_function` for
    /// an absent one.
    ///
    /// This is the side-effecting analogue of [`Optional::fold_with`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// let mut seen = Vec::new();
    /// Optional::Some(5).match_with(|x| seen.push(x), || {});
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn match_with<F, G>(self, some_function: F, none_function: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    // =========================================================================
    // Boolean Combination
    // =========================================================================

    /// Returns `other` if this is `Some`, otherwise keeps the `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(1).and(Optional::Some(2)), Optional::Some(2));
    /// assert_eq!(Optional::None.and(Optional::Some(2)), Optional::None);
    /// ```
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Some(_) => other,
            Self::None => Self::None,
        }
    }

    /// Returns this optional if it is `Some`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(1).or(Optional::Some(2)), Optional::Some(1));
    /// assert_eq!(Optional::None.or(Optional::Some(2)), Optional::Some(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// let text = Optional::Some("hello".to_string());
    /// assert_eq!(text.as_ref().map(|s| s.len()), Optional::Some(5));
    /// // `text` is still available here
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an [`Either`], placing a present value on the left and
    /// `right` on the right when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Optional};
    ///
    /// assert_eq!(Optional::Some(5).to_left("empty"), Either::Left(5));
    /// assert_eq!(Optional::<i32>::None.to_left("empty"), Either::Right("empty"));
    /// ```
    #[inline]
    pub fn to_left<R>(self, right: R) -> Either<T, R> {
        match self {
            Self::Some(value) => Either::Left(value),
            Self::None => Either::Right(right),
        }
    }

    /// Converts to an [`Either`], placing a present value on the left and
    /// the result of `right` on the right when absent.
    ///
    /// The supplier is only invoked when the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Optional};
    ///
    /// assert_eq!(Optional::<i32>::None.to_left_with(|| "empty"), Either::Right("empty"));
    /// ```
    #[inline]
    pub fn to_left_with<R, F>(self, right: F) -> Either<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => Either::Left(value),
            Self::None => Either::Right(right()),
        }
    }

    /// Converts to an [`Either`], placing a present value on the right and
    /// `left` on the left when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Either, Optional};
    ///
    /// assert_eq!(Optional::Some(5).to_right("empty"), Either::Right(5));
    /// assert_eq!(Optional::<i32>::None.to_right("empty"), Either::Left("empty"));
    /// ```
    #[inline]
    pub fn to_right<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left),
        }
    }

    /// Converts to an [`Either`], placing a present value on the right and
    /// the result of `left` on the left when absent.
    ///
    /// The supplier is only invoked when the optional is empty.
    #[inline]
    pub fn to_right_with<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left()),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the contained value, or `T::default()` if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(42).get_or_default(), 42);
    /// assert_eq!(Optional::<i32>::None.get_or_default(), 0);
    /// ```
    #[inline]
    pub fn get_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Collapses a doubly wrapped optional by one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::Some(Optional::Some(5)).flatten(), Optional::Some(5));
    /// assert_eq!(Optional::Some(Optional::<i32>::None).flatten(), Optional::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<T> for Optional<T> {
    /// Wraps a bare value, always producing a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// let value: Optional<i32> = 5.into();
    /// assert_eq!(value, Optional::Some(5));
    /// ```
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// Converts from the standard library's absence-capable type.
    ///
    /// `Option::None` (the null-equivalent) becomes `Optional::None`; any
    /// present value becomes `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// assert_eq!(Optional::from(Some(5)), Optional::Some(5));
    /// assert_eq!(Optional::from(None::<i32>), Optional::None);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts into the standard library's absence-capable type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Optional;
    ///
    /// let value: Option<i32> = Optional::Some(5).into();
    /// assert_eq!(value, Some(5));
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}
