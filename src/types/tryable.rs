//! Try type - a computation result with captured faults.
//!
//! This module provides the `Try<T>` type, which wraps a computation that
//! may unwind. The [`Try::capture`] constructor is the fault capture
//! boundary: it invokes a closure and converts any unwind crossing that
//! boundary into a [`Failure`](Try::Failure) carrying a [`Fault`]. Every
//! combinator that runs a user callback on the success path routes it
//! through the same boundary, so downstream code always sees a classified
//! value and never a live unwind — except [`Try::rethrow`] and
//! [`Try::get`], which deliberately re-raise.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::types::Try;
//!
//! let parsed = Try::capture(|| "abc".parse::<i32>().unwrap());
//! assert!(parsed.is_failure());
//!
//! let recovered = parsed.recover(|_| 0);
//! assert_eq!(recovered, Try::Success(0));
//! ```
//!
//! # State transitions
//!
//! `Success` can become `Failure` through `map`/`flat_map`/`filter` when
//! the supplied callback unwinds; `Failure` can become `Success` only
//! through the `recover` family. No other transitions exist.

use std::error::Error;
use std::fmt;
use std::panic;

use super::either::Either;
use super::fault::{Fault, NoSuchElement};
use super::optional::Optional;
use super::result::Result;

/// Runs a closure behind the fault capture boundary.
///
/// `AssertUnwindSafe` is sound here: the closure is consumed whether or not
/// it unwinds, and no shared state outlives the call.
fn capture_unwind<T, F>(function: F) -> core::result::Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(panic::AssertUnwindSafe(function)).map_err(Fault::from_panic)
}

/// The result of a computation that may have unwound.
///
/// A `Try<T>` is either `Success(T)` or `Failure(Fault)`. Unlike
/// [`Result`](super::Result), whose failure type is chosen by the caller,
/// `Try` always carries a [`Fault`] — a captured error or panic payload —
/// and its combinators absorb unwinds raised by their own callbacks.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use fnkit::types::Try;
///
/// let outcome = Try::capture(|| 84 / 2);
/// assert_eq!(outcome.get_or_else(0), 42);
/// ```
#[derive(PartialEq, Eq, Hash, Debug)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation (or a later callback) unwound; the fault was captured.
    Failure(Fault),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Invokes `function` and captures its outcome.
    ///
    /// This is the primary entry point: returns `Success` with the produced
    /// value, or `Failure` with the captured fault if the function unwinds.
    /// All unwinds are absorbed uniformly; aborting panics
    /// (`panic = "abort"`) never reach the boundary and are outside this
    /// contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let ok = Try::capture(|| "42".parse::<i32>().unwrap());
    /// assert_eq!(ok, Try::Success(42));
    ///
    /// let failed = Try::capture(|| "abc".parse::<i32>().unwrap());
    /// assert!(failed.is_failure());
    /// ```
    pub fn capture<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match capture_unwind(function) {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault),
        }
    }

    /// Awaits `future` and captures its outcome.
    ///
    /// The asynchronous form of [`Try::capture`]: suspends at the await
    /// point and resumes with the already-classified value. A cancellation
    /// fault surfacing as an unwind is captured like any other fault; no
    /// cancellation token is threaded through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let outcome = Try::capture_future(async { 21 * 2 }).await;
    /// assert_eq!(outcome, Try::Success(42));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn capture_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        use futures::FutureExt;

        match panic::AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Fault::from_panic(payload)),
        }
    }

    /// Creates a `Failure` from a typed error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{NoSuchElement, Try};
    ///
    /// let failed: Try<i32> = Try::from_error(NoSuchElement);
    /// assert!(failed.is_failure());
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(Fault::new(error))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, consuming the try.
    ///
    /// # Panics
    ///
    /// Re-raises the captured fault if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// assert_eq!(Try::Success(42).get(), 42);
    /// ```
    #[inline]
    pub fn get(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => fault.rethrow(),
        }
    }

    /// Returns the success value, or `or` if this is a `Failure`.
    #[inline]
    pub fn get_or_else(self, or: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => or,
        }
    }

    /// Returns the success value, or the result of evaluating `or` if this
    /// is a `Failure`. The supplier is only invoked for a `Failure`
    /// receiver.
    #[inline]
    pub fn get_or_else_with<F>(self, or: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => or(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value behind the capture boundary.
    ///
    /// If the function itself unwinds, the result is a `Failure` carrying
    /// the new fault. A `Failure` receiver passes through unchanged without
    /// invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// assert_eq!(Try::Success(5).map(|x| x * 2), Try::Success(10));
    ///
    /// let faulted = Try::Success(5).map(|_| -> i32 { panic!("boom") });
    /// assert!(faulted.is_failure());
    /// ```
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => match capture_unwind(move || function(value)) {
                Ok(mapped) => Try::Success(mapped),
                Err(fault) => Try::Failure(fault),
            },
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Applies a try-producing function to the success value behind the
    /// capture boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let chained = Try::Success("42").flat_map(|s| Try::capture(move || s.parse::<i32>().unwrap()));
    /// assert_eq!(chained, Try::Success(42));
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => match capture_unwind(move || function(value)) {
                Ok(outcome) => outcome,
                Err(fault) => Try::Failure(fault),
            },
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Runs a try-producing function for its effect on the success value,
    /// discarding its payload but propagating its failure.
    ///
    /// On success the original value is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let kept = Try::Success(5).flat_tap(|x| Try::Success(x.to_string()));
    /// assert_eq!(kept, Try::Success(5));
    /// ```
    pub fn flat_tap<U, F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Try<U>,
    {
        match self {
            Self::Success(value) => {
                let effect = capture_unwind(|| function(&value));
                match effect {
                    Ok(Try::Success(_)) => Self::Success(value),
                    Ok(Try::Failure(fault)) | Err(fault) => Self::Failure(fault),
                }
            }
            Self::Failure(fault) => Self::Failure(fault),
        }
    }

    /// Becomes a `Failure` carrying [`NoSuchElement`] if the predicate
    /// rejects the success value or unwinds while judging it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// assert_eq!(Try::Success(5).filter(|x| *x > 3), Try::Success(5));
    /// assert!(Try::Success(5).filter(|x| *x > 10).is_failure());
    /// ```
    pub fn filter<P>(self, condition: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                let held = capture_unwind(|| condition(&value));
                match held {
                    Ok(true) => Self::Success(value),
                    Ok(false) => Self::Failure(Fault::new(NoSuchElement)),
                    Err(fault) => Self::Failure(fault),
                }
            }
            Self::Failure(fault) => Self::Failure(fault),
        }
    }

    /// Returns `true` if this is a `Success` whose value satisfies the
    /// predicate.
    #[inline]
    pub fn exists<P>(&self, condition: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => condition(value),
            Self::Failure(_) => false,
        }
    }

    // =========================================================================
    // Fold and Match
    // =========================================================================

    /// Eliminates the try by applying `success_function` to a success value
    /// or `failure_function` to a captured fault.
    ///
    /// If `success_function` unwinds, the result falls through to
    /// `failure_function` applied to the newly captured fault. This is the
    /// distinguishing behavior versus [`Result::fold`], which does not
    /// catch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let rendered = Try::Success(5).fold(
    ///     |_| -> String { panic!("render failed") },
    ///     |fault| format!("fault: {fault}"),
    /// );
    /// assert_eq!(rendered, "fault: render failed");
    /// ```
    pub fn fold<U, F, G>(self, success_function: F, failure_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Fault) -> U,
    {
        match self {
            Self::Success(value) => match capture_unwind(move || success_function(value)) {
                Ok(result) => result,
                Err(fault) => failure_function(fault),
            },
            Self::Failure(fault) => failure_function(fault),
        }
    }

    /// Executes `success_function` for a success value or
    /// `failure_function` for a captured fault, with the same
    /// catch-and-redirect behavior as [`Try::fold`].
    pub fn match_with<F, G>(self, success_function: F, failure_function: G)
    where
        F: FnOnce(T),
        G: FnOnce(Fault),
    {
        match self {
            Self::Success(value) => {
                if let Err(fault) = capture_unwind(move || success_function(value)) {
                    failure_function(fault);
                }
            }
            Self::Failure(fault) => failure_function(fault),
        }
    }

    // =========================================================================
    // Recovery Operations
    // =========================================================================

    /// Converts a failure into a success by applying `recover` to the
    /// captured fault. A `Success` receiver passes through unchanged.
    ///
    /// If `recover` itself unwinds, the result is a `Failure` carrying the
    /// new fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let recovered = Try::capture(|| "abc".parse::<i32>().unwrap()).recover(|_| 0);
    /// assert_eq!(recovered, Try::Success(0));
    /// ```
    pub fn recover<F>(self, recover: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match capture_unwind(move || recover(fault)) {
                Ok(value) => Self::Success(value),
                Err(fault) => Self::Failure(fault),
            },
        }
    }

    /// Converts a failure into a success, but only when the captured fault
    /// is an error of type `E`. Any other failure passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{NoSuchElement, Try};
    /// use std::num::ParseIntError;
    ///
    /// let failed: Try<i32> = Try::from_error(NoSuchElement);
    ///
    /// // The matching error type fires the handler
    /// assert_eq!(failed.recover_as(|_: NoSuchElement| 0), Try::Success(0));
    ///
    /// // An unrelated error type leaves the failure untouched
    /// let failed: Try<i32> = Try::from_error(NoSuchElement);
    /// assert!(failed.recover_as(|_: ParseIntError| 0).is_failure());
    /// ```
    pub fn recover_as<E, F>(self, recover: F) -> Self
    where
        E: Error + 'static,
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match fault.downcast::<E>() {
                Ok(error) => match capture_unwind(move || recover(error)) {
                    Ok(value) => Self::Success(value),
                    Err(fault) => Self::Failure(fault),
                },
                Err(fault) => Self::Failure(fault),
            },
        }
    }

    /// Applies a try-producing recovery function to the captured fault,
    /// enabling recovery chains that may themselves fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let recovered = Try::capture(|| "abc".parse::<i32>().unwrap())
    ///     .recover_with(|_| Try::capture(|| "42".parse::<i32>().unwrap()));
    /// assert_eq!(recovered, Try::Success(42));
    /// ```
    pub fn recover_with<F>(self, recover: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match capture_unwind(move || recover(fault)) {
                Ok(outcome) => outcome,
                Err(fault) => Self::Failure(fault),
            },
        }
    }

    /// Applies a try-producing recovery function, but only when the
    /// captured fault is an error of type `E`. Any other failure passes
    /// through unchanged.
    pub fn recover_with_as<E, F>(self, recover: F) -> Self
    where
        E: Error + 'static,
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match fault.downcast::<E>() {
                Ok(error) => match capture_unwind(move || recover(error)) {
                    Ok(outcome) => outcome,
                    Err(fault) => Self::Failure(fault),
                },
                Err(fault) => Self::Failure(fault),
            },
        }
    }

    /// Re-raises the captured fault, preserving the original panic payload
    /// where possible.
    ///
    /// # Panics
    ///
    /// Always: resumes the captured unwind on a `Failure`, and panics with
    /// a "not Failure" message on a `Success`.
    pub fn rethrow(self) -> ! {
        match self {
            Self::Success(_) => panic!("called `Try::rethrow()` on a `Success` value"),
            Self::Failure(fault) => fault.rethrow(),
        }
    }

    // =========================================================================
    // Boolean Combination
    // =========================================================================

    /// Returns `other` if this is a `Success`, otherwise keeps the
    /// `Failure`.
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Success(_) => other,
            Self::Failure(fault) => Self::Failure(fault),
        }
    }

    /// Returns this try if it is a `Success`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => other,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns `Some` containing the success value, or `None` if this is a
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Optional, Try};
    ///
    /// assert_eq!(Try::Success(5).to_option(), Optional::Some(5));
    /// ```
    #[inline]
    pub fn to_option(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Some(value),
            Self::Failure(_) => Optional::None,
        }
    }

    /// Converts to a [`Result`], with the captured fault as the failure
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Result, Try};
    ///
    /// assert_eq!(Try::Success(5).to_result(), Result::Ok(5));
    ///
    /// let failed = Try::capture(|| "abc".parse::<i32>().unwrap());
    /// assert!(failed.to_result().error().is_some());
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Result::Ok(value),
            Self::Failure(fault) => Result::Error(fault),
        }
    }

    /// Converts to an [`Either`], placing a success value on the left and
    /// `right` on the right when failed.
    #[inline]
    pub fn to_left<R>(self, right: R) -> Either<T, R> {
        match self {
            Self::Success(value) => Either::Left(value),
            Self::Failure(_) => Either::Right(right),
        }
    }

    /// Converts to an [`Either`], placing a success value on the left and
    /// the result of `right` on the right when failed. The supplier is only
    /// invoked for a `Failure` receiver.
    #[inline]
    pub fn to_left_with<R, F>(self, right: F) -> Either<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Success(value) => Either::Left(value),
            Self::Failure(_) => Either::Right(right()),
        }
    }

    /// Converts to an [`Either`], placing a success value on the right and
    /// `left` on the left when failed.
    #[inline]
    pub fn to_right<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(_) => Either::Left(left),
        }
    }

    /// Converts to an [`Either`], placing a success value on the right and
    /// the result of `left` on the left when failed. The supplier is only
    /// invoked for a `Failure` receiver.
    #[inline]
    pub fn to_right_with<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(_) => Either::Left(left()),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Try<T> {
    /// Returns the success value, or `T::default()` if this is a `Failure`.
    #[inline]
    pub fn get_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Try<Try<T>> {
    /// Collapses a nested try by one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// assert_eq!(Try::Success(Try::Success(5)).flatten(), Try::Success(5));
    /// ```
    #[inline]
    pub fn flatten(self) -> Try<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(fault) => write!(formatter, "Failure({fault})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<core::result::Result<T, E>> for Try<T>
where
    E: Error + Send + Sync + 'static,
{
    /// Converts a standard result, wrapping the error into a [`Fault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Try;
    ///
    /// let outcome: Try<i32> = "42".parse::<i32>().into();
    /// assert_eq!(outcome, Try::Success(42));
    ///
    /// let outcome: Try<i32> = "abc".parse::<i32>().into();
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Fault::new(error)),
        }
    }
}
