//! comp! macro for comprehension-style chaining of container operations.
//!
//! This module provides the `comp!` macro, which allows chaining
//! container-producing steps in a flat, do-notation style instead of
//! nesting `flat_map` calls. It works uniformly over all four container
//! types ([`Optional`](super::Optional), [`Either`](super::Either)
//! projections' outputs, [`Result`](super::Result) and
//! [`Try`](super::Try)), because each exposes inherent `map` and
//! `flat_map` methods.
//!
//! # Syntax
//!
//! The macro supports the following constructs:
//!
//! - `pattern <= expression;` - Bind: extracts the value from a container
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final projection (mapped over the last bind)
//! - `expression` - Final expression (already a container)
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//! - It's a valid token in Rust macros
//!
//! # Short-circuiting
//!
//! Each bind delegates to the container's `flat_map`, so an empty or
//! failed step ends the chain immediately: later steps are never
//! evaluated.
//!
//! # Examples
//!
//! ## Optional
//!
//! ```rust
//! use fnkit::comp;
//! use fnkit::types::Optional;
//!
//! let result = comp! {
//!     a <= Optional::Some(1);
//!     b <= Optional::Some(2);
//!     yield a + b
//! };
//! assert_eq!(result, Optional::Some(3));
//! ```
//!
//! ## Result
//!
//! ```rust
//! use fnkit::comp;
//! use fnkit::types::Result;
//!
//! let result: Result<i32, String> = comp! {
//!     x <= Result::Ok(5);
//!     let doubled = x * 2;
//!     y <= Result::Ok(10);
//!     yield doubled + y
//! };
//! assert_eq!(result, Result::Ok(20));
//! ```

/// A macro for comprehension-style syntax over the container types.
///
/// Binds (`pattern <= container;`) expand to `flat_map`, the final
/// `yield expression` expands to `map` on the last bind, and a final
/// container expression passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use fnkit::comp;
/// use fnkit::types::Optional;
///
/// // Three binds with a final projection
/// let result = comp! {
///     a <= Optional::Some(1);
///     b <= Optional::Some(2);
///     c <= Optional::Some(3);
///     yield a + b + c
/// };
/// assert_eq!(result, Optional::Some(6));
///
/// // A None step short-circuits; later steps are never evaluated
/// let result: Optional<i32> = comp! {
///     a <= Optional::Some(1);
///     b <= Optional::<i32>::None;
///     yield a + b
/// };
/// assert_eq!(result, Optional::None);
/// ```
#[macro_export]
macro_rules! comp {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Final projection: map over the last bind
    ($pattern:ident <= $container:expr ; yield $result:expr) => {
        $container.map(move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $container:expr ; yield $result:expr) => {
        $container.map(move |($($pattern)*)| $result)
    };

    (_ <= $container:expr ; yield $result:expr) => {
        $container.map(move |_| $result)
    };

    // Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    // Bind with identifier pattern
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.flat_map(move |$pattern| {
            $crate::comp!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.flat_map(move |($($pattern)*)| {
            $crate::comp!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.flat_map(move |_| {
            $crate::comp!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::comp!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::comp!($($rest)+)
        }
    };
}
