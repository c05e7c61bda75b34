//! The uncurry macro family for converting curried functions back to
//! multi-argument form.
//!
//! This module provides macros for uncurrying functions with 2 to 6
//! arguments: the inverse of the [`curry2!`](crate::curry2) family. Given
//! a chain of single-argument closures, the uncurried form accepts all
//! arguments in a single call.
//!
//! # Round Trip
//!
//! For any function `f` of matching arity:
//!
//! ```text
//! uncurry2!(curry2!(f))(a, b) == f(a, b)
//! ```

/// Converts a curried 2-argument function back into a multi-argument form.
///
/// Given `f` such that `f(a)(b) -> c`, returns a closure `|a, b| f(a)(b)`.
///
/// # Examples
///
/// ```
/// use fnkit::{curry2, uncurry2};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// let uncurried = uncurry2!(curried);
/// assert_eq!(uncurried(5, 3), add(5, 3));
/// ```
///
/// ## With a hand-written curried closure
///
/// ```
/// use fnkit::uncurry2;
///
/// let curried_add = |a: i32| move |b: i32| a + b;
/// let add = uncurry2!(curried_add);
/// assert_eq!(add(2, 3), 5);
/// ```
#[macro_export]
macro_rules! uncurry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1)(arg2)
    }};
}

/// Converts a curried 3-argument function back into a multi-argument form.
///
/// # Examples
///
/// ```
/// use fnkit::{curry3, uncurry3};
///
/// fn add_three(a: i32, b: i32, c: i32) -> i32 { a + b + c }
///
/// let roundtripped = uncurry3!(curry3!(add_three));
/// assert_eq!(roundtripped(1, 2, 3), 6);
/// ```
#[macro_export]
macro_rules! uncurry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1)(arg2)(arg3)
    }};
}

/// Converts a curried 4-argument function back into a multi-argument form.
///
/// # Examples
///
/// ```
/// use fnkit::{curry4, uncurry4};
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// let roundtripped = uncurry4!(curry4!(sum_four));
/// assert_eq!(roundtripped(1, 2, 3, 4), 10);
/// ```
#[macro_export]
macro_rules! uncurry4 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4| function(arg1)(arg2)(arg3)(arg4)
    }};
}

/// Converts a curried 5-argument function back into a multi-argument form.
///
/// # Examples
///
/// ```
/// use fnkit::{curry5, uncurry5};
///
/// fn sum_five(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 { a + b + c + d + e }
///
/// let roundtripped = uncurry5!(curry5!(sum_five));
/// assert_eq!(roundtripped(1, 2, 3, 4, 5), 15);
/// ```
#[macro_export]
macro_rules! uncurry5 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4, arg5| function(arg1)(arg2)(arg3)(arg4)(arg5)
    }};
}

/// Converts a curried 6-argument function back into a multi-argument form.
///
/// # Examples
///
/// ```
/// use fnkit::{curry6, uncurry6};
///
/// fn sum_six(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
///     a + b + c + d + e + f
/// }
///
/// let roundtripped = uncurry6!(curry6!(sum_six));
/// assert_eq!(roundtripped(1, 2, 3, 4, 5, 6), 21);
/// ```
#[macro_export]
macro_rules! uncurry6 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4, arg5, arg6| function(arg1)(arg2)(arg3)(arg4)(arg5)(arg6)
    }};
}
