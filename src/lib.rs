//! # fnkit
//!
//! Functional value types and combinators for Rust.
//!
//! ## Overview
//!
//! This library provides algebraic value types for expressing absence,
//! branching outcomes, and recoverable failure without null references or
//! uncaught panics, together with point-free composition utilities:
//!
//! - **Value Types**: [`Optional`](types::Optional), [`Either`](types::Either),
//!   [`Result`](types::Result), [`Try`](types::Try)
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, `curry2!`,
//!   `uncurry2!` macros and friends
//! - **Comprehension Sugar**: the [`comp!`](crate::comp) macro for chaining
//!   container-producing steps in do-notation style
//!
//! ## Feature Flags
//!
//! - `types`: The four container types and the `comp!` macro
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `async`: Asynchronous fault capture for `Try`
//! - `serde`: Serialize/Deserialize for `Optional`, `Either` and `Result`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::types::Optional;
//!
//! let doubled = Optional::Some(5).map(|x| x * 2).get_or_else(0);
//! assert_eq!(doubled, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "types")]
    pub use crate::types::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "types")]
pub mod types;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
