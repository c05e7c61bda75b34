//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). This is essential
//! for defining type class traits like Functor, Applicative, and Monad.
//!
//! # Background
//!
//! Rust cannot write a trait that abstracts over `Optional<_>` and
//! `Try<_>` as type constructors directly. This module uses GAT to work
//! around that limitation: each container names its payload type (`Inner`)
//! and the same constructor applied to a different payload (`WithType<B>`).

use crate::types::{Optional, Result, Try};

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Optional<_>`,
/// `Result<_, E>` and `Try<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type
///   `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use fnkit::typeclass::TypeConstructor;
/// use fnkit::types::Optional;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Optional<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Optional<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Optional<i32>`, `WithType<String>` would be
    /// `Optional<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Try<T> {
    type Inner = T;
    type WithType<B> = Try<B>;
}
