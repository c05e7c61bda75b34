//! Type class traits for the container types.
//!
//! This module provides the fundamental type classes (traits) that describe
//! the shared structure of the library's containers:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying wrapped functions
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both type parameters of a two-parameter
//!   container
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Monad
//! in a generic way. See [`TypeConstructor`].
//!
//! ## Instances
//!
//! [`Optional`](crate::types::Optional), [`Result`](crate::types::Result)
//! and [`Try`](crate::types::Try) implement `Functor`, `Applicative` and
//! `Monad` over their truthy payload. [`Either`](crate::types::Either) is
//! unbiased at the whole-value level and is exposed through `Bifunctor`
//! only; its one-sided maps live on the projections.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::{Functor, Monad};
//! use fnkit::types::Optional;
//!
//! let value = Optional::Some(5);
//! assert_eq!(value.fmap(|x| x + 1), Optional::Some(6));
//! assert_eq!(Optional::Some(5).and_then(|x| Optional::Some(x * 2)), Optional::Some(10));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
