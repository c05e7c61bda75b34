//! Algebraic value types for absence, branching and recoverable failure.
//!
//! This module provides the four container types that form the core of the
//! library:
//!
//! - [`Optional`]: a value that may be present (`Some`) or absent (`None`)
//! - [`Either`]: a left-biased disjoint union of two types
//! - [`Result`]: a success (`Ok`) or failure (`Error`) outcome
//! - [`Try`]: a computation result with captured faults (`Success`/`Failure`)
//!
//! Every type is an immutable sum type: exactly one variant is active, all
//! transformations return new values, and no operation mutates a receiver.
//! The four types are connected by a closed conversion graph
//! (`Optional -> Either`, `Result -> Optional`, `Try -> Result`, and so on).
//!
//! # Examples
//!
//! ## Expressing absence
//!
//! ```rust
//! use fnkit::types::Optional;
//!
//! let present = Optional::Some(5);
//! assert_eq!(present.map(|x| x * 2).get_or_else(0), 10);
//!
//! let absent: Optional<i32> = Optional::None;
//! assert_eq!(absent.map(|x| x * 2).get_or_else(0), 0);
//! ```
//!
//! ## Capturing faults
//!
//! ```rust
//! use fnkit::types::Try;
//!
//! let parsed = Try::capture(|| "abc".parse::<i32>().unwrap()).recover(|_| 0);
//! assert_eq!(parsed, Try::Success(0));
//! ```

mod comp_macro;
mod either;
mod fault;
mod nothing;
mod optional;
mod result;
mod tryable;

pub use either::{Either, LeftProjection, RightProjection};
pub use fault::{Fault, NoSuchElement};
pub use nothing::Nothing;
pub use optional::Optional;
pub use result::Result;
pub use tryable::Try;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::comp;
