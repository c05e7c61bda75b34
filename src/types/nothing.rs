//! The uninhabited placeholder type for one-sided containers.

use std::fmt;

/// An uninhabited type marking the unused side of a one-sided container.
///
/// `Nothing` has no values, so an `Either<L, Nothing>` is statically known
/// to be a `Left` and a `Result<T, Nothing>` is statically known to be an
/// `Ok`. The `widen_*` methods on those types use this to convert a
/// one-sided value into a fully general one without inspecting it at
/// runtime.
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
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
