//! Property-based tests for the functor and monad laws of the container
//! types.
//!
//! This module verifies that every container satisfies the required laws:
//!
//! - **Functor Identity**: `x.map(|v| v) == x`
//! - **Functor Composition**: `x.map(f).map(g) == x.map(|v| g(f(v)))`
//! - **Monad Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Monad Right Identity**: `m.flat_map(pure) == m`
//! - **Monad Associativity**:
//!   `m.flat_map(f).flat_map(g) == m.flat_map(|v| f(v).flat_map(g))`
//! - **Short-circuit**: map/flat_map on an empty/failed variant never
//!   invoke the supplied function
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

#![cfg(feature = "types")]

use fnkit::types::{Either, Optional, Result, Try};
use proptest::prelude::*;

fn optional_of(value: i32, present: bool) -> Optional<i32> {
    if present { Optional::Some(value) } else { Optional::None }
}

fn result_of(value: i32, ok: bool) -> Result<i32, String> {
    if ok { Result::Ok(value) } else { Result::Error(format!("error-{value}")) }
}

fn try_of(value: i32, success: bool) -> Try<i32> {
    if success { Try::Success(value) } else { Try::capture(|| panic!("fault-{}", value)) }
}

// =============================================================================
// Optional<A> Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function returns the original value
    #[test]
    fn prop_optional_functor_identity(value in any::<i32>(), present in any::<bool>()) {
        let container = optional_of(value, present);
        prop_assert_eq!(container.map(|x| x), container);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_optional_functor_composition(value in any::<i32>(), present in any::<bool>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let container = optional_of(value, present);
        let left = container.map(function1).map(function2);
        let right = container.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_optional_monad_left_identity(value in any::<i32>()) {
        let function = |n: i32| optional_of(n.wrapping_mul(2), n % 3 != 0);
        prop_assert_eq!(Optional::Some(value).flat_map(function), function(value));
    }

    /// Right Identity Law: m.flat_map(Some) == m
    #[test]
    fn prop_optional_monad_right_identity(value in any::<i32>(), present in any::<bool>()) {
        let container = optional_of(value, present);
        prop_assert_eq!(container.flat_map(Optional::Some), container);
    }

    /// Associativity Law
    #[test]
    fn prop_optional_monad_associativity(value in any::<i32>(), present in any::<bool>()) {
        let function1 = |n: i32| optional_of(n.wrapping_add(1), n % 2 == 0);
        let function2 = |n: i32| optional_of(n.wrapping_mul(3), n % 5 != 0);

        let container = optional_of(value, present);
        let left = container.flat_map(function1).flat_map(function2);
        let right = container.flat_map(|x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either Projections obey the Functor Laws per side
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_projection_identity(value in any::<i32>(), left in any::<bool>()) {
        let container: Either<i32, i32> = if left { Either::Left(value) } else { Either::Right(value) };
        prop_assert_eq!(container.left().map(|x| x), container);
    }

    #[test]
    fn prop_either_right_projection_composition(value in any::<i32>(), left in any::<bool>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let container: Either<i32, i32> = if left { Either::Left(value) } else { Either::Right(value) };
        let composed_in_steps = container.right().map(function1).right().map(function2);
        let composed_at_once = container.right().map(|x| function2(function1(x)));

        prop_assert_eq!(composed_in_steps, composed_at_once);
    }

    /// bimap distributes over the active side only
    #[test]
    fn prop_either_bimap_identity(value in any::<i32>(), left in any::<bool>()) {
        let container: Either<i32, i32> = if left { Either::Left(value) } else { Either::Right(value) };
        prop_assert_eq!(container.bimap(|l| l, |r| r), container);
    }
}

// =============================================================================
// Result<T, E> Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_result_functor_identity(value in any::<i32>(), ok in any::<bool>()) {
        let container = result_of(value, ok);
        prop_assert_eq!(container.clone().map(|x| x), container);
    }

    #[test]
    fn prop_result_functor_composition(value in any::<i32>(), ok in any::<bool>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let container = result_of(value, ok);
        let left = container.clone().map(function1).map(function2);
        let right = container.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_monad_left_identity(value in any::<i32>()) {
        let function = |n: i32| result_of(n.wrapping_mul(2), n % 3 != 0);
        prop_assert_eq!(Result::<i32, String>::Ok(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_result_monad_right_identity(value in any::<i32>(), ok in any::<bool>()) {
        let container = result_of(value, ok);
        prop_assert_eq!(container.clone().flat_map(Result::Ok), container);
    }

    #[test]
    fn prop_result_monad_associativity(value in any::<i32>(), ok in any::<bool>()) {
        let function1 = |n: i32| result_of(n.wrapping_add(1), n % 2 == 0);
        let function2 = |n: i32| result_of(n.wrapping_mul(3), n % 5 != 0);

        let container = result_of(value, ok);
        let left = container.clone().flat_map(function1).flat_map(function2);
        let right = container.flat_map(|x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Try<T> Laws (equality compares fault messages)
// =============================================================================

proptest! {
    #[test]
    fn prop_try_functor_identity(value in any::<i32>(), success in any::<bool>()) {
        let left = try_of(value, success).map(|x| x);
        let right = try_of(value, success);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_try_functor_composition(value in any::<i32>(), success in any::<bool>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = try_of(value, success).map(function1).map(function2);
        let right = try_of(value, success).map(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_try_monad_left_identity(value in any::<i32>()) {
        let function = |n: i32| try_of(n.wrapping_mul(2), n % 3 != 0);
        prop_assert_eq!(Try::Success(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_try_monad_associativity(value in any::<i32>(), success in any::<bool>()) {
        let function1 = |n: i32| try_of(n.wrapping_add(1), n % 2 == 0);
        let function2 = |n: i32| try_of(n.wrapping_mul(3), n % 5 != 0);

        let left = try_of(value, success).flat_map(function1).flat_map(function2);
        let right = try_of(value, success).flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Short-circuit Guarantees
// =============================================================================

proptest! {
    /// map/flat_map on empty and failed variants never invoke the callback.
    /// The callbacks would panic if invoked, which Optional/Result do not
    /// absorb, so reaching the assertion proves they never ran.
    #[test]
    fn prop_empty_variants_short_circuit(_value in any::<i32>()) {
        let optional: Optional<i32> = Optional::None;
        let mapped = optional.map(|_| -> i32 { panic!("must not run") });
        prop_assert_eq!(mapped, Optional::None);

        let optional: Optional<i32> = Optional::None;
        let bound = optional.flat_map(|_| -> Optional<i32> { panic!("must not run") });
        prop_assert_eq!(bound, Optional::None);

        let failed: Result<i32, String> = Result::Error("kept".to_string());
        let mapped = failed.map(|_| -> i32 { panic!("must not run") });
        prop_assert_eq!(mapped, Result::Error("kept".to_string()));
    }
}
