//! Property-based tests for the conversion graph between the container
//! types.
//!
//! Every container converts to the other three; these tests verify the
//! round-trip and mapping laws the conversions must satisfy:
//!
//! - `Some(x).to_left(y) == Left(x)` and `None.to_left(y) == Right(y)`
//!   (symmetric for `to_right`)
//! - `Ok(x).to_option() == Some(x)` and `Error(e).to_option() == None`
//! - `Success(x).to_result() == Ok(x)`; a failure's `.to_result().error()`
//!   is present
//! - `flatten(pure(pure(x))) == pure(x)` for all four containers

#![cfg(feature = "types")]

use fnkit::types::{Either, Optional, Result, Try};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Optional <-> Either
// =============================================================================

proptest! {
    #[test]
    fn prop_optional_to_left(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(Optional::Some(value).to_left(fallback), Either::Left(value));
        prop_assert_eq!(Optional::<i32>::None.to_left(fallback), Either::Right(fallback));
    }

    #[test]
    fn prop_optional_to_right(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(Optional::Some(value).to_right(fallback), Either::Right(value));
        prop_assert_eq!(Optional::<i32>::None.to_right(fallback), Either::Left(fallback));
    }

    /// Converting to Either and projecting back recovers the original value
    #[test]
    fn prop_optional_either_roundtrip(value in any::<i32>(), fallback in any::<i32>()) {
        let roundtripped = Optional::Some(value).to_left(fallback).left().to_option();
        prop_assert_eq!(roundtripped, Optional::Some(value));

        let roundtripped = Optional::<i32>::None.to_left(fallback).left().to_option();
        prop_assert_eq!(roundtripped, Optional::None);
    }
}

// =============================================================================
// Result -> Optional / Either
// =============================================================================

proptest! {
    #[test]
    fn prop_result_to_option(value in any::<i32>(), message in "[a-z]{1,8}") {
        prop_assert_eq!(Result::<i32, String>::Ok(value).to_option(), Optional::Some(value));
        prop_assert_eq!(Result::<i32, String>::Error(message).to_option(), Optional::None);
    }

    #[test]
    fn prop_result_to_either_places_ok_on_left(value in any::<i32>(), fallback in any::<i32>()) {
        let ok: Result<i32, String> = Result::Ok(value);
        prop_assert_eq!(ok.to_left(fallback), Either::Left(value));

        let failed: Result<i32, String> = Result::Error("boom".to_string());
        prop_assert_eq!(failed.to_left(fallback), Either::Right(fallback));
    }
}

// =============================================================================
// Try -> Optional / Either / Result
// =============================================================================

proptest! {
    #[test]
    fn prop_try_success_converts_to_present_variants(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(Try::Success(value).to_option(), Optional::Some(value));
        prop_assert_eq!(Try::Success(value).to_result(), Result::Ok(value));
        prop_assert_eq!(Try::Success(value).to_left(fallback), Either::Left(value));
        prop_assert_eq!(Try::Success(value).to_right(fallback), Either::Right(value));
    }
}

#[rstest]
fn try_failure_converts_to_empty_variants() {
    let failed = Try::capture(|| -> i32 { panic!("boom") });
    assert_eq!(failed.to_option(), Optional::None);

    let failed = Try::capture(|| -> i32 { panic!("boom") });
    assert!(failed.to_result().error().is_some());

    let failed = Try::capture(|| -> i32 { panic!("boom") });
    assert_eq!(failed.to_left(0), Either::Right(0));

    let failed = Try::capture(|| -> i32 { panic!("boom") });
    assert_eq!(failed.to_right(0), Either::Left(0));
}

// =============================================================================
// Flatten Laws: flatten(pure(pure(x))) == pure(x)
// =============================================================================

proptest! {
    #[test]
    fn prop_flatten_of_double_pure_is_pure(value in any::<i32>()) {
        prop_assert_eq!(
            Optional::Some(Optional::Some(value)).flatten(),
            Optional::Some(value)
        );

        let nested: Result<Result<i32, String>, String> = Result::Ok(Result::Ok(value));
        prop_assert_eq!(nested.flatten(), Result::Ok(value));

        prop_assert_eq!(Try::Success(Try::Success(value)).flatten(), Try::Success(value));

        let nested: Either<Either<i32, String>, String> = Either::Left(Either::Left(value));
        prop_assert_eq!(nested.join_left(), Either::Left(value));
    }
}

// =============================================================================
// Conversion through the whole graph
// =============================================================================

#[rstest]
fn conversion_graph_is_closed_over_success_values() {
    // Try -> Result -> Optional -> Either -> (std) Result
    let outcome = Try::Success(5)
        .to_result()
        .to_option()
        .to_left("empty")
        .left()
        .to_option();
    assert_eq!(outcome, Optional::Some(5));
}
