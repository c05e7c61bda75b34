//! Unit tests for the Result<T, E> type.
//!
//! Result is the success/failure specialization of the disjoint union:
//! Ok carries the success value, Error carries the failure value. These
//! tests cover the shared monadic vocabulary plus the error-side
//! operations (error_map, recover, recover_with, flat_tap) and the
//! predicate-driven filter family.

#![cfg(feature = "types")]

use std::cell::Cell;

use fnkit::types::{Either, Nothing, Optional, Result};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn result_ok_is_ok() {
    let outcome: Result<i32, String> = Result::Ok(42);
    assert!(outcome.is_ok());
    assert!(!outcome.is_error());
}

#[rstest]
fn result_error_is_error() {
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert!(outcome.is_error());
    assert!(!outcome.is_ok());
}

#[rstest]
fn result_error_accessor() {
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(outcome.error(), Optional::Some("boom".to_string()));

    let outcome: Result<i32, String> = Result::Ok(42);
    assert_eq!(outcome.error(), Optional::None);
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn result_get_returns_ok_value() {
    let outcome: Result<i32, String> = Result::Ok(42);
    assert_eq!(outcome.get(), 42);
}

#[rstest]
#[should_panic(expected = "called `Result::get()` on an `Error` value")]
fn result_get_on_error_panics() {
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    let _ = outcome.get();
}

#[rstest]
#[should_panic(expected = "called `Result::unwrap_error()` on an `Ok` value")]
fn result_unwrap_error_on_ok_panics() {
    let outcome: Result<i32, String> = Result::Ok(42);
    let _ = outcome.unwrap_error();
}

#[rstest]
fn result_get_or_else_family() {
    let failed: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(failed.clone().get_or_else(0), 0);
    assert_eq!(failed.clone().get_or_else_with(|| 7), 7);
    assert_eq!(failed.get_or_default(), 0);

    let evaluated = Cell::new(false);
    let ok: Result<i32, String> = Result::Ok(42);
    assert_eq!(
        ok.get_or_else_with(|| {
            evaluated.set(true);
            0
        }),
        42
    );
    assert!(!evaluated.get(), "supplier must not run for an Ok receiver");
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn result_map_transforms_ok() {
    let outcome: Result<i32, String> = Result::Ok(5);
    assert_eq!(outcome.map(|x| x * 2), Result::Ok(10));
}

#[rstest]
fn result_map_on_error_never_invokes_function() {
    let invoked = Cell::new(false);
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    let result = outcome.map(|x| {
        invoked.set(true);
        x * 2
    });
    assert_eq!(result, Result::Error("boom".to_string()));
    assert!(!invoked.get());
}

#[rstest]
fn result_error_map_transforms_error_only() {
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(outcome.error_map(|e| e.len()), Result::Error(4));

    let outcome: Result<i32, String> = Result::Ok(42);
    assert_eq!(outcome.error_map(|e| e.len()), Result::Ok(42));
}

#[rstest]
fn result_bimap_transforms_both_parameters() {
    let ok: Result<i32, String> = Result::Ok(5);
    assert_eq!(ok.bimap(|x| x * 2, |e: String| e.len()), Result::Ok(10));

    let failed: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(failed.bimap(|x: i32| x * 2, |e| e.len()), Result::Error(4));
}

#[rstest]
fn result_flat_map_chains() {
    fn checked_div(dividend: i32, divisor: i32) -> Result<i32, String> {
        if divisor == 0 {
            Result::Error("div by zero".to_string())
        } else {
            Result::Ok(dividend / divisor)
        }
    }

    let outcome = Result::Ok(10).flat_map(|x| checked_div(x, 2)).flat_map(|x| checked_div(x, 0));
    assert_eq!(outcome, Result::Error("div by zero".to_string()));
}

#[rstest]
fn result_flat_tap_preserves_ok_value() {
    fn audit(x: &i32) -> Result<String, String> {
        if *x > 0 { Result::Ok(x.to_string()) } else { Result::Error("not positive".to_string()) }
    }

    assert_eq!(Result::Ok(5).flat_tap(audit), Result::Ok(5));
    assert_eq!(Result::Ok(-5).flat_tap(audit), Result::Error("not positive".to_string()));

    let failed: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(failed.flat_tap(audit), Result::Error("boom".to_string()));
}

// =============================================================================
// Recovery Operations
// =============================================================================

#[rstest]
fn result_recover_turns_failure_into_success() {
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(outcome.recover(|e| e.len() as i32), Result::Ok(4));
}

#[rstest]
fn result_recover_is_noop_on_ok() {
    let invoked = Cell::new(false);
    let outcome: Result<i32, String> = Result::Ok(42);
    let recovered = outcome.recover(|_| {
        invoked.set(true);
        0
    });
    assert_eq!(recovered, Result::Ok(42));
    assert!(!invoked.get());
}

#[rstest]
fn result_recover_with_may_change_error_type() {
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    let recovered: Result<i32, usize> = outcome.recover_with(|e| Result::Error(e.len()));
    assert_eq!(recovered, Result::Error(4));

    let outcome: Result<i32, String> = Result::Error("42".to_string());
    let recovered: Result<i32, usize> = outcome.recover_with(|e| match e.parse::<i32>() {
        Ok(value) => Result::Ok(value),
        Err(_) => Result::Error(e.len()),
    });
    assert_eq!(recovered, Result::Ok(42));
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn result_filter_rejects_with_supplied_error() {
    let outcome: Result<i32, String> = Result::Ok(10);
    let rejected = outcome.filter(|x| *x < 0, "negative-required".to_string());
    assert_eq!(rejected, Result::Error("negative-required".to_string()));
}

#[rstest]
fn result_filter_keeps_passing_value() {
    let outcome: Result<i32, String> = Result::Ok(10);
    assert_eq!(outcome.filter(|x| *x > 0, "unused".to_string()), Result::Ok(10));
}

#[rstest]
fn result_filter_passes_existing_error_through() {
    let outcome: Result<i32, String> = Result::Error("original".to_string());
    assert_eq!(
        outcome.filter(|_| false, "replacement".to_string()),
        Result::Error("original".to_string())
    );
}

#[rstest]
fn result_filter_with_lazy_error() {
    let evaluated = Cell::new(false);
    let outcome: Result<i32, String> = Result::Ok(10);
    let kept = outcome.filter_with(|x| *x > 0, || {
        evaluated.set(true);
        "rejected".to_string()
    });
    assert_eq!(kept, Result::Ok(10));
    assert!(!evaluated.get(), "error supplier must not run when the predicate holds");
}

#[rstest]
fn result_filter_if_precomputed_condition() {
    let outcome: Result<i32, String> = Result::Ok(10);
    assert_eq!(outcome.clone().filter_if(true, "e".to_string()), Result::Ok(10));
    assert_eq!(outcome.filter_if(false, "e".to_string()), Result::Error("e".to_string()));
}

#[rstest]
fn result_filter_if_with_lazy_error() {
    let outcome: Result<i32, String> = Result::Ok(10);
    assert_eq!(
        outcome.filter_if_with(false, || "lazy".to_string()),
        Result::Error("lazy".to_string())
    );
}

// =============================================================================
// Predicates, Fold and Match
// =============================================================================

#[rstest]
fn result_exists() {
    let outcome: Result<i32, String> = Result::Ok(5);
    assert!(outcome.exists(|x| *x > 3));

    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert!(!outcome.exists(|_| true));
}

#[rstest]
fn result_fold_branches() {
    let outcome: Result<i32, String> = Result::Ok(5);
    assert_eq!(outcome.fold(|x| x.to_string(), |e| e), "5");

    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(outcome.fold(|x| x.to_string(), |e| e), "boom");
}

#[rstest]
fn result_match_with_runs_active_branch() {
    let error_branch = Cell::new(false);
    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    outcome.match_with(|_| panic!("must not run"), |_| error_branch.set(true));
    assert!(error_branch.get());
}

// =============================================================================
// Boolean Combination
// =============================================================================

#[rstest]
fn result_and_or_treat_ok_as_truthy() {
    let ok: Result<i32, String> = Result::Ok(1);
    let other: Result<i32, String> = Result::Ok(2);
    assert_eq!(ok.clone().and(other.clone()), Result::Ok(2));
    assert_eq!(ok.or(other), Result::Ok(1));

    let failed: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(failed.clone().and(Result::Ok(2)), Result::Error("boom".to_string()));
    assert_eq!(failed.or(Result::Ok(2)), Result::Ok(2));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn result_to_option() {
    let outcome: Result<i32, String> = Result::Ok(5);
    assert_eq!(outcome.to_option(), Optional::Some(5));

    let outcome: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(outcome.to_option(), Optional::None);
}

#[rstest]
fn result_to_either_conversions() {
    let ok: Result<i32, String> = Result::Ok(5);
    assert_eq!(ok.to_left("fallback"), Either::Left(5));

    let failed: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(failed.to_left("fallback"), Either::Right("fallback"));

    let ok: Result<i32, String> = Result::Ok(5);
    assert_eq!(ok.to_right("fallback"), Either::Right(5));

    let failed: Result<i32, String> = Result::Error("boom".to_string());
    assert_eq!(failed.to_right_with(|| "lazy fallback"), Either::Left("lazy fallback"));
}

#[rstest]
fn result_flatten_collapses_one_level() {
    let nested: Result<Result<i32, String>, String> = Result::Ok(Result::Ok(5));
    assert_eq!(nested.flatten(), Result::Ok(5));

    let nested: Result<Result<i32, String>, String> = Result::Ok(Result::Error("inner".to_string()));
    assert_eq!(nested.flatten(), Result::Error("inner".to_string()));

    let nested: Result<Result<i32, String>, String> = Result::Error("outer".to_string());
    assert_eq!(nested.flatten(), Result::Error("outer".to_string()));
}

#[rstest]
fn result_widen_one_sided_values() {
    let ok_only: Result<i32, Nothing> = Result::Ok(42);
    let general: Result<i32, String> = ok_only.widen_error();
    assert_eq!(general, Result::Ok(42));

    let error_only: Result<Nothing, String> = Result::Error("boom".to_string());
    let general: Result<i32, String> = error_only.widen_ok();
    assert_eq!(general, Result::Error("boom".to_string()));
}

#[rstest]
fn result_std_roundtrip() {
    let outcome: Result<i32, String> = Ok(5).into();
    assert_eq!(outcome, Result::Ok(5));
    let back: core::result::Result<i32, String> = outcome.into();
    assert_eq!(back, Ok(5));
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn result_equality_compares_tag_then_payload() {
    let ok_a: Result<i32, i32> = Result::Ok(1);
    let ok_b: Result<i32, i32> = Result::Ok(1);
    let error_a: Result<i32, i32> = Result::Error(1);

    assert_eq!(ok_a, ok_b);
    assert_ne!(ok_a, error_a);
}
