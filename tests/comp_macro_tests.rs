//! Tests for the comp! comprehension macro.
//!
//! comp! chains container-producing steps with `pattern <= container;`
//! binds, pure `let` bindings, and a final `yield` projection. These tests
//! cover all four container types, chains of three or more steps, and the
//! guarantee that a short-circuiting step stops evaluation of later steps.

#![cfg(feature = "types")]

use std::cell::Cell;

use fnkit::comp;
use fnkit::types::{Either, Optional, Result, Try};
use rstest::rstest;

// =============================================================================
// Optional Chains
// =============================================================================

#[rstest]
fn comp_two_binds_with_projection() {
    let result = comp! {
        a <= Optional::Some(1);
        b <= Optional::Some(2);
        yield a + b
    };
    assert_eq!(result, Optional::Some(3));
}

#[rstest]
fn comp_three_binds_with_projection() {
    let result = comp! {
        a <= Optional::Some(1);
        b <= Optional::Some(2);
        c <= Optional::Some(3);
        yield a + b + c
    };
    assert_eq!(result, Optional::Some(6));
}

#[rstest]
fn comp_four_binds_with_let_and_projection() {
    let result = comp! {
        a <= Optional::Some(1);
        b <= Optional::Some(2);
        let partial_sum = a + b;
        c <= Optional::Some(3);
        d <= Optional::Some(4);
        yield partial_sum + c + d
    };
    assert_eq!(result, Optional::Some(10));
}

#[rstest]
fn comp_none_step_short_circuits_later_steps() {
    let later_evaluated = Cell::new(false);

    let step = |value: i32| -> Optional<i32> {
        later_evaluated.set(true);
        Optional::Some(value)
    };

    let result = comp! {
        a <= Optional::Some(1);
        b <= Optional::<i32>::None;
        c <= step(a + b);
        yield c
    };
    assert_eq!(result, Optional::None);
    assert!(!later_evaluated.get(), "steps after a None must never be evaluated");
}

// =============================================================================
// Result Chains
// =============================================================================

#[rstest]
fn comp_result_chain_propagates_error() {
    fn checked_div(dividend: i32, divisor: i32) -> Result<i32, String> {
        if divisor == 0 {
            Result::Error("div by zero".to_string())
        } else {
            Result::Ok(dividend / divisor)
        }
    }

    let result = comp! {
        a <= checked_div(10, 2);
        b <= checked_div(a, 0);
        yield b + 1
    };
    assert_eq!(result, Result::Error("div by zero".to_string()));
}

// =============================================================================
// Try Chains
// =============================================================================

#[rstest]
fn comp_try_chain_absorbs_faults() {
    let result = comp! {
        a <= Try::capture(|| "4".parse::<i32>().unwrap());
        b <= Try::capture(|| "2".parse::<i32>().unwrap());
        yield a * 10 + b
    };
    assert_eq!(result, Try::Success(42));

    let result = comp! {
        a <= Try::capture(|| "oops".parse::<i32>().unwrap());
        yield a
    };
    assert!(result.is_failure());
}

// =============================================================================
// Either Projection Chains
// =============================================================================

#[rstest]
fn comp_left_projection_chain() {
    let value: Either<i32, String> = Either::Left(20);
    let result = comp! {
        a <= value.left();
        yield a * 2
    };
    assert_eq!(result, Either::Left(40));
}

// =============================================================================
// Terminal container expression
// =============================================================================

#[rstest]
fn comp_terminal_expression_passes_through() {
    let result = comp! {
        a <= Optional::Some(5);
        b <= Optional::Some(6);
        Optional::Some(a * b)
    };
    assert_eq!(result, Optional::Some(30));
}
