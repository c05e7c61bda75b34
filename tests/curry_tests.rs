//! Tests for the curry2! through curry6! and uncurry2! through uncurry6!
//! macro families.

#![cfg(feature = "compose")]

use fnkit::{curry2, curry3, curry4, curry5, curry6, uncurry2, uncurry4, uncurry5, uncurry6};
use rstest::rstest;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

#[rstest]
fn curry2_applies_one_argument_at_a_time() {
    let curried = curry2!(add);
    assert_eq!(curried(5)(3), 8);
}

#[rstest]
fn curry2_partial_application_is_reusable() {
    let curried = curry2!(add);
    let add_five = curried(5);
    assert_eq!(add_five(3), 8);
    assert_eq!(add_five(10), 15);

    // The base curried function also remains callable
    assert_eq!(curried(1)(1), 2);
}

#[rstest]
fn curry2_works_with_non_copy_arguments() {
    let concat = |a: String, b: String| format!("{a}{b}");
    let curried = curry2!(concat);
    let with_prefix = curried("pre".to_string());
    assert_eq!(with_prefix("fix".to_string()), "prefix");
    assert_eq!(with_prefix("amble".to_string()), "preamble");
}

#[rstest]
fn curry3_applies_three_arguments() {
    let volume = |w: f64, h: f64, d: f64| w * h * d;
    let curried = curry3!(volume);
    let result = curried(2.0)(3.0)(4.0);
    assert!((result - 24.0).abs() < f64::EPSILON);
}

#[rstest]
fn curry4_through_curry6_apply_all_arguments() {
    let sum4 = |a: i32, b: i32, c: i32, d: i32| a + b + c + d;
    assert_eq!(curry4!(sum4)(1)(2)(3)(4), 10);

    let sum5 = |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e;
    assert_eq!(curry5!(sum5)(1)(2)(3)(4)(5), 15);

    let sum6 = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
    assert_eq!(curry6!(sum6)(1)(2)(3)(4)(5)(6), 21);
}

#[rstest]
fn uncurry_reverses_currying_for_each_arity() {
    let roundtripped2 = uncurry2!(curry2!(add));
    assert_eq!(roundtripped2(5, 3), add(5, 3));

    let sum4 = |a: i32, b: i32, c: i32, d: i32| a + b + c + d;
    let roundtripped4 = uncurry4!(curry4!(sum4));
    assert_eq!(roundtripped4(1, 2, 3, 4), 10);

    let sum5 = |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e;
    let roundtripped5 = uncurry5!(curry5!(sum5));
    assert_eq!(roundtripped5(1, 2, 3, 4, 5), 15);

    let sum6 = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
    let roundtripped6 = uncurry6!(curry6!(sum6));
    assert_eq!(roundtripped6(1, 2, 3, 4, 5, 6), 21);
}

#[rstest]
fn uncurry_accepts_hand_written_curried_closures() {
    let curried = |a: i32| move |b: i32| a * b;
    let multiply = uncurry2!(curried);
    assert_eq!(multiply(6, 7), 42);
}
