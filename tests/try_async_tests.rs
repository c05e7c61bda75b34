//! Tests for the asynchronous fault capture constructor of Try.
//!
//! `Try::capture_future` awaits a computation and classifies its outcome
//! exactly like the synchronous `Try::capture`: the eventual value becomes
//! `Success`, an unwind crossing the await becomes `Failure`.

#![cfg(all(feature = "types", feature = "async"))]

use fnkit::types::Try;

async fn parse_async(text: &str) -> i32 {
    text.parse::<i32>().unwrap()
}

#[tokio::test]
async fn capture_future_classifies_success() {
    let outcome = Try::capture_future(parse_async("42")).await;
    assert_eq!(outcome, Try::Success(42));
}

#[tokio::test]
async fn capture_future_classifies_unwind_as_failure() {
    let outcome = Try::capture_future(parse_async("abc")).await;
    assert!(outcome.is_failure());
}

#[tokio::test]
async fn capture_future_preserves_panic_message() {
    let outcome = Try::capture_future(async { panic!("async fault") }).await;
    let message: String = outcome.fold(|_: i32| String::new(), |fault| fault.message().to_string());
    assert_eq!(message, "async fault");
}

#[tokio::test]
async fn captured_future_composes_with_sync_combinators() {
    let outcome = Try::capture_future(parse_async("21")).await.map(|x| x * 2);
    assert_eq!(outcome, Try::Success(42));

    let recovered = Try::capture_future(parse_async("abc")).await.recover(|_| 0);
    assert_eq!(recovered, Try::Success(0));
}
