//! Smoke tests for the core crate.
//!
//! These walk the end-to-end scenarios a caller hits first:
//! - Constructing from optional input and unwrapping
//! - Chaining passing/failing computations
//! - What each unwrap error carries
//! - Filtering a passing value out

use std::error::Error as _;

use monoid_core::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Runtime(&'static str);

#[derive(Debug, thiserror::Error)]
#[error("illegal state: {0}")]
struct IllegalState(&'static str);

// ============================================================================
// Maybe
// ============================================================================

#[test]
fn smoke_absent_input_is_none() {
    let m: Maybe<i32> = Maybe::from(None);
    assert!(m.is_none());

    let err = m.unwrap().expect_err("absent must not unwrap");
    assert!(err.is_none());
    assert!(err.source().is_none());
}

#[test]
fn smoke_present_input_unwraps() {
    for v in [0, 1, -1, i64::MAX] {
        let m = Maybe::from(Some(v));
        assert!(m.is_some());
        assert_eq!(m.unwrap().ok(), Some(v));
    }
}

#[test]
fn smoke_map_doubles() {
    let value = Maybe::from(Some(7)).map(|x| x * 2).unwrap();
    assert_eq!(value.ok(), Some(14));
}

#[test]
fn smoke_maybe_pipeline() {
    let lookup = |key: &str| match key {
        "port" => Maybe::some("8080"),
        _ => Maybe::none(),
    };

    let port = lookup("port")
        .filter_map(|s| s.parse::<u16>().ok())
        .filter(|p| *p >= 1024)
        .unwrap_or(80);
    assert_eq!(port, 8080);

    let fallback = lookup("missing")
        .or_else(|| Maybe::some("3000"))
        .filter_map(|s| s.parse::<u16>().ok());
    assert_eq!(fallback, Maybe::some(3000));
}

// ============================================================================
// Outcome
// ============================================================================

#[test]
fn smoke_and_then_passes_through() {
    let r = Outcome::pass(10).and_then(|x| {
        if x > 5 {
            Outcome::pass(x)
        } else {
            Outcome::fail(Runtime("too small"))
        }
    });
    assert_eq!(r.unwrap().ok(), Some(10));
}

#[test]
fn smoke_fail_unwrap_chains_cause() {
    let err = Outcome::<i32>::fail(Runtime("boom"))
        .unwrap()
        .expect_err("failing must not unwrap");

    assert!(err.is_fail());
    let source = err.source().expect("cause is chained");
    assert_eq!(source.to_string(), "boom");
    assert!(err.cause().is_some_and(|c| c.is::<Runtime>()));
}

#[test]
fn smoke_attempt_captures_error() {
    let r: Outcome<i32> = Outcome::attempt(|| Err(IllegalState("bad")));
    assert!(r.is_failing());
    assert_eq!(
        r.cause().map(|c| c.to_string()).as_deref(),
        Some("illegal state: bad")
    );
}

#[test]
fn smoke_filter_rejection_has_a_cause() {
    let r = Outcome::pass(3).filter(|x| *x > 10);
    assert!(r.is_failing());

    let cause = r.cause().expect("rejection must carry a cause");
    assert!(cause.is::<Rejected>());

    let err = r.unwrap().expect_err("rejected value must not unwrap");
    assert!(err.source().is_some());
}

#[test]
fn smoke_passing_view() {
    assert_eq!(Outcome::pass(5).passing(), Maybe::some(5));
    assert_eq!(
        Outcome::<i32>::fail(Runtime("a")).passing(),
        Maybe::none()
    );
    assert_eq!(
        Outcome::<i32>::fail(IllegalState("b")).passing(),
        Maybe::none()
    );
}

#[test]
fn smoke_unwrap_or_never_fails() {
    assert_eq!(Maybe::some(1).unwrap_or(0), 1);
    assert_eq!(Maybe::none().unwrap_or(0), 0);
    assert_eq!(Outcome::pass(1).unwrap_or(0), 1);
    assert_eq!(Outcome::fail(Runtime("x")).unwrap_or(0), 0);
    assert_eq!(Outcome::pass(1).filter(|_| false).unwrap_or(0), 0);
}

// ============================================================================
// Crossing between the two
// ============================================================================

#[test]
fn smoke_round_trip_through_outcome() {
    let config = Maybe::some("42")
        .ok_or(Runtime("missing key"))
        .try_map(|s| s.parse::<u32>())
        .passing();
    assert_eq!(config, Maybe::some(42));

    let missing = Maybe::<&str>::none()
        .ok_or(Runtime("missing key"))
        .try_map(|s| s.parse::<u32>());
    assert!(missing.cause().is_some_and(|c| c.is::<Runtime>()));
}
