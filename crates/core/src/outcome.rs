//! # Outcome - Fallible Results
//!
//! [`Outcome<V>`] is either `Passing(V)` or `Failing(Cause)`.
//!
//! ## The Attempt Boundary
//!
//! [`Outcome::attempt`] is where an ordinary `Result`-returning computation
//! becomes algebraic state: `Ok(v)` turns into `Passing(v)`, `Err(e)` into
//! `Failing(e.into())`. [`map`](Outcome::map) and [`try_map`](Outcome::try_map)
//! run their transform through that same boundary.
//!
//! Every other combinator passes the caller's function straight through.
//! A failing outcome keeps its original cause across `and_then`, `filter`,
//! `map`, so the root cause of a pipeline is the first thing that went wrong:
//!
//! ```
//! use monoid_core::prelude::*;
//!
//! let port = Outcome::attempt(|| "80a".parse::<u16>())
//!     .map(|p| p + 1)
//!     .filter(|p| *p > 1024);
//!
//! assert!(port.is_failing());
//! let err = port.unwrap().unwrap_err();
//! assert!(err.cause().is_some_and(|c| c.is::<std::num::ParseIntError>()));
//! ```
//!
//! ## Rejection
//!
//! `filter` on a passing value that fails the predicate has no cause to
//! carry forward, so it records [`Rejected`]. Use
//! [`filter_or`](Outcome::filter_or) to supply a domain error instead.

use std::convert::Infallible;

use crate::cause::Cause;
use crate::error::{Rejected, UnwrapError};
use crate::func::{Generate, Inspect, Predicate, Transform};
use crate::macros::trace_event;
use crate::maybe::Maybe;
use crate::unwrap::{Unwrap, Unwrapped};

/// A computation that either passed with a value or failed with a cause.
#[derive(Debug, Clone)]
pub enum Outcome<V> {
    Passing(V),
    Failing(Cause),
}

impl<V> Outcome<V> {
    pub fn pass(value: V) -> Self {
        Outcome::Passing(value)
    }

    pub fn fail(error: impl Into<Cause>) -> Self {
        Outcome::Failing(error.into())
    }

    /// Run `generator`, capturing `Ok` as passing and `Err` as failing.
    pub fn attempt<E, G>(generator: G) -> Self
    where
        G: Generate<Result<V, E>>,
        E: Into<Cause>,
    {
        match generator() {
            Ok(value) => Outcome::Passing(value),
            Err(error) => {
                let cause = error.into();
                trace_event!(cause = %cause, "attempt captured a failure");
                Outcome::Failing(cause)
            }
        }
    }

    /// Chain a step that may itself fail. A failing `self` skips the step and
    /// keeps its cause.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: Transform<V, Outcome<U>>,
    {
        match self {
            Outcome::Passing(value) => f(value),
            Outcome::Failing(cause) => Outcome::Failing(cause),
        }
    }

    /// Keep a passing value only if the predicate holds; otherwise fail with
    /// [`Rejected`]. A failing `self` keeps its own cause.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Predicate<V>,
    {
        self.filter_or(predicate, Rejected)
    }

    /// [`filter`](Self::filter) with a caller-supplied rejection error.
    pub fn filter_or<P, E>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<V>,
        E: Into<Cause>,
    {
        match self {
            Outcome::Passing(value) => {
                if predicate(&value) {
                    Outcome::Passing(value)
                } else {
                    let cause = error.into();
                    trace_event!(cause = %cause, "filter rejected a passing value");
                    Outcome::Failing(cause)
                }
            }
            Outcome::Failing(cause) => Outcome::Failing(cause),
        }
    }

    /// Observe a passing value. Returns `self` unchanged.
    pub fn inspect<I>(self, f: I) -> Self
    where
        I: Inspect<V>,
    {
        if let Outcome::Passing(value) = &self {
            f(value);
        }
        self
    }

    /// Observe a failing cause. Returns `self` unchanged.
    pub fn inspect_err<I>(self, f: I) -> Self
    where
        I: Inspect<Cause>,
    {
        if let Outcome::Failing(cause) = &self {
            f(cause);
        }
        self
    }

    /// `self.inspect(f).or_else(generator)`.
    pub fn inspect_or_else<I, G>(self, f: I, generator: G) -> Self
    where
        I: Inspect<V>,
        G: Generate<Outcome<V>>,
    {
        self.inspect(f).or_else(generator)
    }

    pub fn is_passing(&self) -> bool {
        matches!(self, Outcome::Passing(_))
    }

    pub fn is_failing(&self) -> bool {
        matches!(self, Outcome::Failing(_))
    }

    /// Passing and the predicate holds.
    pub fn is_passing_and<P>(&self, predicate: P) -> bool
    where
        P: Predicate<V>,
    {
        match self {
            Outcome::Passing(value) => predicate(value),
            Outcome::Failing(_) => false,
        }
    }

    /// Transform a passing value. Equivalent to [`try_map`](Self::try_map)
    /// with a transform that cannot fail.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: Transform<V, U>,
    {
        self.try_map(|value| Ok::<U, Infallible>(f(value)))
    }

    /// Transform a passing value through the attempt boundary: an `Err` from
    /// the transform becomes `Failing`. A failing `self` keeps its cause and
    /// the transform is not called.
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: Transform<V, Result<U, E>>,
        E: Into<Cause>,
    {
        match self {
            Outcome::Passing(value) => Outcome::attempt(|| f(value)),
            Outcome::Failing(cause) => Outcome::Failing(cause),
        }
    }

    pub fn or(self, other: Outcome<V>) -> Self {
        match self {
            Outcome::Passing(_) => self,
            Outcome::Failing(_) => other,
        }
    }

    pub fn or_else<G>(self, generator: G) -> Self
    where
        G: Generate<Outcome<V>>,
    {
        match self {
            Outcome::Passing(_) => self,
            Outcome::Failing(_) => generator(),
        }
    }

    /// The passing value as a [`Maybe`]. The cause of a failure is dropped.
    pub fn passing(self) -> Maybe<V> {
        match self {
            Outcome::Passing(value) => Maybe::Present(value),
            Outcome::Failing(_) => Maybe::Absent,
        }
    }

    /// The failing cause as a [`Maybe`]. A passing value is dropped.
    pub fn failing(self) -> Maybe<Cause> {
        match self {
            Outcome::Passing(_) => Maybe::Absent,
            Outcome::Failing(cause) => Maybe::Present(cause),
        }
    }

    /// Borrow the cause of a failure.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Outcome::Passing(_) => None,
            Outcome::Failing(cause) => Some(cause),
        }
    }

    /// The passing value, or the generator's. The generator runs through the
    /// attempt boundary, so its error surfaces as [`UnwrapError::Fail`].
    pub fn try_unwrap_or_else<E, G>(self, generator: G) -> Result<V, UnwrapError>
    where
        G: Generate<Result<V, E>>,
        E: Into<Cause>,
    {
        match self {
            Outcome::Passing(value) => Ok(value),
            Outcome::Failing(_) => Outcome::attempt(generator).unwrap(),
        }
    }

    pub fn as_ref(&self) -> Outcome<&V> {
        match self {
            Outcome::Passing(value) => Outcome::Passing(value),
            Outcome::Failing(cause) => Outcome::Failing(cause.clone()),
        }
    }

    pub fn into_result(self) -> Result<V, Cause> {
        match self {
            Outcome::Passing(value) => Ok(value),
            Outcome::Failing(cause) => Err(cause),
        }
    }
}

// ============================================================================
// Unwrap Contract
// ============================================================================

impl<V> Unwrap for Outcome<V> {
    type Value = V;
    type Error = Cause;

    fn unwrap(self) -> Result<V, UnwrapError> {
        match self {
            Outcome::Passing(value) => Ok(value),
            Outcome::Failing(cause) => {
                trace_event!(cause = %cause, "unwrap of a failing outcome");
                Err(UnwrapError::fail(cause))
            }
        }
    }

    fn unwrap_or(self, fallback: V) -> V {
        match self {
            Outcome::Passing(value) => value,
            Outcome::Failing(_) => fallback,
        }
    }

    fn unwrap_or_else<G>(self, generator: G) -> V
    where
        G: Generate<V>,
    {
        match self {
            Outcome::Passing(value) => value,
            Outcome::Failing(_) => generator(),
        }
    }

    fn unwrap_unsafe(self) -> Unwrapped<V, Cause> {
        match self {
            Outcome::Passing(value) => Unwrapped::from_value(value),
            Outcome::Failing(cause) => Unwrapped::from_error(cause),
        }
    }
}

/// Passing values compare by value. Failing outcomes are equal only when they
/// hold the *same* cause (see [`Cause::ptr_eq`]).
impl<V: PartialEq> PartialEq for Outcome<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Passing(a), Outcome::Passing(b)) => a == b,
            (Outcome::Failing(a), Outcome::Failing(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V>
where
    E: Into<Cause>,
{
    fn from(result: Result<V, E>) -> Self {
        Outcome::attempt(|| result)
    }
}

impl<V> From<Outcome<V>> for Result<V, Cause> {
    fn from(outcome: Outcome<V>) -> Self {
        outcome.into_result()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::error::Error as _;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("port {0} is reserved")]
    struct Reserved(u16);

    #[test]
    fn test_attempt_captures_both_sides() {
        let ok = Outcome::attempt(|| "8080".parse::<u16>());
        assert_eq!(ok, Outcome::pass(8080));

        let err = Outcome::attempt(|| "http".parse::<u16>());
        assert!(err.is_failing());
        assert!(err
            .cause()
            .is_some_and(|c| c.is::<std::num::ParseIntError>()));
    }

    #[test]
    fn test_and_then_keeps_cause() {
        let cause = Cause::msg("first");
        let failed: Outcome<i32> = Outcome::fail(cause.clone());
        let chained = failed.and_then(|x| Outcome::pass(x + 1));
        assert!(chained.cause().is_some_and(|c| c.ptr_eq(&cause)));
    }

    #[test]
    fn test_filter_rejection_records_rejected() {
        let rejected = Outcome::pass(3).filter(|x| *x > 10);
        assert!(rejected.is_failing());
        assert!(rejected.cause().is_some_and(|c| c.is::<Rejected>()));
    }

    #[test]
    fn test_filter_keeps_passing_and_failing() {
        assert_eq!(Outcome::pass(30).filter(|x| *x > 10), Outcome::pass(30));

        let cause = Cause::msg("earlier");
        let failed: Outcome<i32> = Outcome::fail(cause.clone());
        let filtered = failed.filter(|_| unreachable!());
        assert!(filtered.cause().is_some_and(|c| c.ptr_eq(&cause)));
    }

    #[test]
    fn test_filter_or_uses_supplied_error() {
        let port = Outcome::pass(22_u16).filter_or(|p| *p > 1024, Reserved(22));
        let cause = port.cause().expect("filtered port must fail");
        assert_eq!(cause.to_string(), "port 22 is reserved");
    }

    #[test]
    fn test_try_map_traps_transform_error() {
        let r = Outcome::pass("12x").try_map(|s| s.parse::<i32>());
        assert!(r.is_failing());

        let r = Outcome::pass("12").try_map(|s| s.parse::<i32>());
        assert_eq!(r, Outcome::pass(12));
    }

    #[test]
    fn test_map_skips_failing() {
        let called = Cell::new(false);
        let failed: Outcome<i32> = Outcome::fail(Cause::msg("no"));
        let mapped = failed.map(|x| {
            called.set(true);
            x
        });
        assert!(mapped.is_failing());
        assert!(!called.get());
    }

    #[test]
    fn test_inspect_variants() {
        let seen = Cell::new(0);
        let errs = Cell::new(0);

        let _ = Outcome::pass(4)
            .inspect(|x| seen.set(*x))
            .inspect_err(|_| errs.set(errs.get() + 1));
        let _ = Outcome::<i32>::fail(Cause::msg("x"))
            .inspect(|x| seen.set(*x + 100))
            .inspect_err(|_| errs.set(errs.get() + 1));

        assert_eq!(seen.get(), 4);
        assert_eq!(errs.get(), 1);
    }

    #[test]
    fn test_inspect_or_else_replaces_failure() {
        let r = Outcome::<i32>::fail(Cause::msg("x")).inspect_or_else(|_| {}, || Outcome::pass(1));
        assert_eq!(r, Outcome::pass(1));
    }

    #[test]
    fn test_passing_and_failing_views() {
        assert_eq!(Outcome::pass(5).passing(), Maybe::some(5));
        assert_eq!(Outcome::<i32>::fail(Cause::msg("x")).passing(), Maybe::none());
        assert!(Outcome::pass(5).failing().is_none());
        assert!(Outcome::<i32>::fail(Cause::msg("x")).failing().is_some());
    }

    #[test]
    fn test_is_passing_and() {
        assert!(Outcome::pass(5).is_passing_and(|x| *x == 5));
        assert!(!Outcome::pass(5).is_passing_and(|x| *x == 6));
        assert!(!Outcome::<i32>::fail(Cause::msg("x")).is_passing_and(|_| true));
    }

    #[test]
    fn test_unwrap_wraps_cause() {
        let err = Outcome::<i32>::fail(Cause::msg("boom")).unwrap().unwrap_err();
        assert!(err.is_fail());
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("boom"));
    }

    #[test]
    fn test_unwrap_or_family() {
        let failed = || Outcome::<i32>::fail(Cause::msg("x"));
        assert_eq!(failed().unwrap_or(1), 1);
        assert_eq!(failed().unwrap_or_else(|| 2), 2);
        assert_eq!(failed().unwrap_or_default(), 0);
        assert_eq!(Outcome::pass(9).unwrap_or(1), 9);
    }

    #[test]
    fn test_try_unwrap_or_else() {
        let failed = || Outcome::<i32>::fail(Cause::msg("x"));

        let v = failed().try_unwrap_or_else(|| Ok::<_, Infallible>(3));
        assert_eq!(v.ok(), Some(3));

        let err = failed()
            .try_unwrap_or_else(|| Err(Reserved(1)))
            .unwrap_err();
        assert!(err.cause().is_some_and(|c| c.is::<Reserved>()));
    }

    #[test]
    fn test_unwrap_unsafe() {
        let pair = Outcome::pass(1).unwrap_unsafe();
        assert_eq!(pair.value(), Some(&1));
        assert!(pair.error().is_none());

        let pair = Outcome::<i32>::fail(Cause::msg("x")).unwrap_unsafe();
        assert!(pair.value().is_none());
        assert_eq!(pair.error().map(|c| c.to_string()).as_deref(), Some("x"));
    }

    #[test]
    fn test_result_conversions() {
        let from_ok: Outcome<i32> = Ok::<_, Reserved>(1).into();
        assert_eq!(from_ok, Outcome::pass(1));

        let from_err: Outcome<i32> = Err::<i32, _>(Reserved(2)).into();
        assert!(from_err.is_failing());

        let back: Result<i32, Cause> = Outcome::pass(3).into();
        assert_eq!(back.ok(), Some(3));
    }
}
