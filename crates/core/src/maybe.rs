//! # Maybe - Optional Values
//!
//! [`Maybe<V>`] is either `Present(V)` or `Absent`. There is no third state.
//!
//! ## Construction
//!
//! An absent input never becomes a present value:
//!
//! ```
//! use monoid_core::prelude::*;
//!
//! let found: Maybe<&str> = Maybe::from(Some("config.toml"));
//! let missing: Maybe<&str> = Maybe::from(None);
//!
//! assert!(found.is_some());
//! assert!(missing.is_none());
//! assert!(missing.unwrap().is_err_and(|e| e.is_none()));
//! ```
//!
//! ## Combinators
//!
//! | Combinator        | Present(v)                      | Absent             |
//! |-------------------|---------------------------------|--------------------|
//! | `and(o)`          | `o` if `o` is present           | `Absent`           |
//! | `and_then(f)`     | `f(v)`                          | `Absent`, no call  |
//! | `filter(p)`       | `self` if `p(&v)`, else `Absent`| `Absent`, no call  |
//! | `inspect(f)`      | calls `f(&v)`, returns `self`   | `self`, no call    |
//! | `map(f)`          | `Present(f(v))`                 | `Absent`, no call  |
//! | `filter_map(f)`   | `Maybe::from(f(v))`             | `Absent`, no call  |
//! | `or(o)`           | `self`                          | `o`                |
//! | `or_else(g)`      | `self`, no call                 | `g()`              |
//!
//! ## Propagation
//!
//! `Maybe` never traps a caller's failure. The `try_*` combinators hand an
//! `Err` from the caller's function straight back, untouched.

use crate::cause::Cause;
use crate::error::UnwrapError;
use crate::func::{Generate, Inspect, Predicate, Transform};
use crate::macros::trace_event;
use crate::outcome::Outcome;
use crate::unwrap::{Unwrap, Unwrapped};

/// An optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<V> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(V),
}

impl<V> Maybe<V> {
    pub fn some(value: V) -> Self {
        Maybe::Present(value)
    }

    pub fn none() -> Self {
        Maybe::Absent
    }

    /// `None` becomes `Absent`, `Some(v)` becomes `Present(v)`.
    pub fn from_option(value: Option<V>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    /// `other`, if both `self` and `other` are present. `self`'s value is
    /// dropped either way.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match (self, other) {
            (Maybe::Present(_), Maybe::Present(value)) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    /// Chain a presence-dependent step.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: Transform<V, Maybe<U>>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// [`and_then`](Self::and_then) with a fallible step. The step's error is
    /// returned as is.
    pub fn try_and_then<U, E, F>(self, f: F) -> Result<Maybe<U>, E>
    where
        F: Transform<V, Result<Maybe<U>, E>>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Predicate<V>,
    {
        match self {
            Maybe::Present(value) => {
                if predicate(&value) {
                    Maybe::Present(value)
                } else {
                    Maybe::Absent
                }
            }
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Observe the value, if any. Returns `self` unchanged.
    pub fn inspect<I>(self, f: I) -> Self
    where
        I: Inspect<V>,
    {
        if let Maybe::Present(value) = &self {
            f(value);
        }
        self
    }

    /// `self.inspect(f).or_else(generator)`.
    pub fn inspect_or_else<I, G>(self, f: I, generator: G) -> Self
    where
        I: Inspect<V>,
        G: Generate<Maybe<V>>,
    {
        self.inspect(f).or_else(generator)
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Present and the predicate holds.
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: Predicate<V>,
    {
        match self {
            Maybe::Present(value) => predicate(value),
            Maybe::Absent => false,
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: Transform<V, U>,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Map through a step that may come back empty. `None` collapses to
    /// `Absent`.
    pub fn filter_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: Transform<V, Option<U>>,
    {
        match self {
            Maybe::Present(value) => Maybe::from_option(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// [`map`](Self::map) with a fallible step. The step's error is returned
    /// as is.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Maybe<U>, E>
    where
        F: Transform<V, Result<U, E>>,
    {
        match self {
            Maybe::Present(value) => f(value).map(Maybe::Present),
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }

    pub fn or(self, other: Maybe<V>) -> Self {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => other,
        }
    }

    pub fn or_else<G>(self, generator: G) -> Self
    where
        G: Generate<Maybe<V>>,
    {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => generator(),
        }
    }

    /// The held value, or the generator's. A generator error is returned as
    /// is; it is never wrapped in an [`UnwrapError`].
    pub fn try_unwrap_or_else<E, G>(self, generator: G) -> Result<V, E>
    where
        G: Generate<Result<V, E>>,
    {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => generator(),
        }
    }

    /// Turn absence into a failure carrying `cause`.
    pub fn ok_or(self, cause: impl Into<Cause>) -> Outcome<V> {
        match self {
            Maybe::Present(value) => Outcome::Passing(value),
            Maybe::Absent => Outcome::Failing(cause.into()),
        }
    }

    pub fn as_ref(&self) -> Maybe<&V> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn into_option(self) -> Option<V> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

// ============================================================================
// Unwrap Contract
// ============================================================================

impl<V> Unwrap for Maybe<V> {
    type Value = V;
    type Error = UnwrapError;

    fn unwrap(self) -> Result<V, UnwrapError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => {
                trace_event!("unwrap of an absent value");
                Err(UnwrapError::none())
            }
        }
    }

    fn unwrap_or(self, fallback: V) -> V {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => fallback,
        }
    }

    fn unwrap_or_else<G>(self, generator: G) -> V
    where
        G: Generate<V>,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => generator(),
        }
    }

    fn unwrap_unsafe(self) -> Unwrapped<V, UnwrapError> {
        match self {
            Maybe::Present(value) => Unwrapped::from_value(value),
            Maybe::Absent => Unwrapped::from_error(UnwrapError::none()),
        }
    }
}

impl<V> Default for Maybe<V> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<V> From<Option<V>> for Maybe<V> {
    fn from(value: Option<V>) -> Self {
        Maybe::from_option(value)
    }
}

impl<V> From<Maybe<V>> for Option<V> {
    fn from(value: Maybe<V>) -> Self {
        value.into_option()
    }
}

impl<V> IntoIterator for Maybe<V> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
