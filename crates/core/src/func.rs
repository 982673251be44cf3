//! # Function Shapes
//!
//! The four caller-supplied function shapes the combinators invoke:
//!
//! | Shape              | Signature   | Used by                        |
//! |--------------------|-------------|--------------------------------|
//! | [`Predicate<V>`]   | `&V → bool` | `filter`, `is_some_and`, ...   |
//! | [`Transform<V,U>`] | `V → U`     | `map`, `and_then`, ...         |
//! | [`Generate<V>`]    | `() → V`    | `or_else`, `attempt`, ...      |
//! | [`Inspect<V>`]     | `&V → ()`   | `inspect`, `inspect_or_else`   |
//!
//! Each shape is a named alias for the matching `FnOnce` signature, so any
//! closure or function item of the right shape qualifies and closure
//! parameter types are still inferred at the call site:
//!
//! ```
//! use monoid_core::prelude::*;
//!
//! fn positive(value: &i64) -> bool {
//!     *value > 0
//! }
//!
//! assert!(Maybe::some(4_i64).is_some_and(positive));
//! assert!(Maybe::some(-4_i64).filter(positive).is_none());
//! assert_eq!(Maybe::some(4_i64).map(|x| x * 10).unwrap_or(0), 40);
//! ```
//!
//! A shape "raises" by returning `Err`: fallible steps are written as
//! `Transform<V, Result<U, E>>` or `Generate<Result<V, E>>`.
//!
//! Every combinator calls its function at most once, hence `FnOnce`.

/// A test on a borrowed value.
pub trait Predicate<V: ?Sized>: FnOnce(&V) -> bool {}

impl<V: ?Sized, F> Predicate<V> for F where F: FnOnce(&V) -> bool {}

/// Turns a `V` into a `U`.
pub trait Transform<V, U>: FnOnce(V) -> U {}

impl<V, U, F> Transform<V, U> for F where F: FnOnce(V) -> U {}

/// Produces a value from nothing.
pub trait Generate<V>: FnOnce() -> V {}

impl<V, F> Generate<V> for F where F: FnOnce() -> V {}

/// Observes a value for its side effect only.
pub trait Inspect<V: ?Sized>: FnOnce(&V) {}

impl<V: ?Sized, F> Inspect<V> for F where F: FnOnce(&V) {}
