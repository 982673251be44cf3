//! # Monoid Core - Optional and Fallible Values
//!
//! This crate provides two containers and the algebra over them:
//!
//! - **Maybe**: a value that may be absent (`Present` / `Absent`)
//! - **Outcome**: a computation that may have failed (`Passing` / `Failing`)
//! - **Unwrap**: the shared contract for getting a value back out
//! - **Function shapes**: the predicate/transform/generate/inspect signatures
//!   the combinators accept
//! - **Errors**: `UnwrapError` for empty unwraps, `Cause` for failure payloads
//!
//! ## Design Philosophy
//!
//! Absence and failure are values. A pipeline is written once, as a chain of
//! combinators, and checked for presence or success only at the very end:
//!
//! ```
//! use monoid_core::prelude::*;
//!
//! let doubled = Maybe::from(Some(7)).map(|x| x * 2);
//! assert_eq!(doubled.unwrap().ok(), Some(14));
//!
//! let checked = Outcome::pass(10).and_then(|x| {
//!     if x > 5 {
//!         Outcome::pass(x)
//!     } else {
//!         Outcome::fail(Cause::msg("too small"))
//!     }
//! });
//! assert_eq!(checked.unwrap().ok(), Some(10));
//! ```
//!
//! The combinators obey the usual laws (identity for `map`, associativity
//! for `and_then`, idempotence for `or`); `tests/laws.rs` checks them.
//!
//! ## Cargo Features
//!
//! - `tracing` (default): emit `trace`-level events through the `tracing`
//!   facade when a failure is captured, a value is filtered out, or an
//!   unwrap fails.

mod macros;

pub mod cause;
pub mod error;
pub mod func;
pub mod maybe;
pub mod outcome;
pub mod unwrap;

// Re-export key types at crate root for convenience
pub use cause::Cause;
pub use error::{Rejected, UnwrapError};
pub use func::{Generate, Inspect, Predicate, Transform};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use unwrap::{Unwrap, Unwrapped};

/// Everything needed to build and consume containers, including the
/// [`Unwrap`] trait so `.unwrap()` resolves.
pub mod prelude {
    pub use crate::cause::Cause;
    pub use crate::error::{Rejected, UnwrapError};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::unwrap::Unwrap;
}
