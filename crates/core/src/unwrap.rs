//! # The Unwrap Contract
//!
//! Both containers end the same way: the caller finally wants the value out.
//! [`Unwrap`] is that shared exit.
//!
//! | Method              | No value held                            |
//! |---------------------|------------------------------------------|
//! | `unwrap`            | `Err(UnwrapError)`                       |
//! | `unwrap_or`         | the fallback                             |
//! | `unwrap_or_else`    | the generated fallback                   |
//! | `unwrap_or_default` | `Default::default()`                     |
//! | `unwrap_unsafe`     | the raw pair with its error side filled  |
//!
//! Only `unwrap` can fail. The generator of `unwrap_or_else` runs only when
//! there is nothing to return.

use crate::error::UnwrapError;
use crate::func::Generate;

/// Extract the contents of a container.
pub trait Unwrap: Sized {
    /// The value a container holds when it holds one.
    type Value;

    /// What the raw pair reports when there is no value.
    type Error;

    /// The held value, or the error explaining why there is none.
    fn unwrap(self) -> Result<Self::Value, UnwrapError>;

    /// The held value, or `fallback`. Never fails.
    fn unwrap_or(self, fallback: Self::Value) -> Self::Value;

    /// The held value, or whatever `generator` produces.
    fn unwrap_or_else<G>(self, generator: G) -> Self::Value
    where
        G: Generate<Self::Value>;

    /// Both sides of the container at once, without signalling anything.
    fn unwrap_unsafe(self) -> Unwrapped<Self::Value, Self::Error>;

    fn unwrap_or_default(self) -> Self::Value
    where
        Self::Value: Default,
    {
        self.unwrap_or_else(<Self::Value as Default>::default)
    }
}

/// The raw pair returned by [`Unwrap::unwrap_unsafe`].
///
/// Exactly one side is set. The constructors are the only way to build one,
/// so a pair with both or neither side cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwrapped<V, E> {
    value: Option<V>,
    error: Option<E>,
}

impl<V, E> Unwrapped<V, E> {
    /// A pair holding a value.
    pub fn from_value(value: V) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// A pair holding an error.
    pub fn from_error(error: E) -> Self {
        Self {
            value: None,
            error: Some(error),
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    pub fn is_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }

    pub fn into_error(self) -> Option<E> {
        self.error
    }

    /// Split into `(value, error)`.
    pub fn into_parts(self) -> (Option<V>, Option<E>) {
        (self.value, self.error)
    }

    /// Back into a `Result`, value side first.
    pub fn into_result(self) -> Result<V, E> {
        match (self.value, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(error)) => Err(error),
            (None, None) => unreachable!("raw pair holds exactly one side"),
        }
    }
}
