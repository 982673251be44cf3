//! # Error Types
//!
//! Unwrapping is the only place this crate reports an error of its own.
//! Everything else is a value: an absent [`Maybe`](crate::Maybe) or a failing
//! [`Outcome`](crate::Outcome).
//!
//! The taxonomy is deliberately flat:
//!
//! ```text
//! UnwrapError
//! ├── None   unwrapped an absent option (no cause)
//! └── Fail   unwrapped a failing outcome (always chains the cause)
//! ```
//!
//! [`Rejected`] is not an unwrap error; it is the cause recorded when a
//! passing outcome is filtered out.

use std::borrow::Cow;

use thiserror::Error;

use crate::cause::Cause;

const NONE_MESSAGE: &str = "Attempted to unwrap a `None` option.";
const FAIL_MESSAGE: &str = "Attempted to unwrap an error.";

/// Raised when a container is unwrapped but holds no value.
#[derive(Debug, Error, Clone)]
pub enum UnwrapError {
    /// The option was absent. There is nothing underneath.
    #[error("{message}")]
    None { message: Cow<'static, str> },

    /// The outcome was failing. The original cause is reachable through
    /// [`std::error::Error::source`].
    #[error("{message}")]
    Fail {
        message: Cow<'static, str>,
        #[source]
        cause: Cause,
    },
}

impl UnwrapError {
    /// Absent-value error with the default message.
    pub fn none() -> Self {
        UnwrapError::None {
            message: Cow::Borrowed(NONE_MESSAGE),
        }
    }

    /// Absent-value error with a custom message.
    pub fn none_with(message: impl Into<Cow<'static, str>>) -> Self {
        UnwrapError::None {
            message: message.into(),
        }
    }

    /// Failure-unwrap error with the default message.
    pub fn fail(cause: impl Into<Cause>) -> Self {
        UnwrapError::Fail {
            message: Cow::Borrowed(FAIL_MESSAGE),
            cause: cause.into(),
        }
    }

    /// Failure-unwrap error with a custom message.
    pub fn fail_with(message: impl Into<Cow<'static, str>>, cause: impl Into<Cause>) -> Self {
        UnwrapError::Fail {
            message: message.into(),
            cause: cause.into(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, UnwrapError::None { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, UnwrapError::Fail { .. })
    }

    /// The chained cause of a `Fail`.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            UnwrapError::None { .. } => None,
            UnwrapError::Fail { cause, .. } => Some(cause),
        }
    }

    /// The human-readable message, without the cause.
    pub fn message(&self) -> &str {
        match self {
            UnwrapError::None { message } | UnwrapError::Fail { message, .. } => message,
        }
    }

    /// Take the chained cause of a `Fail`.
    pub fn into_cause(self) -> Option<Cause> {
        match self {
            UnwrapError::None { .. } => None,
            UnwrapError::Fail { cause, .. } => Some(cause),
        }
    }
}

/// A passing value was rejected by a filter predicate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("Value rejected by filter predicate.")]
pub struct Rejected;
