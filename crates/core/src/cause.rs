//! # Failure Causes
//!
//! A [`Cause`] is the error held by a failing [`Outcome`](crate::Outcome).
//! Any `std::error::Error + Send + Sync + 'static` converts into one, so
//! callers keep their own error types and recover them later with
//! [`Cause::downcast_ref`].
//!
//! Causes are reference counted: cloning an outcome never clones the
//! underlying error, and `Cause::ptr_eq` tells whether two outcomes carry the
//! *same* failure rather than merely equal-looking ones.
//!
//! `Cause` does not implement `std::error::Error` itself; it dereferences to
//! `dyn Error` instead, so the blanket `From<E: Error>` conversion stays
//! coherent.

use std::error::Error;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, type-erased failure.
#[derive(Clone)]
pub struct Cause {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Cause {
    /// Wrap an error.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// A cause that carries only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Take over an already boxed error without re-wrapping it.
    pub fn from_boxed(boxed: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(boxed),
        }
    }

    /// Borrow the underlying error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Is the underlying error an `E`?
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }

    /// Borrow the underlying error as an `E`, if it is one.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Whether both causes share the same allocation.
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Iterate the error and its `source()` chain, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        let first: &(dyn Error + 'static) = self.as_error();
        Chain { next: Some(first) }
    }

    /// The innermost error in the chain.
    pub fn root(&self) -> &(dyn Error + 'static) {
        let mut current: &(dyn Error + 'static) = self.as_error();
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Deref for Cause {
    type Target = dyn Error + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

/// Iterator returned by [`Cause::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Message-only error behind [`Cause::msg`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
struct Message(String);
