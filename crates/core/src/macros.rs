//! Logging shim.
//!
//! Library code logs through `trace_event!`, which forwards to
//! `tracing::trace!` when the `tracing` feature is on and compiles to nothing
//! otherwise. No subscriber is ever installed here.

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    }};
}

pub(crate) use trace_event;
