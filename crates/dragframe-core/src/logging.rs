#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature the macros are `tracing`'s own. Without it they
//! expand to nothing, so call sites never need their own `cfg` guards.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    // Distinct names: a bare `warn` re-export collides with the `#[warn]` attribute.
    macro_rules! noop_debug {
        ($($arg:tt)*) => {};
    }
    macro_rules! noop_trace {
        ($($arg:tt)*) => {};
    }
    macro_rules! noop_warn {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {noop_debug, noop_trace, noop_warn};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{noop_debug as debug, noop_trace as trace, noop_warn as warn};

#[cfg(test)]
mod tests {
    use super::{debug, trace, warn};

    #[test]
    fn macros_accept_structured_fields() {
        debug!(target: "dragframe::test", line = 3_usize, "debug event");
        trace!(target: "dragframe::test", value = 1.5, "trace event");
        warn!(target: "dragframe::test", line = 3_usize, error = %"bad json", "warn event");
    }
}
