//! Trace logging used by the canonical-collection worklist and the driver.
//!
//! Mirrors the teacher's own `log`/`logn` pair (a "log a line" and a
//! "log a fragment, no newline yet" macro) but routes through the
//! `log` crate instead of bespoke globals, so a host binary controls
//! verbosity the usual way (`RUST_LOG=trace`, `env_logger::init()`).

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        log::trace!($($arg)*)
    };
}

#[macro_export]
macro_rules! logn {
    ($($arg:tt)*) => {
        log::trace!($($arg)*)
    };
}
