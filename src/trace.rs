//! Opt-in diagnostic output.
//!
//! Tracing is off by default. When enabled (see [`set_enabled`]) the classifier and
//! the session report what they matched on standard error, leaving standard output
//! to the actions themselves.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global toggle to enable or disable tracing.
pub static ENABLE_TRACE: AtomicBool = AtomicBool::new(false);

/// Turn trace output on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLE_TRACE.store(enabled, Ordering::Relaxed);
}

/// Whether trace output is currently on.
pub fn is_enabled() -> bool {
    ENABLE_TRACE.load(Ordering::Relaxed)
}

/// Write one trace line to stderr if tracing is enabled.
#[macro_export]
macro_rules! trace_log {
    ($($tt:tt)*) => {
        if $crate::trace::is_enabled() {
            eprintln!("[trace] {}", format!($($tt)*));
        }
    };
}
