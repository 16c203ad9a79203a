//! Conditional tracing support
//!
//! With the `tracing` feature disabled these macros expand to nothing and
//! the compiler eliminates them.

/// Enter a tracing span for an extraction stage.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("extract_stage", stage = $name).entered();
    };
}

/// Emit a `debug` level event.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Emit a `warn` level event.
macro_rules! warn_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}
