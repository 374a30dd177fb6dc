//! Logging shims over the optional `tracing` feature.
//!
//! The deque core runs on targets without an allocator or a subscriber, so
//! every event goes through these macros. With the `tracing` feature disabled
//! they expand to nothing beyond evaluating their field expressions by
//! reference, which keeps variables "used" in both configurations.

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($field:ident = $value:expr),* ; $msg:literal) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($field = $value),*, $msg);
        }
        #[cfg(not(feature = "tracing"))]
        {
            $(let _ = &$value;)*
        }
    }};
}

/// Emits a `tracing::warn!` event when the `tracing` feature is enabled.
macro_rules! warn_event {
    ($($field:ident = $value:expr),* ; $msg:literal) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::warn!($($field = $value),*, $msg);
        }
        #[cfg(not(feature = "tracing"))]
        {
            $(let _ = &$value;)*
        }
    }};
}
