//! Tracing support for graph mutations and traversals.
//!
//! This module provides tracing functionality when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub use tracing::Level;

    /// Installs a `fmt` subscriber writing events at `level` and above.  Only
    /// the first call in a process has any effect, and an already-installed
    /// global subscriber is left alone.
    pub fn init_tracing(level: Level) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_test_writer()
                .try_init();
        });
    }

    // Re-export tracing macros for convenience
    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Stand-in for `tracing::Level` so callers compile without the feature.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct Level;

    impl Level {
        pub const TRACE: Level = Level;
        pub const DEBUG: Level = Level;
        pub const INFO: Level = Level;
        pub const WARN: Level = Level;
        pub const ERROR: Level = Level;
    }

    pub fn init_tracing(_level: Level) {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($fields:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($fields:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
