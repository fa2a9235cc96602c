#![deny(missing_docs)]
//! Shared logging utilities for the rewriter workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a per-thread "current item" context that the macros prefix onto every
//! message, and a minimal test initializer for the global logger.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the batch item currently being processed.
    static CURRENT_ITEM: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Sets the batch item id for the current thread.
/// Pass `None` once the item has finished.
pub fn set_current_item(item: Option<u64>) {
    CURRENT_ITEM.with(|v| v.set(item));
}

/// Retrieves the batch item id for the current thread, if one is active.
pub fn current_item() -> Option<u64> {
    CURRENT_ITEM.with(|v| v.get())
}

/// Marks `item` as current until the returned guard is dropped.
///
/// The previous value is restored on drop, so scopes may nest.
pub fn item_scope(item: u64) -> ItemScope {
    let previous = current_item();
    set_current_item(Some(item));
    ItemScope { previous }
}

/// Guard returned by [`item_scope`].
#[must_use = "the item context is cleared as soon as the guard is dropped"]
pub struct ItemScope {
    previous: Option<u64>,
}

impl Drop for ItemScope {
    fn drop(&mut self) {
        set_current_item(self.previous);
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __engine_log {
    ($level:ident, $($arg:tt)*) => {{
        match $crate::current_item() {
            Some(item) => $crate::log::$level!("[item {}] {}", item, format_args!($($arg)*)),
            None => $crate::log::$level!($($arg)*),
        }
    }};
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        $crate::__engine_log!(trace, $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        $crate::__engine_log!(info, $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        $crate::__engine_log!(debug, $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::__engine_log!(warn, $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        $crate::__engine_log!(error, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
