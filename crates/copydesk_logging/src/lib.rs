#![deny(missing_docs)]
//! Shared logging utilities for the copydesk workspace.
//!
//! This crate provides the `copydesk_*` logging macros used across the codebase,
//! the logger configuration shared by the app and tests, and a minimal test
//! initializer for the global logger.

use simplelog::{Config, ConfigBuilder};

/// Target prefix of every copydesk crate. Records from other targets, such as
/// the HTTP stack or mock servers, are dropped by [`workspace_config`].
pub const TARGET_PREFIX: &str = "copydesk";

/// Logger configuration that keeps only copydesk records, with RFC 3339
/// timestamps and targets shown on errors.
pub fn workspace_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .add_filter_allow_str(TARGET_PREFIX)
        .build()
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! copydesk_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! copydesk_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! copydesk_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! copydesk_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! copydesk_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        workspace_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
