// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics for the mediafs workspace
//!
//! A thin layer over `emit` so every crate logs the same way.
//!
//! Usage:
//! - Set MEDIAFS_LOG=off (default) - no logs
//! - Set MEDIAFS_LOG=info - mount setup and directory creation
//! - Set MEDIAFS_LOG=debug - per-component mkdir, stat and resolution details

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`]
pub const LOG_ENV: &str = "MEDIAFS_LOG";

static INIT: Once = Once::new();

/// Map a MEDIAFS_LOG value to a minimum level. `None` means logging is off.
fn parse_level(value: &str) -> Result<Option<emit::Level>, ()> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "info" => Ok(Some(emit::Level::Info)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        _ => Err(()),
    }
}

/// Initialize diagnostics based on the MEDIAFS_LOG environment variable
///
/// Call once at startup. Later calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let value = std::env::var(LOG_ENV).unwrap_or_default();

        let level = match parse_level(&value) {
            Ok(Some(level)) => level,
            Ok(None) => return,
            Err(()) => {
                // Bootstrap warning, the emitter is not running yet
                eprintln!("Warning: Unknown {LOG_ENV} value '{value}', using 'info'");
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The runtime lives for the whole process.
        std::mem::forget(rt);
    });
}

/// Log mount setup, configuration and filesystem mutations
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log per-entry details: path components, stat results, format choices
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log refused mounts, fallbacks and recoverable problems
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop the current operation
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;
