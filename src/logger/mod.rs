//! Structured logging for burnscreen
//!
//! Tag-based logging with standard levels (Error/Warning/Info/Debug/Verbose).
//! Debug output is enabled per tag with `--debug <tag>`; `--verbose` enables
//! everything and `--quiet` keeps only warnings and errors.
//!
//! ```rust
//! use burnscreen::logger::{self, LogTag};
//!
//! logger::info(LogTag::Security, "LP is 100% burned");
//! logger::debug(LogTag::Rpc, "getAccountInfo ..."); // Only with --debug rpc
//! ```
//!
//! Decoders and calculators never log; only checks, RPC and reporting do.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Install the logger configuration. Call once at startup.
pub fn init(config: LoggerConfig) {
    if config.plain {
        colored::control::set_override(false);
    }
    set_logger_config(config);
}

/// Always shown
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Only shown when debug is enabled for `tag`
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Only shown with --verbose
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
