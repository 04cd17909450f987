//! # Logging Module
//!
//! This module provides logging utilities for the fix-copyrights tool,
//! including:
//! - Verbose logging that can be enabled/disabled
//! - Standard info logging with color support
//! - Structured diagnostics through `tracing`
//!
//! Verbose logs go to stderr and info logs go to stdout.
//!
//! ## Example
//!
//! ```rust
//! use fix_copyrights::logging::{ColorMode, set_verbose};
//! use fix_copyrights::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Processing file: {}", "src/main.cc");
//!
//! // Goes to stdout
//! info_log!("Header added to: {}", "src/main.cc");
//! ```

mod modes;

pub use modes::{ColorMode, default_directive, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// It uses the same format string syntax as the standard [`eprintln!`]
/// macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// It uses the same format string syntax as the standard [`println!`]
/// macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message in yellow when the stream supports color.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
