//! `bslint`: a single-pass BrightScript scanner with an inline style-rule engine.
//!
//! [`lex`] scans one source string with the built-in defaults. For configured
//! linting build a [`linter::Linter`] from a [`config::Config`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lexer;
pub mod linter;
pub mod messages;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod spelling;

use std::sync::Once;

pub use error::{BslintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Scan `source` with every rule at its default setting.
#[must_use]
pub fn lex(source: &str) -> lexer::ScanResult {
    linter::Linter::with_defaults().lint(source)
}

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber. Safe to call multiple times.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level
/// (0 warn, 1 debug, 2+ trace).
pub fn init_tracing(verbose: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

const fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
