//! Global output configuration and utilities.
//!
//! This module provides centralized control over CLI output behavior,
//! including quiet and verbose modes, color support, and stderr routing.
//!
//! ## Design Principles
//!
//! - Snippets and listings go to stdout (for piping)
//! - Diagnostics go to stderr
//! - Warnings always go to stderr, even in quiet mode
//! - Colors can be disabled via flag or NO_COLOR environment variable

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Print diagnostics about how the snippet was resolved.
    pub verbose: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if verbose mode is enabled. Quiet mode wins over verbose.
pub fn is_verbose() -> bool {
    let config = config();
    config.verbose && !config.quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a diagnostic message to stderr (only with `--verbose`).
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::output::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
