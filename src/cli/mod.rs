//! Command-line interface definitions and handlers.

/// Alias shortcut flags derived from the config file.
pub mod alias;

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

/// Config-aware argument parsing.
pub mod invocation;

pub use alias::AliasFlag;
pub use args::Args;
pub use invocation::Invocation;
