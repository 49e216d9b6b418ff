//! # hw - Hello, World! snippets
//!
//! `hw` prints a "Hello, World!" program in the language you ask for.
//! Snippets come from user template files or from a small built-in table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Default language (from config, or C)
//! hw
//!
//! # Pick a language
//! hw --lang rust
//!
//! # Use an alias defined in the config file
//! hw --zig
//!
//! # See what is available
//! hw --list
//!
//! # Save instead of printing
//! hw --lang python --out hello.py
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/hw/config.toml`:
//!
//! ```toml
//! default_lang = "rust"
//!
//! [aliases]
//! rs = "rust"
//! zig = "zig"
//! ```
//!
//! User templates live in `~/.local/share/hw/templates/<lang>.tmpl`
//! (or `<lang>.txt`) and take precedence over built-in snippets.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet, verbose, colors).
pub mod output;

/// XDG-style path utilities for configuration and templates.
pub mod paths;

/// Language selection from flags, aliases and defaults.
pub mod selector;

/// Built-in templates, user templates and the language catalog.
pub mod template;

/// Terminal styling.
pub mod ui;
