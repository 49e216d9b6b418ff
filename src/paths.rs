//! XDG-style path utilities for configuration and user templates.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hw";

/// Returns the configuration directory for hw.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/hw` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/hw` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => Ok(PathBuf::from(xdg).join(APP_NAME)),
        Err(_) => Ok(home_dir()?.join(".config").join(APP_NAME)),
    }
}

/// Returns the data directory for hw.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/hw` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/hw` otherwise
pub fn data_dir() -> Result<PathBuf> {
    match std::env::var("XDG_DATA_HOME") {
        Ok(xdg) => Ok(PathBuf::from(xdg).join(APP_NAME)),
        Err(_) => Ok(home_dir()?.join(".local").join("share").join(APP_NAME)),
    }
}

/// Path of the settings file, `<config_dir>/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Directory holding user templates, `<data_dir>/templates`.
pub fn templates_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("templates"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
