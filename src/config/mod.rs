//! Configuration file loading.

mod manager;

pub use manager::{Config, ConfigFile, ConfigManager, DEFAULT_LANG};
