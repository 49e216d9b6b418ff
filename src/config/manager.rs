use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Language used when neither the CLI nor the config file names one.
pub const DEFAULT_LANG: &str = "c";

/// The raw configuration file structure.
///
/// Corresponds to `~/.config/hw/config.toml`:
///
/// ```toml
/// default_lang = "rust"
///
/// [aliases]
/// rs = "rust"
/// zig = "zig"
/// ```
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Language emitted when no flag selects one.
    #[serde(default)]
    pub default_lang: Option<String>,
    /// Shortcut flags mapped to language identifiers, in file order.
    #[serde(default, deserialize_with = "ordered_aliases")]
    pub aliases: Vec<(String, String)>,
}

/// Reads the `[aliases]` table keeping document order.
///
/// Relies on the `preserve_order` feature of `toml`, which backs
/// `toml::Table` with an insertion-ordered map.
fn ordered_aliases<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let table = Option::<toml::Table>::deserialize(deserializer)?.unwrap_or_default();

    table
        .into_iter()
        .map(|(name, value)| match value {
            toml::Value::String(target) => Ok((name, target)),
            other => Err(serde::de::Error::custom(format!(
                "alias '{name}' must map to a string, found {}",
                other.type_str()
            ))),
        })
        .collect()
}

/// Normalized configuration used by the rest of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Always set; falls back to [`DEFAULT_LANG`].
    pub default_lang: String,
    /// Alias name and target language, in the order they were declared.
    pub aliases: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG.to_string(),
            aliases: Vec::new(),
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let default_lang = file
            .default_lang
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        let aliases = file
            .aliases
            .into_iter()
            .filter(|(_, target)| !target.trim().is_empty())
            .collect();

        Self {
            default_lang,
            aliases,
        }
    }
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/hw/config.toml`
    /// or `~/.config/hw/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_path()?,
        })
    }

    /// Creates a config manager reading from an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads and parses the config file.
    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Loads the configuration, falling back to defaults.
    ///
    /// A missing file yields the default silently. An unreadable or
    /// malformed file yields the default with a warning on stderr.
    pub fn load_config(&self) -> Config {
        // Runs before output::init, so only warn! is safe here
        if !self.config_path.exists() {
            return Config::default();
        }

        match self.load() {
            Ok(file) => Config::from(file),
            Err(err) => {
                crate::warn!(
                    "[hw] Warning: failed to read {}: {err:#}",
                    self.config_path.display()
                );
                Config::default()
            }
        }
    }
}
