//! Alias shortcut flags built from the configuration.
//!
//! Each configured alias becomes a boolean `--<alias>` flag (plus `-<alias>`
//! for single-character names). The flags are plain data appended to the
//! clap `Command`, so the schema depends only on the loaded config.
//!
//! `-c` and `--cpp` are always available. A config alias with the same name
//! replaces their target.

use clap::{Arg, ArgAction, Command};
use std::fmt::Write as _;
use std::path::Path;

use crate::config::Config;

/// A configured alias exposed as a command-line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasFlag {
    /// Alias name, also the long flag name.
    pub name: String,
    /// Language identifier the alias stands for.
    pub target: String,
    /// Short flag for single-character aliases.
    pub short: Option<char>,
}

impl AliasFlag {
    /// Argument id inside clap, kept apart from the static argument ids.
    pub fn id(&self) -> String {
        format!("alias:{}", self.name)
    }
}

/// Shortcuts available without any config, appended after config aliases.
pub const BUILTIN_SHORTCUTS: &[(&str, &str)] = &[("c", "c"), ("cpp", "cpp")];

/// Returns `config` with [`BUILTIN_SHORTCUTS`] appended to its aliases.
///
/// A config alias named like a shortcut keeps its own target and position.
pub fn with_builtin_shortcuts(mut config: Config) -> Config {
    for (name, target) in BUILTIN_SHORTCUTS {
        if !config.aliases.iter().any(|(alias, _)| alias == name) {
            config
                .aliases
                .push(((*name).to_string(), (*target).to_string()));
        }
    }
    config
}

fn is_valid_flag_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Builds the alias flag list for `base`, in config order.
///
/// Aliases that are not valid flag names or that collide with a built-in
/// flag are skipped with a warning. A single-character alias whose letter
/// is already taken keeps its long flag only.
pub fn alias_flags(config: &Config, base: &Command) -> Vec<AliasFlag> {
    let mut reserved_longs: Vec<&str> = base.get_arguments().filter_map(Arg::get_long).collect();
    reserved_longs.extend(["help", "version"]);
    let mut reserved_shorts: Vec<char> =
        base.get_arguments().filter_map(Arg::get_short).collect();
    reserved_shorts.extend(['h', 'V']);

    let mut flags = Vec::with_capacity(config.aliases.len());
    for (name, target) in &config.aliases {
        if !is_valid_flag_name(name) {
            crate::warn!("[hw] Warning: ignoring alias '{name}': not a valid flag name");
            continue;
        }
        if reserved_longs.contains(&name.as_str()) {
            crate::warn!("[hw] Warning: ignoring alias '{name}': conflicts with --{name}");
            continue;
        }

        let mut chars = name.chars();
        let short = match (chars.next(), chars.next()) {
            (Some(c), None) if !reserved_shorts.contains(&c) => Some(c),
            _ => None,
        };

        flags.push(AliasFlag {
            name: name.clone(),
            target: target.clone(),
            short,
        });
    }
    flags
}

/// Appends the alias flags and the help footer to `base`.
///
/// Repeating a flag is accepted; the last value wins.
pub fn build_command(base: Command, flags: &[AliasFlag], footer: String) -> Command {
    flags
        .iter()
        .fold(base.after_help(footer).args_override_self(true), |command, flag| {
            let mut arg = Arg::new(flag.id())
                .long(flag.name.clone())
                .action(ArgAction::SetTrue)
                .help(format!("Shortcut for --lang {}", flag.target))
                .hide(true);
            if let Some(short) = flag.short {
                arg = arg.short(short);
            }
            command.arg(arg)
        })
}

/// Text shown after `--help`: alias shortcuts and file locations.
pub fn help_footer(flags: &[AliasFlag], config_path: &Path, templates_dir: Option<&Path>) -> String {
    let mut footer = String::from("Aliases:\n");
    if flags.is_empty() {
        footer.push_str("  (no aliases configured)\n");
    }
    for flag in flags {
        let short = flag
            .short
            .map(|c| format!(" (or -{c})"))
            .unwrap_or_default();
        let _ = writeln!(footer, "  --{}{short} -> {}", flag.name, flag.target);
    }

    let _ = writeln!(footer, "\nConfig:    {}", config_path.display());
    match templates_dir {
        Some(dir) => {
            let _ = write!(footer, "Templates: {}", dir.join("<lang>.tmpl").display());
        }
        None => footer.push_str("Templates: (unavailable)"),
    }
    footer
}
