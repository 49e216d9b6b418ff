//! Turns the process arguments into a resolved invocation.
//!
//! The config file is loaded before clap runs, because the alias flags it
//! defines are part of the argument schema.

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

use super::alias::{alias_flags, build_command, help_footer, with_builtin_shortcuts};
use super::args::Args;
use crate::config::{Config, ConfigManager};
use crate::paths;
use crate::selector::LangRequest;

/// Everything needed to run one command.
#[derive(Debug)]
pub struct Invocation {
    pub args: Args,
    pub config: Config,
    pub request: LangRequest,
    pub templates_dir: PathBuf,
}

impl Invocation {
    /// Parses the process arguments.
    ///
    /// Exits the process on `--help`, `--version` and usage errors, the
    /// same way `Parser::parse` does.
    pub fn parse() -> Result<Self> {
        Self::try_parse_from(std::env::args_os()).map_err(|err| {
            match err.downcast::<clap::Error>() {
                Ok(clap_err) => clap_err.exit(),
                Err(err) => err,
            }
        })
    }

    /// Parses `argv` (including the program name).
    ///
    /// Clap errors, including help and version requests, are returned as
    /// [`clap::Error`] inside the `anyhow::Error`.
    pub fn try_parse_from<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        let manager = match early_option(&argv, "--config") {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new()?,
        };
        let config = with_builtin_shortcuts(manager.load_config());

        let default_templates_dir = paths::templates_dir();
        let footer_templates_dir = early_option(&argv, "--templates-dir")
            .or_else(|| default_templates_dir.as_ref().ok().cloned());

        let base = Args::command();
        let flags = alias_flags(&config, &base);
        let footer = help_footer(&flags, manager.config_path(), footer_templates_dir.as_deref());
        let matches = build_command(base, &flags, footer).try_get_matches_from(&argv)?;

        let args = Args::from_arg_matches(&matches)?;
        let request = LangRequest {
            lang: args.lang.clone(),
            alias_flags: flags
                .iter()
                .filter(|flag| matches.get_flag(&flag.id()))
                .map(|flag| flag.name.clone())
                .collect(),
        };
        let templates_dir = match &args.templates_dir {
            Some(dir) => dir.clone(),
            None => default_templates_dir?,
        };

        Ok(Self {
            args,
            config,
            request,
            templates_dir,
        })
    }
}

/// Finds the value of a path option before clap parses the full schema.
///
/// Accepts `--name value` and `--name=value`. Scanning stops at `--`.
fn early_option(argv: &[OsString], long: &str) -> Option<PathBuf> {
    let mut iter = argv.iter().skip(1);
    while let Some(arg) = iter.next() {
        let Some(arg) = arg.to_str() else {
            continue;
        };
        if arg == "--" {
            break;
        }
        if arg == long {
            return iter.next().map(PathBuf::from);
        }
        if let Some(value) = arg.strip_prefix(long).and_then(|rest| rest.strip_prefix('=')) {
            return Some(PathBuf::from(value));
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    struct Env {
        dir: TempDir,
    }

    impl Env {
        fn new(config: &str) -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("config.toml"), config).unwrap();
            fs::create_dir(dir.path().join("templates")).unwrap();
            Self { dir }
        }

        fn parse(&self, extra: &[&str]) -> Result<Invocation> {
            let config = self.dir.path().join("config.toml");
            let templates = self.dir.path().join("templates");
            let mut argv = vec![
                "hw".to_string(),
                "--config".to_string(),
                config.display().to_string(),
                format!("--templates-dir={}", templates.display()),
            ];
            argv.extend(extra.iter().map(|s| (*s).to_string()));
            Invocation::try_parse_from(argv)
        }
    }

    #[test]
    fn test_early_option_separate_value() {
        let argv = os_args(&["hw", "--zig", "--config", "/tmp/c.toml"]);
        assert_eq!(
            early_option(&argv, "--config"),
            Some(PathBuf::from("/tmp/c.toml"))
        );
    }

    #[test]
    fn test_early_option_equals_value() {
        let argv = os_args(&["hw", "--templates-dir=/tmp/t"]);
        assert_eq!(
            early_option(&argv, "--templates-dir"),
            Some(PathBuf::from("/tmp/t"))
        );
    }

    #[test]
    fn test_early_option_stops_at_double_dash() {
        let argv = os_args(&["hw", "--", "--config", "x"]);
        assert_eq!(early_option(&argv, "--config"), None);
    }

    #[test]
    fn test_early_option_ignores_prefix_match() {
        let argv = os_args(&["hw", "--configure", "x"]);
        assert_eq!(early_option(&argv, "--config"), None);
    }

    #[test]
    fn test_parse_alias_flag_from_config() {
        let env = Env::new("[aliases]\nzig = \"zig\"\nrs = \"rust\"\n");

        let invocation = env.parse(&["--rs"]).unwrap();

        assert!(invocation.request.is_alias_set("rs"));
        assert!(!invocation.request.is_alias_set("zig"));
        assert_eq!(invocation.request.lang, None);
        assert_eq!(invocation.templates_dir, env.dir.path().join("templates"));
    }

    #[test]
    fn test_parse_explicit_lang() {
        let env = Env::new("");

        let invocation = env.parse(&["-l", "rust", "--out", "hello.rs"]).unwrap();

        assert_eq!(invocation.request.lang.as_deref(), Some("rust"));
        assert_eq!(invocation.args.out, Some(PathBuf::from("hello.rs")));
        assert_eq!(invocation.config.default_lang, "c");
    }

    #[test]
    fn test_parse_builtin_shortcut_without_config() {
        let env = Env::new("");

        let invocation = env.parse(&["--cpp"]).unwrap();

        assert!(invocation.request.is_alias_set("cpp"));
        assert_eq!(
            invocation.config.aliases,
            vec![
                ("c".to_string(), "c".to_string()),
                ("cpp".to_string(), "cpp".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_repeated_flags_are_accepted() {
        let env = Env::new("[aliases]\nrs = \"rust\"\n");

        let invocation = env.parse(&["--rs", "--rs", "--list", "--list"]).unwrap();

        assert!(invocation.request.is_alias_set("rs"));
        assert!(invocation.args.list);
    }

    #[test]
    fn test_parse_unknown_alias_flag_is_usage_error() {
        let env = Env::new("");

        let err = env.parse(&["--zig"]).unwrap_err();

        assert!(err.downcast_ref::<clap::Error>().is_some());
    }

    #[test]
    fn test_parse_help_is_clap_error() {
        let env = Env::new("[aliases]\nzig = \"zig\"\n");

        let err = env.parse(&["--help"]).unwrap_err();
        let clap_err = err.downcast_ref::<clap::Error>().unwrap();

        assert_eq!(clap_err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(clap_err.to_string().contains("--zig -> zig"));
    }
}
