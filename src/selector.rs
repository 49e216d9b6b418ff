//! Language selection for a single invocation.
//!
//! Priority order (highest to lowest):
//! 1. Explicit `--lang`
//! 2. Alias flags, first match in config order
//! 3. `default_lang` from the config file (or `"c"`)

use std::collections::HashSet;

use crate::config::Config;

/// What the caller asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct LangRequest {
    /// Language passed with `--lang`, taken verbatim.
    pub lang: Option<String>,
    /// Names of the alias flags that were set.
    pub alias_flags: HashSet<String>,
}

impl LangRequest {
    /// Returns true if the flag for `alias` was given.
    pub fn is_alias_set(&self, alias: &str) -> bool {
        self.alias_flags.contains(alias)
    }
}

/// Picks the language identifier for this invocation.
///
/// An explicit language is returned unchecked; unknown identifiers are
/// reported later by the template resolver. When several alias flags are
/// set, the alias declared first in the config wins.
pub fn resolve_lang(request: &LangRequest, config: &Config) -> String {
    if let Some(lang) = &request.lang {
        return lang.clone();
    }

    config
        .aliases
        .iter()
        .find(|(alias, _)| request.is_alias_set(alias))
        .map_or_else(
            || config.default_lang.clone(),
            |(_, target)| target.clone(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_aliases(pairs: &[(&str, &str)]) -> Config {
        Config {
            default_lang: "python".to_string(),
            aliases: pairs
                .iter()
                .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
                .collect(),
        }
    }

    fn request(lang: Option<&str>, flags: &[&str]) -> LangRequest {
        LangRequest {
            lang: lang.map(str::to_string),
            alias_flags: flags.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    #[test]
    fn test_explicit_lang_wins() {
        let config = config_with_aliases(&[("rs", "rust")]);

        let lang = resolve_lang(&request(Some("cpp"), &["rs"]), &config);

        assert_eq!(lang, "cpp");
    }

    #[test]
    fn test_explicit_lang_is_not_alias_expanded() {
        let config = config_with_aliases(&[("rs", "rust")]);

        assert_eq!(resolve_lang(&request(Some("rs"), &[]), &config), "rs");
    }

    #[test]
    fn test_explicit_unknown_lang_returned_verbatim() {
        let config = Config::default();

        assert_eq!(resolve_lang(&request(Some("cobol"), &[]), &config), "cobol");
    }

    #[test]
    fn test_single_alias_flag() {
        let config = config_with_aliases(&[("rs", "rust"), ("zig", "zig")]);

        assert_eq!(resolve_lang(&request(None, &["zig"]), &config), "zig");
        assert_eq!(resolve_lang(&request(None, &["rs"]), &config), "rust");
    }

    #[test]
    fn test_first_alias_in_config_order_wins() {
        let config = config_with_aliases(&[("zz", "zig"), ("aa", "ada")]);

        // Flag set order does not matter, config order does
        assert_eq!(resolve_lang(&request(None, &["aa", "zz"]), &config), "zig");
    }

    #[test]
    fn test_unknown_flag_name_ignored() {
        let config = config_with_aliases(&[("rs", "rust")]);

        assert_eq!(resolve_lang(&request(None, &["nope"]), &config), "python");
    }

    #[test]
    fn test_default_lang_when_nothing_set() {
        let config = config_with_aliases(&[("rs", "rust")]);

        assert_eq!(resolve_lang(&LangRequest::default(), &config), "python");
        assert_eq!(resolve_lang(&LangRequest::default(), &Config::default()), "c");
    }
}
