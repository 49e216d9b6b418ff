//! Language listing command handler.

use std::path::Path;

use crate::template::{CatalogEntry, available_languages};
use crate::ui::Style;

fn origin_marker(entry: &CatalogEntry) -> Option<&'static str> {
    if entry.shadows_builtin() {
        Some("(user template, overrides built-in)")
    } else if entry.user {
        Some("(user template)")
    } else {
        None
    }
}

/// Prints the available languages to stdout, sorted by name.
pub fn print_languages(templates_dir: &Path) {
    println!("{}", Style::header("Available languages:"));
    for entry in available_languages(templates_dir) {
        match origin_marker(&entry) {
            Some(marker) => println!(
                " - {} {}",
                Style::value(&entry.lang),
                Style::secondary(marker)
            ),
            None => println!(" - {}", Style::value(&entry.lang)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(builtin: bool, user: bool) -> CatalogEntry {
        CatalogEntry {
            lang: "x".to_string(),
            builtin,
            user,
        }
    }

    #[test]
    fn test_origin_marker() {
        assert_eq!(origin_marker(&entry(true, false)), None);
        assert_eq!(origin_marker(&entry(false, true)), Some("(user template)"));
        assert_eq!(
            origin_marker(&entry(true, true)),
            Some("(user template, overrides built-in)")
        );
    }
}
