//! Catalog of available languages (built-in ∪ user templates).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::builtin::BUILTIN_TEMPLATES;
use super::resolver::TEMPLATE_EXTENSIONS;

/// One language in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub lang: String,
    /// A built-in template exists for this language.
    pub builtin: bool,
    /// A user template file exists for this language.
    pub user: bool,
}

impl CatalogEntry {
    /// A user template hides the built-in of the same name.
    pub const fn shadows_builtin(&self) -> bool {
        self.builtin && self.user
    }
}

/// Lists the identifiers of user template files in `templates_dir`.
///
/// A missing or unreadable directory yields an empty list.
pub fn user_template_langs(templates_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(templates_dir) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
        })
        .filter_map(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect()
}

/// Returns every available language, sorted ascending with no duplicates.
///
/// Aliases are not included.
pub fn available_languages(templates_dir: &Path) -> Vec<CatalogEntry> {
    let mut catalog: BTreeMap<String, CatalogEntry> = BTreeMap::new();

    for builtin in BUILTIN_TEMPLATES {
        catalog.insert(
            builtin.lang.to_string(),
            CatalogEntry {
                lang: builtin.lang.to_string(),
                builtin: true,
                user: false,
            },
        );
    }

    for lang in user_template_langs(templates_dir) {
        catalog
            .entry(lang.clone())
            .or_insert_with(|| CatalogEntry {
                lang,
                builtin: false,
                user: false,
            })
            .user = true;
    }

    catalog.into_values().collect()
}
