//! Template lookup: user files first, then the built-in table.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::builtin::get_builtin;

/// File extensions recognized for user templates, in lookup order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["tmpl", "txt"];

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Builtin,
    /// Read from a file in the user template directory.
    User(PathBuf),
}

/// A resolved template.
#[derive(Debug, Clone)]
pub struct Template {
    pub lang: String,
    pub text: String,
    pub source: TemplateSource,
}

/// Template-related errors.
#[derive(Debug)]
pub enum TemplateError {
    /// No user file and no built-in entry for the language.
    NotFound { lang: String },
    /// A user template exists but could not be read.
    Read { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { lang } => {
                write!(
                    f,
                    "Language '{lang}' not found\n\n\
                     Run 'hw --list' to see available languages."
                )
            }
            Self::Read { path, .. } => {
                write!(f, "Failed to read template: {}", path.display())
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Read { source, .. } => Some(source),
        }
    }
}

/// Returns true if `lang` can name a file inside the template directory.
///
/// Identifiers with path separators or dot-only names never match a user
/// file, so `--lang ../x` cannot read outside the directory.
fn is_plain_name(lang: &str) -> bool {
    !lang.is_empty()
        && lang != "."
        && lang != ".."
        && !lang.contains(['/', '\\'])
}

/// Finds the user template file for `lang`, trying each extension in order.
pub fn find_user_template(lang: &str, templates_dir: &Path) -> Option<PathBuf> {
    if !is_plain_name(lang) {
        return None;
    }

    TEMPLATE_EXTENSIONS
        .iter()
        .map(|ext| templates_dir.join(format!("{lang}.{ext}")))
        .find(|path| path.is_file())
}

/// Resolves the text to emit for `lang`.
///
/// User templates (`<lang>.tmpl`, then `<lang>.txt`) take precedence over
/// built-in templates of the same name.
pub fn resolve_template(lang: &str, templates_dir: &Path) -> Result<Template, TemplateError> {
    if let Some(path) = find_user_template(lang, templates_dir) {
        let text = fs::read_to_string(&path).map_err(|source| TemplateError::Read {
            path: path.clone(),
            source,
        })?;
        return Ok(Template {
            lang: lang.to_string(),
            text,
            source: TemplateSource::User(path),
        });
    }

    get_builtin(lang)
        .map(|builtin| Template {
            lang: lang.to_string(),
            text: builtin.text.to_string(),
            source: TemplateSource::Builtin,
        })
        .ok_or_else(|| TemplateError::NotFound {
            lang: lang.to_string(),
        })
}
