//! Snippet emission command handler.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::output;
use crate::template::{Template, TemplateSource, is_builtin, resolve_template};

pub struct EmitOptions {
    /// Language picked by the selector.
    pub lang: String,
    pub templates_dir: PathBuf,
    /// Write here instead of stdout.
    pub out: Option<PathBuf>,
}

/// Resolves the template for `options.lang` and writes it out.
///
/// # Errors
///
/// Returns [`crate::template::TemplateError::NotFound`] when neither a user
/// template nor a built-in exists, and an I/O error if writing fails.
pub fn run_emit(options: &EmitOptions) -> Result<()> {
    let template = resolve_template(&options.lang, &options.templates_dir)?;
    report_source(&template);

    match &options.out {
        Some(path) => write_to_file(path, &template.text),
        None => write_to_stdout(&template.text),
    }
}

fn report_source(template: &Template) {
    match &template.source {
        TemplateSource::User(path) => {
            crate::verbose!("[hw] Using user template: {}", path.display());
            if is_builtin(&template.lang) {
                crate::verbose!(
                    "[hw] Note: user template overrides the built-in '{}' template",
                    template.lang
                );
            }
        }
        TemplateSource::Builtin => {
            crate::verbose!("[hw] Using built-in template for '{}'", template.lang);
        }
    }
}

fn write_to_file(path: &Path, text: &str) -> Result<()> {
    atomic_write(path, text)?;
    if !output::is_quiet() {
        println!("[hw] File written: {}", path.display());
    }
    Ok(())
}

fn write_to_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}
