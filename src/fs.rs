//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created next to the target so the rename stays on
/// the same filesystem.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).with_context(|| format!("Failed to write file: {}", path.display()));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("hello.c");

        atomic_write(&file_path, "puts(\"Hello, World!\");\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "puts(\"Hello, World!\");\n");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("hello.rs");

        fs::write(&file_path, "old").unwrap();
        atomic_write(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("hello.py");

        atomic_write(&file_path, "print()").unwrap();

        assert!(!temp_dir.path().join(".hello.py.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("hello.c");

        let err = atomic_write(&file_path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
