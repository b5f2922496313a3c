//! Path resolution and file access.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when no explicit output path is given; written next to
/// the input Makefile.
pub const DEFAULT_OUTPUT_NAME: &str = "Makefile-commands.md";

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Read the whole input file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write `content` verbatim, overwriting any existing file.
pub fn save_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Default output path: a sibling of the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) => parent.join(DEFAULT_OUTPUT_NAME),
        None => PathBuf::from(DEFAULT_OUTPUT_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("/tmp/Makefile"), PathBuf::from("/tmp/Makefile"));
        assert_eq!(expand_path("Makefile"), PathBuf::from("Makefile"));
    }

    #[test]
    fn expand_path_resolves_tilde() {
        let expanded = expand_path("~/Makefile");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("/Makefile"));
    }

    #[test]
    fn default_output_is_a_sibling() {
        assert_eq!(
            default_output_path(Path::new("/repo/Makefile")),
            PathBuf::from("/repo/Makefile-commands.md")
        );
    }

    #[test]
    fn default_output_for_bare_file_name() {
        assert_eq!(
            default_output_path(Path::new("Makefile")),
            PathBuf::from("Makefile-commands.md")
        );
    }

    #[test]
    fn read_and_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        save_content(&path, "line1\nline2\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "line1\nline2\n");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        save_content(&path, "old").unwrap();
        save_content(&path, "new").unwrap();
        assert_eq!(read_source(&path).unwrap(), "new");
    }

    #[test]
    fn read_missing_file_names_the_path() {
        let err = read_source(Path::new("/no/such/Makefile")).unwrap_err();
        assert!(err.to_string().contains("/no/such/Makefile"));
    }
}
