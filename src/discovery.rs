//! Recursive discovery of eligible log files

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default suffix a file name must end with to be counted
pub const DEFAULT_LOG_SUFFIX: &str = ".log";

/// Collect every regular file below `root` whose name ends with `suffix`.
///
/// Only an unreadable `root` is an error. Unreadable subdirectories, broken
/// links and symlink loops below it are skipped. The result is sorted so a
/// run over an unchanged tree always schedules the same list.
pub fn discover_log_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Cannot read directory '{}'", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("'{}' is not a directory", root.display());
    }
    fs::read_dir(root).with_context(|| format!("Cannot read directory '{}'", root.display()))?;

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_suffix(entry.path(), suffix))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discovers_nested_log_files_only() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.log"), "").unwrap();
        fs::write(nested.join("deep.log"), "").unwrap();
        fs::write(nested.join("notes.txt"), "").unwrap();
        fs::write(nested.join("rotated.log.1"), "").unwrap();
        fs::create_dir(dir.path().join("dir.log")).unwrap();

        let files = discover_log_files(dir.path(), DEFAULT_LOG_SUFFIX).unwrap();

        assert_eq!(
            files,
            vec![nested.join("deep.log"), dir.path().join("top.log")]
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let files = discover_log_files(dir.path(), DEFAULT_LOG_SUFFIX).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover_log_files(&missing, DEFAULT_LOG_SUFFIX).is_err());
    }

    #[test]
    fn test_file_root_is_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.log");
        fs::write(&file, "").unwrap();

        let err = discover_log_files(&file, DEFAULT_LOG_SUFFIX).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_custom_suffix() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.out"), "").unwrap();
        fs::write(dir.path().join("b.log"), "").unwrap();

        let files = discover_log_files(dir.path(), ".out").unwrap();
        assert_eq!(files, vec![dir.path().join("a.out")]);
    }
}
