//! Flat directory listing.
//!
//! Both tools operate on the **immediate children** of a single directory:
//! no recursion, no nested-directory handling. Subdirectories (and anything
//! inside them) are ignored; only regular files are returned.
//!
//! Entries come back sorted by filename so both pipelines process — and
//! report — files in a stable order regardless of filesystem iteration
//! order.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// List the regular files that are immediate children of `dir`, sorted by
/// filename.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
    if !dir.is_dir() {
        return Err(WalkError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_immediate_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("c.txt"), "c").unwrap();

        let files = list_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn sorted_by_filename() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zebra.png"), "z").unwrap();
        fs::write(tmp.path().join("apple.png"), "a").unwrap();
        fs::write(tmp.path().join("mango.png"), "m").unwrap();

        let files = list_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["apple.png", "mango.png", "zebra.png"]);
    }

    #[test]
    fn empty_directory_is_empty_list() {
        let tmp = TempDir::new().unwrap();
        assert!(list_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let result = list_files(Path::new("/nonexistent/shoebox-test"));
        assert!(matches!(result, Err(WalkError::NotADirectory(_))));
    }

    #[test]
    fn file_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let result = list_files(&file);
        assert!(matches!(result, Err(WalkError::NotADirectory(_))));
    }
}
