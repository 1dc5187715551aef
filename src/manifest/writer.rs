//! Target file reading and writing
//!
//! This module provides:
//! - Typed read/write helpers that keep the failing path in the error
//! - `StagedFile` for computing a new file body before deciding to write it
//! - Dry-run support (no actual file modifications)

use crate::error::FileError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file whose new content has been computed but not necessarily written
#[derive(Debug, Clone)]
pub struct StagedFile {
    /// Path to the target file
    pub path: PathBuf,
    /// Content as read from disk
    pub original: String,
    /// Content after all patches
    pub updated: String,
}

impl StagedFile {
    /// Read `path` and stage it with no changes
    pub fn read(path: &Path) -> Result<Self, FileError> {
        let original = read_target(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            updated: original.clone(),
            original,
        })
    }

    /// Returns true if the staged content differs from disk
    pub fn is_modified(&self) -> bool {
        self.original != self.updated
    }

    /// Write the staged content unless unchanged or in dry-run mode.
    /// Returns whether the file on disk was rewritten.
    pub fn commit(&self, dry_run: bool) -> Result<bool, FileError> {
        if !self.is_modified() {
            debug!("{} already up to date", self.path.display());
            return Ok(false);
        }
        if dry_run {
            debug!("Dry run: not writing {}", self.path.display());
            return Ok(false);
        }
        write_target(&self.path, &self.updated)?;
        Ok(true)
    }
}

/// Read a target file content safely
pub fn read_target(path: &Path) -> Result<String, FileError> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| FileError::read_error(path, e))
}

/// Write content to a target file
pub fn write_target(path: &Path, content: &str) -> Result<(), FileError> {
    debug!("Writing {}", path.display());
    fs::write(path, content).map_err(|e| FileError::write_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("Test.podspec");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_staged_file_unmodified() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "s.version = '1.0.0'\n");

        let staged = StagedFile::read(&path).unwrap();
        assert!(!staged.is_modified());
        assert!(!staged.commit(false).unwrap());
    }

    #[test]
    fn test_staged_file_commit_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "s.version = '1.0.0'\n");

        let mut staged = StagedFile::read(&path).unwrap();
        staged.updated = "s.version = '1.1.0'\n".to_string();
        assert!(staged.is_modified());
        assert!(staged.commit(false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "s.version = '1.1.0'\n");
    }

    #[test]
    fn test_staged_file_dry_run_leaves_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "s.version = '1.0.0'\n");

        let mut staged = StagedFile::read(&path).unwrap();
        staged.updated = "s.version = '1.1.0'\n".to_string();
        assert!(!staged.commit(true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "s.version = '1.0.0'\n");
    }

    #[test]
    fn test_read_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "content");
        assert_eq!(read_target(&path).unwrap(), "content");
    }

    #[test]
    fn test_read_target_not_found() {
        let result = read_target(Path::new("/nonexistent/path/Test.podspec"));
        assert!(matches!(result, Err(FileError::ReadError { .. })));
    }

    #[test]
    fn test_write_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Version.swift");

        write_target(&path, "static let major = 1\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "static let major = 1\n");
    }

    #[test]
    fn test_write_target_missing_directory() {
        let result = write_target(Path::new("/nonexistent/dir/Version.swift"), "x");
        assert!(matches!(result, Err(FileError::WriteError { .. })));
    }
}
