//! File deletion primitive with dry-run support.
//!
//! # Overview
//!
//! The resolution engine funnels every removal through [`Deleter`]. In
//! dry-run mode deletions are reported as successful without touching
//! storage, which lets the whole interactive menu be exercised safely.
//!
//! Deletion here is permanent (`fs::remove_file`): undo and trash
//! semantics are out of scope for this tool.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path that failed to delete
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Removes files from storage, or pretends to in dry-run mode.
#[derive(Debug, Clone)]
pub struct Deleter {
    dry_run: bool,
}

impl Deleter {
    /// Create a deleter. With `dry_run` set, [`delete`](Self::delete)
    /// succeeds without removing anything.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Whether this deleter is in dry-run mode.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Remove `path` from storage.
    ///
    /// # Errors
    ///
    /// Returns a [`DeleteError`] if the filesystem removal fails. The
    /// caller keeps the file in its working list in that case; a failed
    /// deletion never drops a file from view.
    pub fn delete(&self, path: &Path) -> Result<(), DeleteError> {
        if self.dry_run {
            log::debug!("Dry run, not removing {}", path.display());
            return Ok(());
        }

        fs::remove_file(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeleteError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => DeleteError::PermissionDenied(path.to_path_buf()),
            _ => DeleteError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("victim.txt");
        File::create(&path).unwrap();

        let deleter = Deleter::new(false);
        deleter.delete(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_dry_run_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("survivor.txt");
        File::create(&path).unwrap();

        let deleter = Deleter::new(true);
        deleter.delete(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_delete_missing_file_fails() {
        let deleter = Deleter::new(false);
        let err = deleter.delete(Path::new("/no/such/file")).unwrap_err();
        assert!(matches!(err, DeleteError::NotFound(_)));
    }

    #[test]
    fn test_dry_run_succeeds_for_missing_file() {
        // Dry run never inspects storage; the menu logic behaves the same
        // whether or not the file is really there.
        let deleter = Deleter::new(true);
        assert!(deleter.delete(Path::new("/no/such/file")).is_ok());
    }
}
