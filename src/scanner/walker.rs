//! Path enumeration using walkdir.
//!
//! # Overview
//!
//! Resolves operator-supplied roots (files or directories) to absolute
//! paths and yields every regular file beneath them. The walk is
//! deliberately single-threaded: listings and group numbering must be
//! reproducible between runs, so discovery order has to be stable.
//!
//! Symbolic links are never followed and never yielded. Unreadable
//! directories are logged and skipped; they do not stop the walk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Single-threaded file discovery over a set of roots.
#[derive(Debug)]
pub struct Walker {
    /// Roots to enumerate, as supplied by the operator.
    roots: Vec<PathBuf>,
    /// Recurse into subdirectories of directory roots.
    recursive: bool,
}

impl Walker {
    /// Create a walker over the given roots.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>, recursive: bool) -> Self {
        Self { roots, recursive }
    }

    /// Enumerate all candidate files in discovery order.
    ///
    /// Each root is resolved to an absolute path first (without resolving
    /// symlinks, matching how the paths were named by the operator). A root
    /// that does not exist is reported and skipped. A path reachable from
    /// more than one root is yielded once, at its first discovery.
    #[must_use]
    pub fn collect_files(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for root in &self.roots {
            let root = match std::path::absolute(root) {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("File {} not found: {}", root.display(), e);
                    continue;
                }
            };

            if root.is_symlink() {
                log::warn!("File {} not included", root.display());
            } else if root.is_file() {
                push_unique(&mut files, &mut seen, root);
            } else if root.is_dir() {
                self.walk_dir(&root, &mut files, &mut seen);
            } else {
                log::warn!("File {} not found", root.display());
            }
        }

        files
    }

    /// Walk one directory root, appending regular files in traversal order.
    fn walk_dir(&self, root: &Path, files: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>) {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        for entry in WalkDir::new(root).follow_links(false).max_depth(max_depth) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_file() {
                push_unique(files, seen, entry.into_path());
            } else if !file_type.is_dir() {
                // Symlinks, sockets, fifos and the like are not candidates.
                log::debug!("File {} not included", entry.path().display());
            }
        }
    }
}

fn push_unique(files: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>, path: PathBuf) {
    if seen.insert(path.clone()) {
        files.push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_walk_flat_directory() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("b.txt"));

        let walker = Walker::new(vec![dir.path().to_path_buf()], false);
        let files = walker.collect_files();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_non_recursive_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("top.txt"));
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("nested.txt"));

        let walker = Walker::new(vec![dir.path().to_path_buf()], false);
        let files = walker.collect_files();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.txt"));
    }

    #[test]
    fn test_recursive_descends() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("top.txt"));
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("nested.txt"));

        let walker = Walker::new(vec![dir.path().to_path_buf()], true);
        let files = walker.collect_files();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_file_root_is_yielded() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("only.txt");
        touch(&file);

        let walker = Walker::new(vec![file.clone()], false);
        let files = walker.collect_files();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("only.txt"));
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.txt"));

        let walker = Walker::new(
            vec![PathBuf::from("/no/such/root"), dir.path().to_path_buf()],
            false,
        );
        let files = walker.collect_files();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_duplicate_roots_deduplicated() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.txt"));

        let walker = Walker::new(
            vec![dir.path().to_path_buf(), dir.path().to_path_buf()],
            false,
        );
        let files = walker.collect_files();
        assert_eq!(files.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.txt");
        touch(&target);
        let link = dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let walker = Walker::new(vec![dir.path().to_path_buf()], false);
        let files = walker.collect_files();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.txt"));
    }
}
