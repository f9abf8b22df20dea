//! Registry of directories marked for automatic duplicate deletion.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Process-lifetime set of auto-action directories.
///
/// Once the operator marks a directory (the `f<n>` menu command), every
/// duplicate found there for the rest of the run is deleted automatically,
/// subject to the engine's survival cap. The set only grows: there is no
/// unmark operation, and nothing is persisted across runs.
#[derive(Debug, Default)]
pub struct AutoActionRegistry {
    dirs: HashSet<PathBuf>,
}

impl AutoActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `dir` for automatic deletion of future duplicates.
    pub fn mark(&mut self, dir: &Path) {
        if self.dirs.insert(dir.to_path_buf()) {
            log::debug!("Marked {} for automatic deletion", dir.display());
        }
    }

    /// Whether `dir` has been marked.
    #[must_use]
    pub fn is_marked(&self, dir: &Path) -> bool {
        self.dirs.contains(dir)
    }

    /// Number of marked directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Check if no directory has been marked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}
