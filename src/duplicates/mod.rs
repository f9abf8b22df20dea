//! Duplicate grouping by content fingerprint.
//!
//! # Overview
//!
//! Files sharing a fingerprint are collected into a [`DuplicateGroup`].
//! Groups keep their files in discovery order and appear in the order
//! their fingerprint was first seen, so listings are stable between runs
//! over the same tree. Fingerprints carried by a single file are dropped:
//! the working set only ever contains groups of two or more.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{fingerprint_file, DigestConfig, Fingerprint, HashError};

/// A set of files sharing one content fingerprint.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    /// Fingerprint shared by every file in the group.
    pub fingerprint: Fingerprint,
    /// Member files, in discovery order.
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether the group still needs attention (2+ copies remain).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.files.len() > 1
    }
}

/// Group `files` by content fingerprint, keeping only real duplicates.
///
/// Every file is fingerprinted under `digests`; files are appended to
/// their group in input order and groups are emitted in first-seen
/// fingerprint order. With `progress` set, one line per processed file is
/// printed naming its digests and path.
///
/// # Errors
///
/// An unreadable file aborts grouping with a [`HashError`]. Nothing has
/// been deleted at this point, so failing the whole run is safe; skipping
/// the file instead could silently hide one copy from the operator.
pub fn group_by_fingerprint(
    files: &[PathBuf],
    digests: DigestConfig,
    progress: bool,
) -> Result<Vec<DuplicateGroup>, HashError> {
    let mut index: HashMap<Fingerprint, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for path in files {
        let fingerprint = fingerprint_file(path, digests)?;

        if progress {
            println!(
                "Processing file. MD5:{} SHA-1:{} Name: {}",
                fingerprint.md5_hex(),
                fingerprint.sha1_hex(),
                path.display()
            );
        }

        match index.get(&fingerprint) {
            Some(&i) => groups[i].files.push(path.clone()),
            None => {
                index.insert(fingerprint.clone(), groups.len());
                groups.push(DuplicateGroup {
                    fingerprint,
                    files: vec![path.clone()],
                });
            }
        }
    }

    groups.retain(DuplicateGroup::has_duplicates);
    Ok(groups)
}
