//! Scanner module for path enumeration and file fingerprinting.
//!
//! This module provides:
//! - Single-threaded directory walking with a stable discovery order
//! - Streaming MD5/SHA-1 fingerprints computed in one read pass
//!
//! # Architecture
//!
//! - [`walker`]: root resolution and file discovery
//! - [`hasher`]: digest configuration and fingerprint computation
//!
//! # Example
//!
//! ```no_run
//! use dupcleaner::scanner::{fingerprint_file, DigestConfig, Walker};
//! use std::path::PathBuf;
//!
//! let walker = Walker::new(vec![PathBuf::from(".")], true);
//! let digests = DigestConfig::new(true, false);
//! for path in walker.collect_files() {
//!     let fp = fingerprint_file(&path, digests).unwrap();
//!     println!("{} {}", fp.md5_hex(), path.display());
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;
use std::time::SystemTime;

pub use hasher::{fingerprint_file, DigestConfig, Fingerprint, BLOCK_SIZE};
pub use walker::Walker;

/// Filesystem metadata snapshot for one file, queried on demand.
///
/// Listings query this at render time instead of caching metadata from the
/// scan, so sizes and timestamps always reflect current storage state.
#[derive(Debug, Clone)]
pub struct FileDetails {
    /// File size in bytes.
    pub size: u64,
    /// Creation time. Falls back to the modification time on filesystems
    /// that do not report it.
    pub created: SystemTime,
    /// Last modification time.
    pub modified: SystemTime,
}

impl FileDetails {
    /// Query the current metadata for `path`.
    ///
    /// A file that vanished since discovery yields zero size and epoch
    /// timestamps rather than an error; the listing must not fail because
    /// one entry disappeared mid-session.
    #[must_use]
    pub fn query(path: &std::path::Path) -> Self {
        match std::fs::metadata(path) {
            Ok(meta) => {
                let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                Self {
                    size: meta.len(),
                    created: meta.created().unwrap_or(modified),
                    modified,
                }
            }
            Err(e) => {
                log::debug!("Failed to stat {}: {}", path.display(), e);
                Self {
                    size: 0,
                    created: SystemTime::UNIX_EPOCH,
                    modified: SystemTime::UNIX_EPOCH,
                }
            }
        }
    }
}

/// Errors that can occur while reading a file for fingerprinting.
///
/// These are fatal to the run: aborting before any deletion happens is
/// safer than silently grouping a partially-read file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file was not found (removed between discovery and hashing).
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    /// Classify an I/O error against the path being hashed.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
