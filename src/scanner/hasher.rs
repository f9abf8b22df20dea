//! Streaming MD5/SHA-1 fingerprint computation.
//!
//! # Overview
//!
//! A fingerprint is the combination of the enabled digests' hex strings.
//! Files are read once in fixed-size blocks and every enabled digest is
//! fed from the same pass, so memory use is bounded regardless of file
//! size and the file is never read twice.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};
use sha1::Sha1;

use super::HashError;

/// Read block size for streaming digests.
pub const BLOCK_SIZE: usize = 8192;

/// Which digest algorithms make up the fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestConfig {
    /// Compute an MD5 digest.
    pub md5: bool,
    /// Compute a SHA-1 digest.
    pub sha1: bool,
}

impl DigestConfig {
    /// Create a digest configuration. At least one algorithm is always
    /// enabled: if the caller selects neither, MD5 is used.
    #[must_use]
    pub fn new(md5: bool, sha1: bool) -> Self {
        if !md5 && !sha1 {
            Self {
                md5: true,
                sha1: false,
            }
        } else {
            Self { md5, sha1 }
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Content fingerprint of one file: the enabled digests' hex strings.
///
/// Compared structurally, so two fingerprints are equal only when they were
/// computed with the same configuration and over identical content. A
/// disabled digest renders as the empty string in listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// MD5 hex digest, if MD5 was enabled.
    pub md5: Option<String>,
    /// SHA-1 hex digest, if SHA-1 was enabled.
    pub sha1: Option<String>,
}

impl Fingerprint {
    /// MD5 hex digest, or the empty string when MD5 is disabled.
    #[must_use]
    pub fn md5_hex(&self) -> &str {
        self.md5.as_deref().unwrap_or("")
    }

    /// SHA-1 hex digest, or the empty string when SHA-1 is disabled.
    #[must_use]
    pub fn sha1_hex(&self) -> &str {
        self.sha1.as_deref().unwrap_or("")
    }
}

/// Compute the fingerprint of `path` under the given digest configuration.
///
/// The file is streamed in [`BLOCK_SIZE`] chunks and all enabled digests
/// are updated from each chunk.
///
/// # Errors
///
/// Returns a [`HashError`] if the file cannot be opened or read. Callers
/// treat this as fatal to the run: aborting before any deletion has
/// happened is safer than grouping on a partial read.
pub fn fingerprint_file(path: &Path, config: DigestConfig) -> Result<Fingerprint, HashError> {
    let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;

    let mut md5 = config.md5.then(Md5::new);
    let mut sha1 = config.sha1.then(Sha1::new);

    let mut buf = [0u8; BLOCK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| HashError::from_io(path, e))?;
        if n == 0 {
            break;
        }
        if let Some(h) = md5.as_mut() {
            h.update(&buf[..n]);
        }
        if let Some(h) = sha1.as_mut() {
            h.update(&buf[..n]);
        }
    }

    Ok(Fingerprint {
        md5: md5.map(|h| bytes_to_hex(&h.finalize())),
        sha1: sha1.map(|h| bytes_to_hex(&h.finalize())),
    })
}

/// Convert bytes to a lowercase hexadecimal string.
fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
