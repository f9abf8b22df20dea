//! Presentation adapter: group headers and file listings.
//!
//! Two formats are supported:
//!
//! - **Human-readable**: a `Files with key [MD5:.. SHA-1:..]:` header and
//!   numbered rows with the path padded to a column width, followed by
//!   creation time, modification time and size.
//! - **Machine-readable**: one pipe-delimited header plus one
//!   `<md5>|<sha1>|<path>|<ctime>|<mtime>|<size>` row per file, with
//!   empty digest fields for disabled algorithms.
//!
//! File metadata is queried from storage at render time, so rows always
//! reflect the current state rather than a snapshot from the scan.

use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::duplicates::DuplicateGroup;
use crate::scanner::{FileDetails, Fingerprint};

/// Extra columns between the longest path and the file info.
const ALIGN_GAP: usize = 2;

/// Renders group headers and file listings in one of the two formats.
#[derive(Debug, Clone)]
pub struct Lister {
    /// Machine-readable pipe-delimited output.
    machine: bool,
    /// Global path column width; `None` pads per group.
    pad_width: Option<usize>,
}

impl Lister {
    /// Create a lister. `pad_width` fixes the path column width across all
    /// groups (see [`max_path_width`]); pass `None` to align per group.
    #[must_use]
    pub fn new(machine: bool, pad_width: Option<usize>) -> Self {
        Self { machine, pad_width }
    }

    /// Write the header line for a group.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn print_header<W: io::Write>(&self, w: &mut W, fp: &Fingerprint) -> io::Result<()> {
        if self.machine {
            writeln!(w, "MD5|SHA-1|File|Creation|Last Modification|Size")
        } else {
            writeln!(
                w,
                "Files with key [MD5:{} SHA-1:{}]:",
                fp.md5_hex(),
                fp.sha1_hex()
            )
        }
    }

    /// Write one row per file, numbered from 1 in the human format.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn print_files<W: io::Write>(
        &self,
        w: &mut W,
        fp: &Fingerprint,
        files: &[PathBuf],
    ) -> io::Result<()> {
        let width = self.pad_width.unwrap_or_else(|| {
            files
                .iter()
                .map(|p| p.display().to_string().len())
                .max()
                .unwrap_or(0)
                + ALIGN_GAP
        });

        for (idx, path) in files.iter().enumerate() {
            let details = FileDetails::query(path);
            let created = format_timestamp(details.created);
            let modified = format_timestamp(details.modified);

            if self.machine {
                writeln!(
                    w,
                    "{}|{}|{}|{}|{}|{}",
                    fp.md5_hex(),
                    fp.sha1_hex(),
                    path.display(),
                    created,
                    modified,
                    details.size
                )?;
            } else {
                writeln!(
                    w,
                    "[{}] {:<width$} Created: {} Last Modification: {} Size: {}",
                    idx + 1,
                    path.display(),
                    created,
                    modified,
                    details.size,
                    width = width
                )?;
            }
        }
        Ok(())
    }
}

/// Path column width covering every file in every group.
///
/// Used for the global alignment mode, where the file info lines up in a
/// single column across the whole listing.
#[must_use]
pub fn max_path_width(groups: &[DuplicateGroup]) -> usize {
    groups
        .iter()
        .flat_map(|g| g.files.iter())
        .map(|p| p.display().to_string().len())
        .max()
        .unwrap_or(0)
        + ALIGN_GAP
}

/// Format a timestamp in ctime style, local time.
fn format_timestamp(t: SystemTime) -> String {
    let datetime: DateTime<Local> = t.into();
    datetime.format("%a %b %e %H:%M:%S %Y").to_string()
}
