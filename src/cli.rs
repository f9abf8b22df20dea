//! Command-line interface definitions for dupcleaner.
//!
//! This module defines all CLI arguments using the clap derive API. The tool
//! has no subcommands: a single invocation scans the given paths, lists the
//! duplicate groups it finds, and (in write mode) walks the operator through
//! resolving them group by group.
//!
//! # Example
//!
//! ```bash
//! # List duplicates under ~/Downloads, recursing into subdirectories
//! dupcleaner -r ~/Downloads
//!
//! # Interactively delete duplicates, fingerprinting with MD5 and SHA-1
//! dupcleaner -r --write --sha1 --md5 ~/Downloads
//!
//! # Dry run of write mode: the menu works, storage is untouched
//! dupcleaner --write --test ~/Downloads
//!
//! # Machine-readable listing for scripting
//! dupcleaner -m ~/Downloads | cut -d'|' -f3
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Interactive duplicate file cleaner.
///
/// Finds files with identical content by MD5/SHA-1 fingerprint and either
/// lists them or interactively removes redundant copies.
#[derive(Debug, Parser)]
#[command(name = "dupcleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or folders to check for duplicates
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable write mode: prompt to delete duplicates instead of only listing
    #[arg(long)]
    pub write: bool,

    /// Do not remove files, only test the process (write mode only)
    #[arg(long)]
    pub test: bool,

    /// Machine-readable pipe-delimited listing (list mode only)
    #[arg(short, long)]
    pub machine: bool,

    /// Do not align the extra file info across all groups
    #[arg(short = 'l', long = "no-align")]
    pub no_align: bool,

    /// Use MD5 to calculate the fingerprint (default when no digest is selected)
    #[arg(long)]
    pub md5: bool,

    /// Use SHA-1 to calculate the fingerprint
    #[arg(long)]
    pub sha1: bool,

    /// Print a progress line per fingerprinted file; repeat for debug logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
