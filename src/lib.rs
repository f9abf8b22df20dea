//! dupcleaner - Interactive duplicate file cleaner
//!
//! Finds duplicate files by MD5/SHA-1 content fingerprint across a set of
//! paths and either lists them or interactively removes redundant copies,
//! with a per-directory auto-delete policy and a safety rule that keeps at
//! least one copy of every group during automatic action.

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod scanner;

use std::io::{self, Write};

use anyhow::Context;

use crate::actions::Deleter;
use crate::cli::Cli;
use crate::config::Config;
use crate::duplicates::group_by_fingerprint;
use crate::output::{max_path_width, Lister};
use crate::resolver::Resolver;
use crate::scanner::Walker;

/// Run one full invocation: enumerate, group, then list or resolve.
///
/// Returns `true` if the operator cancelled the run with `q`.
///
/// # Errors
///
/// Fails if a file cannot be read for fingerprinting (the run aborts
/// before anything has been deleted) or on an I/O error talking to the
/// terminal.
pub fn run_app(cli: Cli) -> anyhow::Result<bool> {
    let config = Config::from_cli(&cli);

    let walker = Walker::new(config.paths.clone(), config.recursive);
    let files = walker.collect_files();
    log::debug!("Discovered {} candidate files", files.len());

    let mut groups = group_by_fingerprint(&files, config.digests, config.progress)
        .context("fingerprinting failed")?;

    if groups.is_empty() {
        log::info!("No duplicated files found.");
        return Ok(false);
    }

    let pad_width = config.global_align.then(|| max_path_width(&groups));
    let lister = Lister::new(config.machine_mode, pad_width);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Duplicated files found.")?;

    if config.write_mode {
        let deleter = Deleter::new(config.test_mode);
        let stdin = io::stdin();
        let mut resolver = Resolver::new(&deleter, lister, stdin.lock(), out);
        let cancelled = resolver.run(&mut groups)?;
        Ok(cancelled)
    } else {
        for group in &groups {
            lister.print_header(&mut out, &group.fingerprint)?;
            lister.print_files(&mut out, &group.fingerprint, &group.files)?;
        }
        Ok(false)
    }
}
