//! Engine configuration derived from CLI arguments.
//!
//! Some flag combinations are accepted but meaningless; they are normalized
//! here with a logged warning instead of failing the run:
//!
//! - `--test` without `--write` has no effect.
//! - `--machine` with `--write` is disabled (the interactive menu is
//!   human-facing by nature).
//! - `--machine` together with alignment resolves in favor of machine mode.
//! - If neither `--md5` nor `--sha1` is selected, MD5 is enabled.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::scanner::DigestConfig;

/// Normalized run configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Roots (files or directories) to scan.
    pub paths: Vec<PathBuf>,
    /// Recurse into subdirectories of directory roots.
    pub recursive: bool,
    /// Write mode: run the interactive deletion menu per group.
    pub write_mode: bool,
    /// Dry run: deletions are reported but storage is untouched.
    pub test_mode: bool,
    /// Pipe-delimited machine output instead of the aligned table.
    pub machine_mode: bool,
    /// Pad paths to a single column width across all groups.
    pub global_align: bool,
    /// Print one progress line per fingerprinted file.
    pub progress: bool,
    /// Which digests make up the fingerprint.
    pub digests: DigestConfig,
}

impl Config {
    /// Build a normalized configuration from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut machine_mode = cli.machine;
        let mut global_align = !cli.no_align;

        if cli.test && !cli.write {
            log::warn!("--test does not have effect in list mode");
        }

        if cli.write && machine_mode {
            log::warn!("--machine does not have effect in write mode");
            machine_mode = false;
        }

        if machine_mode && global_align {
            log::warn!("--machine and alignment both requested; using machine mode");
            global_align = false;
        }

        Self {
            paths: cli.paths.clone(),
            recursive: cli.recursive,
            write_mode: cli.write,
            test_mode: cli.test,
            machine_mode,
            global_align,
            progress: cli.verbose >= 1,
            digests: DigestConfig::new(cli.md5, cli.sha1),
        }
    }
}
