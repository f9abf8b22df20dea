//! Duplicate resolution engine.
//!
//! # Overview
//!
//! The [`Resolver`] walks the duplicate groups one at a time and decides,
//! with the operator, which copies survive. Per group it:
//!
//! 1. Applies automatic deletions for files whose directory is in the
//!    [`AutoActionRegistry`], capped so at least one copy of the group
//!    survives the automatic pass.
//! 2. If two or more files remain, prompts for commands until the group
//!    is resolved or the operator quits.
//!
//! # Menu commands
//!
//! - `<n>` — delete the file at 1-based position `n`
//! - `f<n>` — delete that file and mark its directory for automatic
//!   deletion in all remaining groups
//! - `n` — leave this group as-is and move on
//! - `A` — delete every remaining file, after a typed `YES` confirmation;
//!   the only path allowed to empty a group
//! - `q` — abort the run (reported to the caller as cancelled)
//! - `?` — print help and redisplay the list
//!
//! The engine is generic over its input and output streams so tests can
//! drive the menu from an in-memory cursor and assert on the transcript
//! (production wires up locked stdin and stdout). A closed input stream
//! is treated like `q`: the run ends cleanly instead of spinning on EOF.

pub mod registry;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::actions::Deleter;
use crate::duplicates::DuplicateGroup;
use crate::output::Lister;

pub use registry::AutoActionRegistry;

/// Per-group control flow.
enum Flow {
    /// Group is done (resolved or left as-is); continue with the next one.
    Continue,
    /// Operator quit; stop processing groups entirely.
    Quit,
}

/// Interactive state machine resolving duplicate groups.
pub struct Resolver<'a, R, W> {
    deleter: &'a Deleter,
    lister: Lister,
    registry: AutoActionRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Resolver<'a, R, W> {
    /// Create a resolver with an empty auto-action registry.
    pub fn new(deleter: &'a Deleter, lister: Lister, input: R, output: W) -> Self {
        Self {
            deleter,
            lister,
            registry: AutoActionRegistry::new(),
            input,
            output,
        }
    }

    /// Directories marked for automatic deletion so far.
    #[must_use]
    pub fn registry(&self) -> &AutoActionRegistry {
        &self.registry
    }

    /// Process every group in order. Returns `true` if the operator
    /// cancelled the run; groups after the cancellation point are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the operator's input or the display
    /// output. Filesystem deletion failures are not errors here: they are
    /// reported inline and the affected file stays in its group.
    pub fn run(&mut self, groups: &mut [DuplicateGroup]) -> io::Result<bool> {
        for group in groups.iter_mut() {
            self.lister.print_header(&mut self.output, &group.fingerprint)?;
            self.redisplay(group)?;
            if let Flow::Quit = self.resolve_group(group)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Run the state machine for one group: automatic pass, then the
    /// action loop until fewer than two files remain or the operator
    /// moves on.
    fn resolve_group(&mut self, group: &mut DuplicateGroup) -> io::Result<Flow> {
        if self.auto_apply(group)? {
            self.redisplay(group)?;
        }

        loop {
            if group.files.len() < 2 {
                return Ok(Flow::Continue);
            }

            let Some(line) = self.prompt(group.files.len())? else {
                return Ok(Flow::Quit);
            };
            let choice = line.trim();

            if choice.eq_ignore_ascii_case("n") {
                return Ok(Flow::Continue);
            } else if choice.eq_ignore_ascii_case("q") {
                return Ok(Flow::Quit);
            } else if choice == "?" {
                self.print_help()?;
                self.redisplay(group)?;
            } else if choice == "A" {
                self.delete_all(group)?;
            } else if let Some(idx) = parse_file_token(choice, group.files.len()) {
                self.delete_at(group, idx, false)?;
            } else if let Some(idx) = parse_folder_token(choice, group.files.len()) {
                self.delete_at(group, idx, true)?;
            } else {
                writeln!(self.output, "No valid option")?;
            }
        }
    }

    /// Automatic deletion pass over one group.
    ///
    /// The cap is computed once against the group size at pass start
    /// (`size - 1`), not against the live count: only successful
    /// deletions consume it, and files skipped because the cap was
    /// reached keep their relative order. Returns whether anything was
    /// deleted.
    fn auto_apply(&mut self, group: &mut DuplicateGroup) -> io::Result<bool> {
        if self.registry.is_empty() {
            return Ok(false);
        }

        let cap = group.files.len().saturating_sub(1);
        let mut deleted = 0;
        let mut kept = Vec::with_capacity(group.files.len());
        let mut changed = false;

        for path in group.files.drain(..) {
            let marked = path.parent().is_some_and(|d| self.registry.is_marked(d));
            if marked && deleted < cap {
                writeln!(
                    self.output,
                    "Removing file automatically: {}",
                    path.display()
                )?;
                if self.delete_reported(&path)? {
                    deleted += 1;
                    changed = true;
                } else {
                    kept.push(path);
                }
            } else {
                kept.push(path);
            }
        }

        group.files = kept;
        Ok(changed)
    }

    /// Delete the file at `idx`, optionally marking its directory first.
    /// On success the entry leaves the in-memory list; on failure it
    /// stays. Redisplays the list while more than one file remains.
    fn delete_at(&mut self, group: &mut DuplicateGroup, idx: usize, mark_folder: bool) -> io::Result<()> {
        let path = group.files[idx].clone();

        if mark_folder {
            if let Some(dir) = path.parent() {
                self.registry.mark(dir);
            }
        }

        if self.delete_reported(&path)? {
            group.files.remove(idx);
        }

        if group.files.len() > 1 {
            self.redisplay(group)?;
        }
        Ok(())
    }

    /// The `A` command: confirm, then attempt to delete every remaining
    /// file. Failed deletions stay in the list. Anything but an exact
    /// `YES` cancels.
    fn delete_all(&mut self, group: &mut DuplicateGroup) -> io::Result<()> {
        write!(
            self.output,
            "SURE? (type \"YES\" to confirm or any key to cancel) "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(());
        }
        if line.trim() != "YES" {
            return Ok(());
        }

        let files = std::mem::take(&mut group.files);
        for path in files {
            if !self.delete_reported(&path)? {
                group.files.push(path);
            }
        }
        Ok(())
    }

    /// Delete one file and report the outcome to the operator. Returns
    /// whether the file is gone.
    fn delete_reported(&mut self, path: &Path) -> io::Result<bool> {
        match self.deleter.delete(path) {
            Ok(()) => {
                writeln!(self.output, "File {} removed", path.display())?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.output, "Error removing file: {}", e)?;
                Ok(false)
            }
        }
    }

    /// Print the action menu and read one line of input. Returns `None`
    /// on EOF.
    fn prompt(&mut self, count: usize) -> io::Result<Option<String>> {
        let mut tokens: Vec<String> = (1..=count).map(|i| i.to_string()).collect();
        tokens.extend((1..=count).map(|i| format!("f{i}")));

        write!(self.output, "[{}], n, A, q, ?. Option: ", tokens.join(", "))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "  <number>: Delete file with index number")?;
        writeln!(
            self.output,
            "  f<number>: Delete file with index and select its directory to remove by default"
        )?;
        writeln!(self.output, "          n: Do not remove any file")?;
        writeln!(
            self.output,
            "          A: Remove All files (WARNING, you will lose all copies!!)"
        )?;
        writeln!(self.output, "          q: Quit!")?;
        Ok(())
    }

    fn redisplay(&mut self, group: &DuplicateGroup) -> io::Result<()> {
        self.lister
            .print_files(&mut self.output, &group.fingerprint, &group.files)
    }
}

/// Parse a 1-based file index token; returns the 0-based index.
fn parse_file_token(token: &str, count: usize) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = token.parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Parse an `f`-prefixed index token; returns the 0-based index.
fn parse_folder_token(token: &str, count: usize) -> Option<usize> {
    parse_file_token(token.strip_prefix('f')?, count)
}
