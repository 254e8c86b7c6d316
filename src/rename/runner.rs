//! Runner - pass orchestration and the dry-run to wet-run escalation
//!
//! A session is one or two passes over the same tree. The default pass is a
//! dry run; when it previewed at least one rename and output was not
//! suppressed, the user is offered a single wet pass. The wet pass never
//! escalates again, so control flow stays flat.

use std::path::Path;

use anyhow::{bail, Result};

use crate::prompt;
use crate::rename::resolve;
use crate::rename::walk;
use crate::sanitize;

/// Totals for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Files renamed, or that a dry run would rename.
    pub renamed: usize,
    /// A dry pass previewed renames and awaits the go-ahead.
    pub pending: bool,
}

/// Entry point wired to the interactive stdin prompt.
pub fn run_rename(root: &Path, recursive: bool, wet: bool, quiet: bool) -> Result<()> {
    execute(root, recursive, wet, quiet, &mut prompt::confirm)?;
    Ok(())
}

/// Run the session: first pass, then the confirmed wet pass if the first was
/// a dry run with pending work.
pub fn execute(
    root: &Path,
    recursive: bool,
    wet: bool,
    quiet: bool,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<RunOutcome> {
    if !root.exists() {
        bail!("path '{}' does not exist", root.display());
    }
    let verbose = !quiet;

    let outcome = run_pass(root, recursive, !wet, verbose, true, confirm);
    if !outcome.pending {
        return Ok(outcome);
    }
    if !confirm("Proceed with renaming these files?") {
        return Ok(outcome);
    }
    Ok(run_pass(root, recursive, false, verbose, false, confirm))
}

/// One pass over the tree. Candidates are collected up front, so renames
/// made during the pass cannot perturb traversal.
fn run_pass(
    root: &Path,
    recursive: bool,
    dry_run: bool,
    verbose: bool,
    first_pass: bool,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> RunOutcome {
    let mut pass = Pass::new(verbose, first_pass);
    let mut renamed = 0;

    for candidate in walk::candidates(root, recursive) {
        let proposed = sanitize::sanitize_filename(&candidate.name);
        if proposed == candidate.name {
            continue;
        }

        let tag = if dry_run { "[DRY RUN] " } else { "" };
        pass.say(&format!(
            "{}Renaming: {} -> {}",
            tag, candidate.name, proposed
        ));

        if resolve::resolve(&candidate, &proposed, dry_run, verbose, confirm).counts() {
            renamed += 1;
        }
    }

    if verbose {
        if dry_run {
            println!("\nDry run complete. {} files would be renamed.", renamed);
        } else {
            println!("\nComplete. {} files renamed.", renamed);
        }
    }

    RunOutcome {
        renamed,
        pending: dry_run && verbose && renamed > 0,
    }
}

/// Per-pass printing. The first line of a session's first pass carries the
/// `== ` lead-in; the escalated pass never repeats it.
struct Pass {
    verbose: bool,
    mark_next: bool,
}

impl Pass {
    fn new(verbose: bool, first_pass: bool) -> Self {
        Pass {
            verbose,
            mark_next: first_pass,
        }
    }

    fn say(&mut self, line: &str) {
        if !self.verbose {
            return;
        }
        if self.mark_next {
            println!("== {}", line);
            self.mark_next = false;
        } else {
            println!("{}", line);
        }
    }
}
