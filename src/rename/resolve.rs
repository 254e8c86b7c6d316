//! Resolve - apply one rename, handling collisions with an existing file
//!
//! A rename is only attempted against a target that does not exist at the
//! moment of the call; `try_rename` re-checks right before acting and also
//! maps an `AlreadyExists` failure from the OS to a collision, since the
//! check and the rename are not atomic.

use std::fs;
use std::io;
use std::path::Path;

use colored::Colorize;
use thiserror::Error;

use crate::rename::walk::Candidate;

/// Failure modes for a single rename attempt.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("'{0}' already exists")]
    Collision(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What happened to one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Name was already clean; nothing to do.
    Unchanged,
    /// File now carries a new name.
    Renamed,
    /// Dry run: the file would be renamed.
    WouldRename,
    /// Collision and the user declined the alternative.
    Skipped,
    /// Rename failed; the file keeps its original name.
    Failed,
}

impl Resolution {
    /// Whether the outcome counts toward the renamed total.
    pub fn counts(&self) -> bool {
        matches!(self, Resolution::Renamed | Resolution::WouldRename)
    }
}

/// Rename `from` to `to` unless `to` already exists.
pub fn try_rename(from: &Path, to: &Path) -> Result<(), RenameError> {
    let taken = to
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| to.display().to_string());

    if to.exists() {
        return Err(RenameError::Collision(taken));
    }
    fs::rename(from, to).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            RenameError::Collision(taken)
        } else {
            RenameError::Io(e)
        }
    })
}

/// Smallest `_N` variant of `name` not present in `dir`, with the suffix
/// inserted before the last extension separator (`report.txt` ->
/// `report_1.txt`, `archive.tar.gz` -> `archive.tar_1.gz`). The search
/// restarts at 1 on every call; no counter is carried between calls.
pub fn alternative_name(dir: &Path, name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let ext = Path::new(name).extension().and_then(|e| e.to_str());

    let mut n = 1;
    loop {
        let candidate = match ext {
            Some(ext) => format!("{}_{}.{}", stem, n, ext),
            None => format!("{}_{}", stem, n),
        };
        if !dir.join(&candidate).exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Carry out (or preview) the rename of `candidate` to `proposed`.
///
/// Dry runs never touch the filesystem; a dry-run collision still counts as
/// "would rename" even though the wet pass may end up using an alternative
/// name or skipping the file. Wet collisions offer one alternative name via
/// `confirm`; a decline skips the file and a second failure is final.
pub fn resolve(
    candidate: &Candidate,
    proposed: &str,
    dry_run: bool,
    verbose: bool,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Resolution {
    if proposed == candidate.name {
        return Resolution::Unchanged;
    }

    let target = candidate.parent.join(proposed);

    if dry_run {
        if verbose && target.exists() {
            warn_exists(proposed);
            let alt = alternative_name(&candidate.parent, proposed);
            println!("  Would try '{}' instead.", alt);
        }
        return Resolution::WouldRename;
    }

    match try_rename(&candidate.path, &target) {
        Ok(()) => Resolution::Renamed,
        Err(RenameError::Collision(taken)) => {
            warn_exists(&taken);
            let alt = alternative_name(&candidate.parent, proposed);
            if !confirm(&format!("  Try alternative name '{}'?", alt)) {
                println!("  Skipped.");
                return Resolution::Skipped;
            }
            match try_rename(&candidate.path, &candidate.parent.join(&alt)) {
                Ok(()) => {
                    println!("  Renamed to '{}' instead.", alt);
                    Resolution::Renamed
                }
                Err(e) => {
                    report_error(&candidate.name, &e);
                    Resolution::Failed
                }
            }
        }
        Err(e) => {
            report_error(&candidate.name, &e);
            Resolution::Failed
        }
    }
}

fn warn_exists(name: &str) {
    println!("  {} '{}' already exists.", "Warning:".yellow().bold(), name);
}

fn report_error(name: &str, err: &RenameError) {
    println!("  {} renaming '{}': {}", "Error".red().bold(), name, err);
}
