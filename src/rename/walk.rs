//! Walk - collect rename candidates under a root

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A file that may need renaming, split into the parts the rename flow
/// works with.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Full path as discovered.
    pub path: PathBuf,
    /// Directory the file lives in.
    pub parent: PathBuf,
    /// Current file name.
    pub name: String,
}

impl Candidate {
    /// Split a file path into candidate parts. Returns None for paths with
    /// no file name component or a name that is not valid UTF-8.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let parent = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Some(Candidate {
            path: path.to_path_buf(),
            parent,
            name,
        })
    }
}

/// Collect files under `root`, siblings in name order so runs are
/// deterministic. Directories are never candidates; without `recursive` the
/// walk stops at the first level. A root that is itself a file yields just
/// that file.
pub fn candidates(root: &Path, recursive: bool) -> Vec<Candidate> {
    if root.is_file() {
        return Candidate::from_path(root).into_iter().collect();
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| Candidate::from_path(entry.path()))
        .collect()
}
