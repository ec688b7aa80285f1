//! Working tree file listing for the files panel.

use anyhow::{Context, Result};
use git2::{Status, StatusOptions};
use std::path::Path;

/// A changed file in the working tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Path relative to the repository root
    pub path: String,
    /// Whether the file still has unresolved conflicts
    pub conflicted: bool,
    /// Whether the change is staged
    pub staged: bool,
}

impl FileStatus {
    /// Two-letter marker shown before the path
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        if self.conflicted {
            "UU"
        } else if self.staged {
            "M "
        } else {
            " M"
        }
    }
}

/// List changed files, conflicted ones first
///
/// # Errors
///
/// Returns an error if the repository or its status cannot be read
pub fn list(path: &Path) -> Result<Vec<FileStatus>> {
    let repo = super::open_repository(path)?;
    let mut options = StatusOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(true);

    let statuses = repo
        .statuses(Some(&mut options))
        .context("Failed to read working tree status")?;

    let staged_mask = Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE;

    let mut files: Vec<FileStatus> = statuses
        .iter()
        .filter(|entry| !entry.status().contains(Status::IGNORED))
        .filter_map(|entry| {
            let status = entry.status();
            entry.path().map(|path| FileStatus {
                path: path.to_string(),
                conflicted: status.contains(Status::CONFLICTED),
                staged: status.intersects(staged_mask),
            })
        })
        .collect();

    files.sort_by(|a, b| b.conflicted.cmp(&a.conflicted).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}
