//! Git operations module

mod cli;
mod status;

pub use cli::Cli;
pub use status::{FileStatus, list as list_files};

use anyhow::{Context, Result};
use git2::{Repository, RepositoryState};
use std::path::{Path, PathBuf};

use crate::merge::WorkingTreeState;

/// Open a git repository at the given path
///
/// # Errors
///
/// Returns an error if the path is not a git repository
pub fn open_repository(path: &Path) -> Result<Repository> {
    Repository::discover(path)
        .with_context(|| format!("Failed to open git repository at {}", path.display()))
}

/// Get the root of the git repository containing the given path
///
/// # Errors
///
/// Returns an error if the path is not inside a git repository
pub fn repository_root(path: &Path) -> Result<PathBuf> {
    let repo = open_repository(path)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .context("Repository has no working directory")
}

/// Read whether a merge or rebase is in progress
///
/// # Errors
///
/// Returns an error if the path is not inside a git repository
pub fn working_tree_state(path: &Path) -> Result<WorkingTreeState> {
    let repo = open_repository(path)?;
    Ok(state_from(repo.state()))
}

const fn state_from(state: RepositoryState) -> WorkingTreeState {
    match state {
        RepositoryState::Merge => WorkingTreeState::Merging,
        RepositoryState::Rebase
        | RepositoryState::RebaseInteractive
        | RepositoryState::RebaseMerge
        | RepositoryState::ApplyMailboxOrRebase => WorkingTreeState::Rebasing,
        _ => WorkingTreeState::None,
    }
}
