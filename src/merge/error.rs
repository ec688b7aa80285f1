//! Error type for merge/rebase continuation.

use thiserror::Error;

/// Failure of a continuation action.
#[derive(Debug, Error)]
pub enum Error {
    /// An action was requested while no merge or rebase is in progress.
    #[error("You are currently neither rebasing nor merging")]
    NotMergingOrRebasing,

    /// Git reported a failure no rule recognizes; the message is git's own.
    #[error("{0}")]
    Command(String),

    /// A collaborator (repository query, prompt, panel stack, subprocess) failed.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

/// Result alias for continuation actions.
pub type Result<T> = std::result::Result<T, Error>;
