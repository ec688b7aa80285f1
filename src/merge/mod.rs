//! Continuation of an in-progress merge or rebase.
//!
//! The pieces compose top-down: [`build_menu`] lists the actions available
//! for the current [`WorkingTreeState`], [`MergeRebase`] dispatches the chosen
//! [`ContinuationAction`], [`classify`] turns the captured [`CommandOutcome`]
//! into a [`RecoveryDecision`], and conflicts are handed to [`ConflictFlow`].
//!
//! Everything outside this module reaches the core through the two traits in
//! [`host`]: [`GitBackend`] for the repository and [`Gui`] for the user.

mod classify;
mod conflict;
mod controller;
mod error;
pub mod host;
mod menu;

pub use classify::{CommandOutcome, RecoveryDecision, classify};
pub use conflict::{ConflictFlow, ConflictPromptState};
pub use controller::MergeRebase;
pub use error::{Error, Result};
pub use host::{GitBackend, Gui, Panel, PromptAnswer, RefreshMode, SubProcess};
pub use menu::{Menu, MenuItem, build_menu};

use std::fmt;

/// State of the working tree as reported by git.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingTreeState {
    /// No merge or rebase is in progress.
    #[default]
    None,
    /// A rebase has stopped part-way through.
    Rebasing,
    /// A merge is waiting to be concluded.
    Merging,
}

impl WorkingTreeState {
    /// All states, in display order.
    pub const ALL: &'static [Self] = &[Self::None, Self::Rebasing, Self::Merging];

    /// Lowercase state name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rebasing => "rebasing",
            Self::Merging => "merging",
        }
    }

    /// Whether a continuation action may be dispatched in this state.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::Rebasing | Self::Merging)
    }

    /// The git subcommand that drives this state (`rebasing` → `rebase`).
    #[must_use]
    pub fn verb(self) -> String {
        self.as_str().replacen("ing", "e", 1)
    }
}

impl fmt::Display for WorkingTreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action that advances or terminates a paused merge or rebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuationAction {
    /// Resume after the user resolved the current stop.
    Continue,
    /// Abandon the operation and restore the original branch.
    Abort,
    /// Drop the current commit and carry on (rebase only).
    Skip,
}

impl ContinuationAction {
    /// All actions, in menu order.
    pub const ALL: &'static [Self] = &[Self::Continue, Self::Abort, Self::Skip];

    /// Lowercase label, also the name of the git option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }

    /// Command line flag passed to git (`--continue`).
    #[must_use]
    pub fn flag(self) -> String {
        format!("--{}", self.as_str())
    }
}

impl fmt::Display for ContinuationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
pub(crate) mod testing;
