//! mergepilot - drive in-progress git merges and rebases from the terminal
//!
//! When git stops part-way through a merge or rebase, mergepilot offers the
//! continuation actions that apply, runs them, and recovers from the failures
//! git is known to report for them.

mod command;

pub mod config;
pub mod git;
pub mod merge;
pub mod paths;
pub mod text;

pub use config::Config;
pub use merge::{ContinuationAction, MergeRebase, WorkingTreeState};
