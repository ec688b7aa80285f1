//! Collaborator seams of the continuation core.
//!
//! The core never talks to git or the terminal directly. [`GitBackend`] wraps
//! the repository and [`Gui`] wraps whatever is showing things to the user.

use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;

use super::{CommandOutcome, WorkingTreeState};
use crate::text::TextKey;

/// Repository side of the continuation core.
pub trait GitBackend {
    /// Read the working tree state fresh from the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be inspected.
    fn working_tree_state(&self) -> Result<WorkingTreeState>;

    /// Run `git <verb> <flag>` and capture its outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only if git could not be run at all. A git failure is
    /// reported as [`CommandOutcome::Failure`].
    fn invoke(&self, verb: &str, flag: &str) -> Result<CommandOutcome>;

    /// Build the interactive subprocess for `git <verb> <flag>`.
    ///
    /// Returns `None` when no usable command can be built.
    fn prepare_subprocess(&self, verb: &str, flag: &str) -> Option<SubProcess>;
}

/// User side of the continuation core.
pub trait Gui {
    /// Ask dependent panels to reload.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh could not be scheduled or performed.
    fn refresh(&mut self, mode: RefreshMode) -> Result<()>;

    /// Show a yes/no prompt and block until the user answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be displayed or read.
    fn ask(&mut self, title: TextKey, prompt: TextKey) -> Result<PromptAnswer>;

    /// Focus a panel, remembering the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel cannot be shown.
    fn push_context(&mut self, panel: Panel) -> Result<()>;

    /// Return focus to the previously pushed panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel stack cannot be unwound.
    fn return_from_context(&mut self) -> Result<()>;

    /// Suspend the UI, run `sub` attached to the terminal, resume and refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be handed over or restored, or
    /// if the subprocess fails.
    fn run_subprocess(&mut self, sub: SubProcess) -> Result<()>;
}

/// How a refresh should be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Schedule the reload and return immediately.
    Async,
    /// Reload before returning.
    Sync,
}

/// Answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    /// The user accepted the prompt.
    Confirm,
    /// The user dismissed or declined the prompt.
    Close,
}

/// Panels the core can move focus to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Continuation action menu.
    Menu,
    /// Changed and conflicted files.
    Files,
}

/// A process that takes over the terminal while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubProcess {
    /// Executable to run.
    pub program: String,
    /// Arguments passed to the executable.
    pub args: Vec<String>,
    /// Directory the process runs in.
    pub cwd: PathBuf,
}

impl SubProcess {
    /// Full argv, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Build a [`Command`] that inherits the terminal.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.cwd);
        command
    }
}
