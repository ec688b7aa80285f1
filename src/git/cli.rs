//! Git backend that shells out to the git CLI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::merge::{CommandOutcome, GitBackend, SubProcess, WorkingTreeState};

/// Runs git in a repository's working directory.
#[derive(Debug, Clone)]
pub struct Cli {
    /// Working directory of the repository
    root: PathBuf,
    /// Executable and leading arguments used to run git
    program: Vec<String>,
}

impl Cli {
    /// Create a backend for the repository containing `path`
    ///
    /// `program` is the argv prefix used to run git, usually `["git"]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not inside a git repository with a
    /// working directory
    pub fn open(path: &Path, program: Vec<String>) -> Result<Self> {
        let root = super::repository_root(path)?;
        Ok(Self { root, program })
    }

    /// Working directory the backend runs git in
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn command(&self) -> Option<Command> {
        let (program, leading) = self.program.split_first()?;
        let mut command = Command::new(program);
        command.args(leading).current_dir(&self.root);
        Some(command)
    }
}

impl GitBackend for Cli {
    fn working_tree_state(&self) -> Result<WorkingTreeState> {
        super::working_tree_state(&self.root)
    }

    fn invoke(&self, verb: &str, flag: &str) -> Result<CommandOutcome> {
        let mut command = self
            .command()
            .context("No git program configured")?;

        // Output is captured, so there is no terminal for an editor.
        let output = command
            .args([verb, flag])
            .env("GIT_EDITOR", "true")
            .output()
            .with_context(|| format!("Failed to run git {verb} {flag}"))?;

        if output.status.success() {
            debug!(verb, flag, "git succeeded");
            return Ok(CommandOutcome::Success);
        }

        // git may report on either stream
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = format!("{stderr}{stdout}").trim().to_string();
        debug!(verb, flag, status = ?output.status, %message, "git failed");

        Ok(CommandOutcome::Failure(message))
    }

    fn prepare_subprocess(&self, verb: &str, flag: &str) -> Option<SubProcess> {
        let (program, leading) = self.program.split_first()?;
        let mut args = leading.to_vec();
        args.push(verb.to_string());
        args.push(flag.to_string());
        Some(SubProcess {
            program: program.clone(),
            args,
            cwd: self.root.clone(),
        })
    }
}
