//! Splitting of the configured git program.

use anyhow::{Context, Result, bail};

/// Split the configured git program into the argv prefix used for every run.
///
/// Quoting follows Unix shell rules, but the result is never handed to a
/// shell. `verb` and `flag` are appended after these words.
pub fn split_git_program(program: &str) -> Result<Vec<String>> {
    let words = shell_words::split(program.trim())
        .with_context(|| format!("Unbalanced quotes in git program '{program}'"))?;

    match words.first() {
        None => bail!("No git executable configured (git.program is '{program}')"),
        Some(executable) if executable.starts_with('-') => {
            bail!("git.program must start with an executable, got option '{executable}'")
        }
        Some(_) => Ok(words),
    }
}
