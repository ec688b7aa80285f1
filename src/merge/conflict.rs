//! Prompt shown when git stops on conflicts.

use anyhow::Result;
use tracing::{debug, info};

use super::host::{Gui, Panel, PromptAnswer};
use crate::text::TextKey;

/// Where the conflict prompt left the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPromptState {
    /// Focus moved to the files panel; the operation stays paused.
    ResumeEditing,
    /// The pushed context was unwound; the operation must be aborted.
    AbortOperation,
}

/// Single round-trip through the conflict prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictFlow;

impl ConflictFlow {
    /// Ask the user whether to resolve the conflicts or abort.
    ///
    /// On confirm the files panel is focused. On close the previously pushed
    /// context is unwound first; the caller is expected to dispatch the abort
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or if the panel stack cannot be
    /// changed. An unwind failure means no abort must follow.
    pub fn run<U: Gui + ?Sized>(self, gui: &mut U) -> Result<ConflictPromptState> {
        let answer = gui.ask(TextKey::FoundConflictsTitle, TextKey::FoundConflicts)?;
        debug!(?answer, "Conflict prompt answered");

        match answer {
            PromptAnswer::Confirm => {
                gui.push_context(Panel::Files)?;
                info!("Waiting for the user to resolve conflicts");
                Ok(ConflictPromptState::ResumeEditing)
            }
            PromptAnswer::Close => {
                gui.return_from_context()?;
                Ok(ConflictPromptState::AbortOperation)
            }
        }
    }
}
