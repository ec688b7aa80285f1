//! Dispatch of continuation actions.

use tracing::{debug, info, info_span, warn};

use super::classify::{RecoveryDecision, classify};
use super::conflict::{ConflictFlow, ConflictPromptState};
use super::host::{GitBackend, Gui, RefreshMode};
use super::{ContinuationAction, Error, Result, WorkingTreeState};

/// Drives an in-progress merge or rebase on behalf of the user.
pub struct MergeRebase<'a, G: ?Sized, U: ?Sized> {
    git: &'a G,
    gui: &'a mut U,
    manual_commit: bool,
}

impl<G: ?Sized, U: ?Sized> std::fmt::Debug for MergeRebase<'_, G, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeRebase")
            .field("manual_commit", &self.manual_commit)
            .finish_non_exhaustive()
    }
}

impl<'a, G: GitBackend + ?Sized, U: Gui + ?Sized> MergeRebase<'a, G, U> {
    /// Create a controller.
    ///
    /// With `manual_commit` set, continuing a merge hands the terminal to git
    /// so the commit message can be edited.
    pub fn new(git: &'a G, gui: &'a mut U, manual_commit: bool) -> Self {
        Self {
            git,
            gui,
            manual_commit,
        }
    }

    /// Carry out `action` on the merge or rebase in progress.
    ///
    /// Failures git is known to recover from are retried with another action;
    /// conflicts hand over to the conflict prompt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotMergingOrRebasing`] when nothing is in progress,
    /// [`Error::Command`] with git's message for unrecognized failures, and
    /// [`Error::Collaborator`] when the repository or the UI fail.
    pub fn perform_action(&mut self, action: ContinuationAction) -> Result<()> {
        let state = self.git.working_tree_state()?;
        if !state.is_in_progress() {
            warn!(%action, "Continuation requested with nothing in progress");
            return Err(Error::NotMergingOrRebasing);
        }

        let span = info_span!("merge_rebase", %action, %state);
        let _enter = span.enter();

        let verb = state.verb();
        let flag = action.flag();

        if state == WorkingTreeState::Merging
            && action != ContinuationAction::Abort
            && self.manual_commit
        {
            let Some(sub) = self.git.prepare_subprocess(&verb, &flag) else {
                debug!("No subprocess to run");
                return Ok(());
            };
            info!(argv = ?sub.argv(), "Handing the terminal to git");
            return self.gui.run_subprocess(sub).map_err(Error::from);
        }

        debug!(%verb, %flag, "Invoking git");
        let outcome = self.git.invoke(&verb, &flag)?;
        self.gui.refresh(RefreshMode::Async)?;

        self.handle_outcome(classify(&outcome))
    }

    fn handle_outcome(&mut self, decision: RecoveryDecision) -> Result<()> {
        debug!(?decision, "Classified git outcome");
        match decision {
            RecoveryDecision::TreatAsSuccess => Ok(()),
            RecoveryDecision::RetryAs(next) => {
                info!(%next, "Retrying with another action");
                self.perform_action(next)
            }
            RecoveryDecision::AlreadyDone => {
                info!("Nothing in progress any more, assuming it already finished");
                Ok(())
            }
            RecoveryDecision::NeedsManualResolution => match ConflictFlow.run(&mut *self.gui)? {
                ConflictPromptState::ResumeEditing => Ok(()),
                ConflictPromptState::AbortOperation => {
                    self.perform_action(ContinuationAction::Abort)
                }
            },
            RecoveryDecision::Unrecoverable(message) => {
                warn!(%message, "Git failed");
                Err(Error::Command(message))
            }
        }
    }
}
