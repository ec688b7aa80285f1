//! Recording fakes of the collaborator traits.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::{Result, bail};

use super::host::{GitBackend, Gui, Panel, PromptAnswer, RefreshMode, SubProcess};
use super::{CommandOutcome, WorkingTreeState};
use crate::text::TextKey;

/// Git backend with scripted states and outcomes.
///
/// States and outcomes are consumed in order; the last state sticks and an
/// exhausted outcome queue yields success.
#[derive(Debug)]
pub struct FakeGit {
    states: RefCell<VecDeque<WorkingTreeState>>,
    outcomes: RefCell<VecDeque<CommandOutcome>>,
    invocations: RefCell<Vec<(String, String)>>,
    prepared: RefCell<Vec<(String, String)>>,
    subprocess: bool,
}

impl FakeGit {
    pub fn new(state: WorkingTreeState) -> Self {
        Self {
            states: RefCell::new(VecDeque::from([state])),
            outcomes: RefCell::new(VecDeque::new()),
            invocations: RefCell::new(Vec::new()),
            prepared: RefCell::new(Vec::new()),
            subprocess: true,
        }
    }

    pub fn with_outcome(self, outcome: CommandOutcome) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    pub fn then_state(self, state: WorkingTreeState) -> Self {
        self.states.borrow_mut().push_back(state);
        self
    }

    pub fn without_subprocess(mut self) -> Self {
        self.subprocess = false;
        self
    }

    pub fn invocations(&self) -> Vec<(String, String)> {
        self.invocations.borrow().clone()
    }

    pub fn prepared(&self) -> Vec<(String, String)> {
        self.prepared.borrow().clone()
    }
}

impl GitBackend for FakeGit {
    fn working_tree_state(&self) -> Result<WorkingTreeState> {
        let mut states = self.states.borrow_mut();
        let state = if states.len() > 1 {
            states.pop_front()
        } else {
            states.front().copied()
        };
        Ok(state.unwrap_or_default())
    }

    fn invoke(&self, verb: &str, flag: &str) -> Result<CommandOutcome> {
        self.invocations
            .borrow_mut()
            .push((verb.to_string(), flag.to_string()));
        Ok(self
            .outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(CommandOutcome::Success))
    }

    fn prepare_subprocess(&self, verb: &str, flag: &str) -> Option<SubProcess> {
        self.prepared
            .borrow_mut()
            .push((verb.to_string(), flag.to_string()));
        self.subprocess.then(|| SubProcess {
            program: "git".to_string(),
            args: vec![verb.to_string(), flag.to_string()],
            cwd: PathBuf::from("/repo"),
        })
    }
}

/// A call made on [`RecordingGui`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiCall {
    Refresh(RefreshMode),
    Ask(TextKey, TextKey),
    PushContext(Panel),
    ReturnFromContext,
    RunSubprocess(SubProcess),
}

/// GUI that records every call and answers prompts from a script.
#[derive(Debug, Default)]
pub struct RecordingGui {
    pub calls: Vec<GuiCall>,
    pub answers: VecDeque<PromptAnswer>,
    pub fail_refresh: bool,
    pub fail_return_from_context: bool,
}

impl RecordingGui {
    pub fn answering(answers: impl IntoIterator<Item = PromptAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Gui for RecordingGui {
    fn refresh(&mut self, mode: RefreshMode) -> Result<()> {
        if self.fail_refresh {
            bail!("refresh failed");
        }
        self.calls.push(GuiCall::Refresh(mode));
        Ok(())
    }

    fn ask(&mut self, title: TextKey, prompt: TextKey) -> Result<PromptAnswer> {
        self.calls.push(GuiCall::Ask(title, prompt));
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer"),
        }
    }

    fn push_context(&mut self, panel: Panel) -> Result<()> {
        self.calls.push(GuiCall::PushContext(panel));
        Ok(())
    }

    fn return_from_context(&mut self) -> Result<()> {
        if self.fail_return_from_context {
            bail!("no context to return from");
        }
        self.calls.push(GuiCall::ReturnFromContext);
        Ok(())
    }

    fn run_subprocess(&mut self, sub: SubProcess) -> Result<()> {
        self.calls.push(GuiCall::RunSubprocess(sub));
        Ok(())
    }
}
