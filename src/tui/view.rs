//! State shown by the TUI and the keys that change it.

use anyhow::{Result, bail};
use mergepilot::git::{self, FileStatus};
use mergepilot::merge::{
    self, ContinuationAction, Menu, Panel, PromptAnswer, WorkingTreeState, build_menu,
};
use mergepilot::text::{self, TextKey};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Everything the renderer needs, plus the panel stack.
#[derive(Debug)]
pub struct View {
    /// Repository working directory
    pub root: PathBuf,
    /// Last state read from the repository
    pub state: WorkingTreeState,
    /// Actions for `state`
    pub menu: Menu,
    /// Highlighted menu entry
    pub selected: usize,
    /// Changed files, conflicted first
    pub files: Vec<FileStatus>,
    /// Focused panels, innermost last; never empty
    pub contexts: Vec<Panel>,
    /// Open yes/no prompt as (title, body)
    pub prompt: Option<(TextKey, TextKey)>,
    /// Error modal message
    pub error: Option<String>,
    /// Reload before the next draw
    pub stale: bool,
    /// Leave the event loop
    pub should_quit: bool,
}

impl View {
    /// View for `root` with nothing loaded yet
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            state: WorkingTreeState::None,
            menu: build_menu(WorkingTreeState::None),
            selected: 0,
            files: Vec::new(),
            contexts: vec![Panel::Files],
            prompt: None,
            error: None,
            stale: true,
            should_quit: false,
        }
    }

    /// Re-read state and files from the repository
    pub fn reload(&mut self) -> Result<()> {
        self.apply_state(git::working_tree_state(&self.root)?);
        self.files = git::list_files(&self.root)?;
        self.stale = false;
        Ok(())
    }

    /// Rebuild the menu for `state`, keeping the selection in range
    pub fn apply_state(&mut self, state: WorkingTreeState) {
        self.state = state;
        self.menu = build_menu(state);
        self.selected = self.selected.min(self.menu.items.len().saturating_sub(1));
    }

    /// Panel that currently has focus
    pub fn focused(&self) -> Panel {
        self.contexts.last().copied().unwrap_or(Panel::Files)
    }

    /// Focus `panel` unless it already has focus
    pub fn push(&mut self, panel: Panel) {
        if self.focused() != panel {
            self.contexts.push(panel);
        }
        if panel == Panel::Files {
            self.stale = true;
        }
    }

    /// Return to the previous panel; the outermost panel stays
    pub fn pop(&mut self) {
        if self.contexts.len() > 1 {
            self.contexts.pop();
        }
    }

    /// Show `error` in the error modal
    pub fn show_error(&mut self, error: &merge::Error) {
        let message = match error {
            merge::Error::NotMergingOrRebasing => {
                text::english(TextKey::NotMergingOrRebasing).to_string()
            }
            other => format!("{other:#}"),
        };
        self.error = Some(message);
    }

    /// Answer the open prompt from a key press
    ///
    /// Returns `Ok(None)` for keys that do not answer it. Ctrl+c closes the
    /// prompt without an answer and quits, so nothing in progress is aborted.
    pub fn on_prompt_key(&mut self, key: KeyEvent) -> Result<Option<PromptAnswer>> {
        let answer = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.prompt = None;
                self.should_quit = true;
                bail!("Interrupted");
            }
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => PromptAnswer::Confirm,
            KeyCode::Esc | KeyCode::Char('n' | 'N') => PromptAnswer::Close,
            _ => return Ok(None),
        };
        self.prompt = None;
        Ok(Some(answer))
    }

    /// Apply a key press; returns the action to dispatch, if any
    pub fn on_key(&mut self, key: KeyEvent) -> Option<ContinuationAction> {
        if self.error.take().is_some() {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match (self.focused(), key.code) {
            (_, KeyCode::Char('q')) => self.should_quit = true,
            (Panel::Files, KeyCode::Char('m')) => self.push(Panel::Menu),
            (_, KeyCode::Esc) => self.pop(),
            (Panel::Menu, KeyCode::Up | KeyCode::Char('k')) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (Panel::Menu, KeyCode::Down | KeyCode::Char('j')) => {
                if self.selected + 1 < self.menu.items.len() {
                    self.selected += 1;
                }
            }
            (Panel::Menu, KeyCode::Enter) => {
                let action = self.menu.items.get(self.selected).map(|item| item.action);
                // The menu closes before its action runs.
                self.pop();
                return action;
            }
            _ => {}
        }
        None
    }
}
