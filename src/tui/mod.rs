//! Terminal User Interface for mergepilot

mod event;
mod render;
mod view;

use anyhow::{Context, Result, bail};
use mergepilot::config::Config;
use mergepilot::git::Cli;
use mergepilot::merge::{
    ContinuationAction, Gui, MergeRebase, Panel, PromptAnswer, RefreshMode, SubProcess,
};
use mergepilot::text::TextKey;
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, warn};

use event::{Event, Handler};
use view::View;

/// Run the TUI application
///
/// With `initial` set, that action is dispatched as soon as the UI is up.
pub fn run(config: &Config, git: &Cli, initial: Option<ContinuationAction>) -> Result<()> {
    let mut tui = Tui::enter(View::new(git.root().to_path_buf()), config.poll_interval_ms)?;

    let result = tui.run_loop(git, config.git.merging.manual_commit, initial);

    tui.leave()?;
    result
}

/// Owns the terminal while the UI is up and serves as the [`Gui`] of the
/// continuation core.
struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    view: View,
    events: Handler,
}

impl std::fmt::Debug for Tui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tui")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl Tui {
    fn enter(view: View, poll_interval_ms: u64) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            view,
            events: Handler::new(poll_interval_ms),
        })
    }

    fn leave(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let view = &self.view;
        self.terminal.draw(|frame| render::render(frame, view))?;
        Ok(())
    }

    fn run_loop(
        &mut self,
        git: &Cli,
        manual_commit: bool,
        initial: Option<ContinuationAction>,
    ) -> Result<()> {
        self.view.reload()?;
        if self.view.state.is_in_progress() {
            self.view.push(Panel::Menu);
        }

        if let Some(action) = initial {
            self.dispatch(git, manual_commit, action);
        }

        loop {
            if self.view.stale {
                self.view.reload()?;
            }
            self.draw()?;

            match self.events.next()? {
                Event::Key(key) => {
                    if let Some(action) = self.view.on_key(key) {
                        self.dispatch(git, manual_commit, action);
                    }
                }
                Event::Tick | Event::Resize => {}
            }

            if self.view.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, git: &Cli, manual_commit: bool, action: ContinuationAction) {
        info!(%action, "Dispatching continuation action");
        let result = MergeRebase::new(git, self, manual_commit).perform_action(action);
        if let Err(err) = result {
            warn!(%action, error = %err, "Continuation action failed");
            self.view.show_error(&err);
        }
    }
}

impl Gui for Tui {
    fn refresh(&mut self, mode: RefreshMode) -> Result<()> {
        match mode {
            RefreshMode::Async => self.view.stale = true,
            RefreshMode::Sync => self.view.reload()?,
        }
        Ok(())
    }

    fn ask(&mut self, title: TextKey, prompt: TextKey) -> Result<PromptAnswer> {
        self.view.prompt = Some((title, prompt));

        let answer = loop {
            if self.view.stale {
                self.view.reload()?;
            }
            self.draw()?;

            let Event::Key(key) = self.events.next()? else {
                continue;
            };
            if let Some(answer) = self.view.on_prompt_key(key)? {
                break answer;
            }
        };

        Ok(answer)
    }

    fn push_context(&mut self, panel: Panel) -> Result<()> {
        self.view.push(panel);
        Ok(())
    }

    fn return_from_context(&mut self) -> Result<()> {
        self.view.pop();
        Ok(())
    }

    fn run_subprocess(&mut self, sub: SubProcess) -> Result<()> {
        let argv = sub.argv().join(" ");
        info!(%argv, "Suspending UI for subprocess");

        self.leave()?;
        let status = sub.to_command().status();
        self.resume()?;
        self.refresh(RefreshMode::Sync)?;

        let status = status.with_context(|| format!("Failed to run {argv}"))?;
        if !status.success() {
            bail!("{argv} exited with {status}");
        }
        Ok(())
    }
}
