//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `main_layout`: Files panel and status bar
//! - `modals`: Action menu, conflict prompt and error overlays

pub mod colors;
pub mod main_layout;
pub mod modals;

use mergepilot::merge::Panel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::view::View;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    main_layout::render_files(frame, view, chunks[0]);
    main_layout::render_status_bar(frame, view, chunks[1]);

    if view.focused() == Panel::Menu {
        modals::render_menu_overlay(frame, view);
    }
    if let Some((title, prompt)) = view.prompt {
        modals::render_confirm_overlay(frame, title, prompt);
    }
    if let Some(message) = &view.error {
        modals::render_error_modal(frame, message);
    }
}
