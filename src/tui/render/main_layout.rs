//! Main layout rendering: files panel and status bar

use mergepilot::merge::{Panel, WorkingTreeState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::colors;
use crate::tui::view::View;

/// Render the changed files of the working tree
pub fn render_files(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let items: Vec<ListItem<'_>> = if view.files.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No changed files",
            Style::default().fg(colors::TEXT_MUTED),
        )))]
    } else {
        view.files
            .iter()
            .map(|file| {
                let marker_color = if file.conflicted {
                    colors::FILE_CONFLICTED
                } else if file.staged {
                    colors::FILE_STAGED
                } else {
                    colors::TEXT_DIM
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", file.marker()),
                        Style::default().fg(marker_color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(file.path.as_str(), Style::default().fg(colors::TEXT_PRIMARY)),
                ]))
            })
            .collect()
    };

    let conflicted = view.files.iter().filter(|file| file.conflicted).count();
    let title = if conflicted > 0 {
        format!(" Files ({conflicted} conflicted) ")
    } else {
        " Files ".to_string()
    };

    let border_color = if view.focused() == Panel::Files {
        colors::MODAL_BORDER
    } else {
        colors::BORDER
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(list, area);
}

/// Render the one-line status bar with the working tree state and key hints
pub fn render_status_bar(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let state_color = if view.state == WorkingTreeState::None {
        colors::STATE_IDLE
    } else {
        colors::STATE_IN_PROGRESS
    };

    let hints = match view.focused() {
        Panel::Files => "m options | esc back | q quit",
        Panel::Menu => "↑↓ select | enter run | esc close",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", view.state),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("| {hints} "), Style::default().fg(colors::TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
