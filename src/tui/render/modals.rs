//! Modal rendering: action menu, conflict prompt, error

use mergepilot::text::{self, TextKey};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::colors;
use crate::tui::view::View;

/// Create a centered rect with percentage width and absolute height
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the continuation action menu
pub fn render_menu_overlay(frame: &mut Frame<'_>, view: &View) {
    let lines: Vec<Line<'_>> = view
        .menu
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == view.selected {
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };
            Line::from(Span::styled(format!(" {} ", item.label()), style))
        })
        .collect();

    // Height: content lines + 2 for borders
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(40, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", text::english(view.menu.title)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render a yes/no prompt with enter/esc hints
pub fn render_confirm_overlay(frame: &mut Frame<'_>, title: TextKey, prompt: TextKey) {
    let lines = vec![
        Line::from(Span::styled(
            text::english(prompt),
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Enter]",
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" confirm  ", Style::default().fg(colors::TEXT_PRIMARY)),
            Span::styled(
                "[Esc]",
                Style::default()
                    .fg(colors::ACCENT_NEGATIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" close", Style::default().fg(colors::TEXT_PRIMARY)),
        ]),
    ];

    // The prompt line may wrap inside the 60% wide modal.
    let area = centered_rect_absolute(60, 7, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", text::english(title)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_WARNING)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render an error modal with word-wrapped message
pub fn render_error_modal(frame: &mut Frame<'_>, message: &str) {
    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            "✖ Error",
            Style::default()
                .fg(colors::MODAL_BORDER_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Git messages are multi-line; keep their line breaks.
    lines.extend(message.lines().map(|line| {
        Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(colors::TEXT_PRIMARY),
        ))
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    // Height: content lines + 2 for borders, min 7 lines
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX).max(7);
    let area = centered_rect_absolute(70, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_ERROR)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
