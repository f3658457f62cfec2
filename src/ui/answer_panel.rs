//! Content panel for plain answers

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{AppState, ContentView};
use crate::theme::Theme;

/// Draw the answer area (empty, loading, or a revealing answer)
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.view {
        ContentView::Empty => draw_idle(frame, inner, theme),
        ContentView::Loading => draw_loading(frame, inner, theme),
        _ => draw_answer(frame, inner, state, theme),
    }
}

/// Placeholder before anything has been asked
fn draw_idle(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Awaiting input...",
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Type a question below and press Enter.",
            Style::default().fg(theme.fg_muted),
        )),
    ];

    let para = Paragraph::new(text).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(para, area);
}

/// Waiting on the backend
fn draw_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Thinking...", Style::default().fg(theme.accent_primary))),
    ];

    let para = Paragraph::new(text).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(para, area);
}

/// The answer revealed so far
fn draw_answer(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            "OUTPUT DECODED",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in state.answer_reveal.revealed().lines() {
        lines.push(Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(theme.fg_secondary),
        )));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}
