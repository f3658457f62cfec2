//! History sidebar listing saved sessions, newest first

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::history::History;
use crate::theme::Theme;

/// Draw the history sidebar
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, history: &History, theme: &Theme) {
    let block = Block::default()
        .title(" Sessions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if history.is_empty() {
        let msg = Paragraph::new("No saved sessions yet")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(msg, inner);
        return;
    }

    let mut lines = Vec::new();
    for (i, entry) in history.entries().iter().enumerate() {
        let selected = state.history_selected == Some(i);

        let title_style = if selected {
            Style::default().fg(theme.fg_primary).bg(theme.selection).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        lines.push(Line::from(Span::styled(entry.title.clone(), title_style)));

        lines.push(Line::from(Span::styled(
            format!("  {} \u{2022} {}", entry.mode.label().to_uppercase(), clock(entry.timestamp)),
            Style::default().fg(theme.fg_muted),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[\u{2191}\u{2193}] Select  [^L] Open  [^D] Delete",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);
}

/// UTC wall-clock time of a unix timestamp
fn clock(timestamp: i64) -> String {
    let secs = timestamp.rem_euclid(86_400);
    format!("{:02}:{:02}", secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_hours_and_minutes() {
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(3_661), "01:01");
        // Wraps to time of day regardless of the date
        assert_eq!(clock(86_400 + 600), "00:10");
    }
}
