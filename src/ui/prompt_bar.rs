//! Bottom bar: mode selector, question input, status line

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, PromptState};
use crate::theme::Theme;
use crate::tutor::Mode;

/// Draw the prompt bar (mode row, input box, status line)
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    draw_modes(frame, chunks[0], state.mode, theme);
    draw_input(frame, chunks[1], &state.prompt, state.view.is_quiz(), theme);
    draw_status(frame, chunks[2], state, theme);
}

/// One pill per mode, the active one lit
fn draw_modes(frame: &mut Frame, area: Rect, active: Mode, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for mode in Mode::all() {
        let style = if *mode == active {
            Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[Tab] switch", Style::default().fg(theme.fg_muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The question input with a visible cursor
fn draw_input(frame: &mut Frame, area: Rect, prompt: &PromptState, quiz_active: bool, theme: &Theme) {
    let border = if quiz_active { theme.border } else { theme.border_focused };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Enter instruction ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if quiz_active {
        // Input is parked while a quiz runs
        Line::from(Span::styled(prompt.input.clone(), Style::default().fg(theme.fg_muted)))
    } else {
        build_line_with_cursor(&prompt.input, prompt.cursor, theme)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// Status or error message under the input
fn draw_status(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (text, style) = match &state.status {
        Some(msg) if state.status_is_error => (msg.clone(), Style::default().fg(theme.error)),
        Some(msg) => (msg.clone(), Style::default().fg(theme.fg_muted)),
        None => (
            String::from(" [Enter] Ask  [^N] New session  [^H] History  [^C] Quit"),
            Style::default().fg(theme.fg_muted),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}

/// Build a line with a visible cursor
fn build_line_with_cursor(text: &str, cursor_pos: usize, theme: &Theme) -> Line<'static> {
    let base_style = Style::default().fg(theme.fg_primary);
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cursor_at_start() {
        let theme = Theme::default();
        let line = build_line_with_cursor("ask", 0, &theme);
        assert_eq!(line.spans.len(), 2); // cursor + rest
    }

    #[test]
    fn build_cursor_at_end() {
        let theme = Theme::default();
        let line = build_line_with_cursor("ask", 3, &theme);
        assert_eq!(line.spans.len(), 2); // before + cursor (space)
    }

    #[test]
    fn build_cursor_in_middle() {
        let theme = Theme::default();
        let line = build_line_with_cursor("ask", 1, &theme);
        assert_eq!(line.spans.len(), 3); // before + cursor + after
    }
}
