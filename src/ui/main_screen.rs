//! Main screen: header, optional history sidebar, content area, prompt bar

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{answer_panel, history_panel, prompt_bar, quiz_panel};
use crate::app::state::{AppState, ContentView};
use crate::history::History;
use crate::theme::Theme;

/// Width of the history sidebar in columns
const HISTORY_WIDTH: u16 = 32;

/// Draw the main screen
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme, history: &History) {
    let area = frame.area();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5), Constraint::Length(5)])
        .split(area);

    draw_header(frame, vertical_chunks[0], state, theme);

    let chunks = create_layout(vertical_chunks[1], state);
    let mut panel_index = 0;

    if state.show_history {
        history_panel::draw(frame, chunks[panel_index], state, history, theme);
        panel_index += 1;
    }

    match &state.view {
        ContentView::Quiz { session } => {
            quiz_panel::draw(frame, chunks[panel_index], session, &state.feedback_reveal, theme);
        }
        _ => {
            answer_panel::draw(frame, chunks[panel_index], state, theme);
        }
    }

    prompt_bar::draw(frame, vertical_chunks[2], state, theme);
}

/// Create the layout constraints based on visible panels
fn create_layout(area: Rect, state: &AppState) -> Vec<Rect> {
    let mut constraints = Vec::new();

    if state.show_history {
        constraints.push(Constraint::Length(HISTORY_WIDTH));
    }
    constraints.push(Constraint::Min(30));

    Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area).to_vec()
}

/// Draw the one-line header with location, subject and grade
fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " TUTORME ",
            Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(&state.location, Style::default().fg(theme.success)),
        Span::styled("  |  ", Style::default().fg(theme.fg_muted)),
        Span::styled(state.subject.label(), Style::default().fg(theme.fg_secondary)),
        Span::styled(" [^S]", Style::default().fg(theme.fg_muted)),
        Span::styled("  |  ", Style::default().fg(theme.fg_muted)),
        Span::styled(state.grade.short_label(), Style::default().fg(theme.accent_primary)),
        Span::styled(" [^G]", Style::default().fg(theme.fg_muted)),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_with_history_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let state = AppState::default();

        let chunks = create_layout(area, &state);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].width, HISTORY_WIDTH);
    }

    #[test]
    fn layout_without_history_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let state = AppState { show_history: false, ..Default::default() };

        let chunks = create_layout(area, &state);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].width, 120);
    }
}
