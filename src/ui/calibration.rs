//! First-run calibration screen

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::app::state::CalibrationState;
use crate::theme::Theme;
use crate::tutor::Grade;

/// Draw the grade-selection modal over a blank background
pub fn draw(frame: &mut Frame, state: &CalibrationState, theme: &Theme) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let overlay = centered_rect(60, 60, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" System Calibration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select your academic level to tune response depth.",
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
    ];

    for (i, grade) in Grade::all().iter().enumerate() {
        let selected = i == state.selected;
        let marker = if selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○

        let style = if selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {} {}. {}", marker, i + 1, grade.label()), style),
            Span::styled(
                format!("  \u{2022} {}", grade.blurb()),
                Style::default().fg(theme.fg_muted),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[j/k] Select    [1-4] Pick    [Enter] Confirm",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(para, inner);
}
