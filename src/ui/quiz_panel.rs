//! Quiz panel: one question at a time with locked-in feedback

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::quiz::QuizSession;
use crate::reveal::RevealSlot;
use crate::theme::Theme;

/// Draw the active quiz
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    session: &QuizSession,
    feedback_reveal: &RevealSlot,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Quiz ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The view is replaced on completion; nothing to draw without a question
    let (Some(question), Some(index)) = (session.current_question(), session.current_index())
    else {
        return;
    };

    let mut lines = vec![];

    // Question number
    lines.push(Line::from(Span::styled(
        format!("Question {} of {}", index + 1, session.total()),
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // Question text
    lines.push(Line::from(Span::styled(
        question.prompt.clone(),
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // Options (full lines straight from the parser, letter label included)
    let feedback = session.feedback();
    for option in &question.options {
        let letter = option.chars().next().map(|c| c.to_ascii_uppercase());
        let style = match feedback {
            // Once answered, only the correct option stays lit
            Some(_) if letter == question.correct => {
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
            }
            Some(_) => Style::default().fg(theme.fg_muted),
            None => Style::default().fg(theme.fg_secondary),
        };
        lines.push(Line::from(Span::styled(format!("  {}", option), style)));
        lines.push(Line::from(""));
    }

    if question.options.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no options provided)",
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    // Feedback with the explanation revealing underneath
    if let Some(feedback) = feedback {
        let (marker, verdict, color) = if feedback.is_correct {
            ("\u{2713}", "Correct!", theme.success) // ✓
        } else {
            ("\u{2717}", "Incorrect", theme.error) // ✗
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, verdict),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for text_line in feedback_reveal.revealed().lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    // Hint
    let hint = match feedback {
        Some(_) if session.on_last_question() => "[Enter] Finish Quiz    [Esc] Leave",
        Some(_) => "[Enter] Next Question    [Esc] Leave",
        None if question.options.is_empty() => "[Esc] Leave",
        None => "[A-D] Answer    [Esc] Leave",
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.fg_muted))));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
