//! Key-to-action mapping
//!
//! Keys mean different things depending on what the content area is showing,
//! so each context gets its own mapping function. Control-modified keys are
//! app chords and win over plain text input.

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Session
    Quit,
    NewSession,
    Submit,

    // Option cycling
    CycleMode,
    CycleSubject,
    CycleGrade,

    // History sidebar
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    HistoryOpen,
    HistoryDelete,

    // Prompt editing
    InsertChar(char),
    Backspace,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,

    // Quiz
    SelectOption(char),
    AdvanceQuiz,
    LeaveQuiz,

    // Calibration
    CalibrationUp,
    CalibrationDown,
    CalibrationPick(usize),
    CalibrationConfirm,
}

/// App-wide chords, checked before any context mapping
pub fn global_key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if !modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key {
        KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('n') => Some(Action::NewSession),
        KeyCode::Char('h') => Some(Action::ToggleHistory),
        _ => None,
    }
}

/// Keys while typing a question (no quiz active)
pub fn prompt_key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('s') => Some(Action::CycleSubject),
            KeyCode::Char('g') => Some(Action::CycleGrade),
            KeyCode::Char('l') => Some(Action::HistoryOpen),
            KeyCode::Char('d') => Some(Action::HistoryDelete),
            KeyCode::Char('a') => Some(Action::CursorStart),
            KeyCode::Char('e') => Some(Action::CursorEnd),
            _ => None,
        };
    }

    match key {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::CycleMode),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorStart),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Up => Some(Action::HistoryUp),
        KeyCode::Down => Some(Action::HistoryDown),
        KeyCode::Char(c) => Some(Action::InsertChar(c)),
        _ => None,
    }
}

/// Keys while a quiz is on screen. `feedback_shown` flips the meaning of
/// letters off (answer already locked) and Enter to "next question".
pub fn quiz_key_to_action(key: KeyCode, feedback_shown: bool) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::LeaveQuiz),
        KeyCode::Enter | KeyCode::Char('n') if feedback_shown => Some(Action::AdvanceQuiz),
        KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) if !feedback_shown => {
            Some(Action::SelectOption(c.to_ascii_uppercase()))
        }
        _ => None,
    }
}

/// Keys on the first-run calibration screen
pub fn calibration_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::CalibrationDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::CalibrationUp),
        KeyCode::Enter => Some(Action::CalibrationConfirm),
        KeyCode::Char(c @ '1'..='4') => {
            Some(Action::CalibrationPick(c as usize - '1' as usize))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_from_prompt() {
        assert_eq!(
            prompt_key_to_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Submit)
        );
    }

    #[test]
    fn plain_chars_are_typed() {
        assert_eq!(
            prompt_key_to_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::InsertChar('x'))
        );
    }

    #[test]
    fn ctrl_chords_are_not_typed() {
        assert_eq!(
            prompt_key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(Action::CycleSubject)
        );
        assert_eq!(
            global_key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn letters_select_options_while_presenting() {
        assert_eq!(
            quiz_key_to_action(KeyCode::Char('b'), false),
            Some(Action::SelectOption('B'))
        );
        assert_eq!(quiz_key_to_action(KeyCode::Char('e'), false), None);
    }

    #[test]
    fn letters_are_locked_once_feedback_shows() {
        assert_eq!(quiz_key_to_action(KeyCode::Char('b'), true), None);
        assert_eq!(quiz_key_to_action(KeyCode::Enter, true), Some(Action::AdvanceQuiz));
    }

    #[test]
    fn enter_does_nothing_before_answering() {
        assert_eq!(quiz_key_to_action(KeyCode::Enter, false), None);
    }

    #[test]
    fn calibration_digits_pick_directly() {
        assert_eq!(calibration_key_to_action(KeyCode::Char('3')), Some(Action::CalibrationPick(2)));
        assert_eq!(calibration_key_to_action(KeyCode::Char('5')), None);
    }
}
