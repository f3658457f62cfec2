//! Application state definitions

use crate::quiz::QuizSession;
use crate::reveal::{RevealSlot, RevealTarget};
use crate::tutor::{Grade, Mode, Subject, locate};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// First-run grade selection
    Calibration,
    #[default]
    Main,
}

/// Selection state for the calibration screen
#[derive(Debug, Clone, Default)]
pub struct CalibrationState {
    /// Index into [`Grade::all`]
    pub selected: usize,
}

impl CalibrationState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < Grade::all().len() {
            self.selected += 1;
        }
    }

    /// The grade currently highlighted
    pub fn grade(&self) -> Grade {
        Grade::all()[self.selected.min(Grade::all().len() - 1)]
    }
}

/// What the content area is showing
#[derive(Debug, Default)]
pub enum ContentView {
    /// Nothing asked yet (or session cleared)
    #[default]
    Empty,
    /// Waiting on the backend
    Loading,
    /// A plain answer being revealed
    Answer {
        /// Full answer text (the reveal slot holds the visible prefix)
        text: String,
    },
    /// A quiz in progress
    Quiz { session: QuizSession },
}

impl ContentView {
    pub fn is_quiz(&self) -> bool {
        matches!(self, ContentView::Quiz { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentView::Loading)
    }
}

/// State for the question input line
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    /// Input buffer
    pub input: String,
    /// Cursor position in input (character index)
    pub cursor: usize,
}

impl PromptState {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replace the buffer and park the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// The question as typed, without surrounding whitespace
    pub fn trimmed(&self) -> &str {
        self.input.trim()
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Calibration screen selection
    pub calibration: CalibrationState,

    /// Question input line
    pub prompt: PromptState,

    /// What the content area shows
    pub view: ContentView,

    /// Reveal slot for the main answer
    pub answer_reveal: RevealSlot,

    /// Reveal slot for the quiz explanation
    pub feedback_reveal: RevealSlot,

    /// Selected subject
    pub subject: Subject,

    /// Calibrated grade level
    pub grade: Grade,

    /// Active interaction mode
    pub mode: Mode,

    /// Detected country, or a placeholder while looking it up
    pub location: String,

    /// Whether the history sidebar is visible
    pub show_history: bool,

    /// Selected entry in the history sidebar
    pub history_selected: Option<usize>,

    /// Status/error message shown under the prompt
    pub status: Option<String>,

    /// Whether the status message is an error
    pub status_is_error: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            calibration: CalibrationState::default(),
            prompt: PromptState::default(),
            view: ContentView::default(),
            answer_reveal: RevealSlot::new(RevealTarget::Answer),
            feedback_reveal: RevealSlot::new(RevealTarget::Feedback),
            subject: Subject::default(),
            grade: Grade::default(),
            mode: Mode::default(),
            location: locate::LOCATING.to_string(),
            show_history: true,
            history_selected: None,
            status: None,
            status_is_error: false,
        }
    }
}

impl AppState {
    /// Set a status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.status_is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.status_is_error = true;
    }

    /// Clear the message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Move the history selection, clamped to `len` entries
    pub fn history_move(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.history_selected = None;
            return;
        }
        let next = match self.history_selected {
            // First press lands on the newest entry
            None => 0,
            Some(current) => (current as isize + delta).clamp(0, len as isize - 1) as usize,
        };
        self.history_selected = Some(next);
    }

    /// Keep the selection in range after a deletion
    pub fn history_clamp(&mut self, len: usize) {
        self.history_selected = match (self.history_selected, len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prompt_insert_and_delete_track_cursor() {
        let mut prompt = PromptState::default();
        for c in "abc".chars() {
            prompt.insert_char(c);
        }
        assert_eq!(prompt.input, "abc");
        assert_eq!(prompt.cursor, 3);

        prompt.move_left();
        prompt.delete_char();
        assert_eq!(prompt.input, "ac");
        assert_eq!(prompt.cursor, 1);
    }

    #[test]
    fn prompt_handles_multibyte_input() {
        let mut prompt = PromptState::default();
        prompt.insert_char('é');
        prompt.insert_char('x');
        prompt.move_start();
        prompt.delete_char_forward();

        assert_eq!(prompt.input, "x");
        assert_eq!(prompt.cursor, 0);
    }

    #[test]
    fn prompt_set_text_parks_cursor_at_end() {
        let mut prompt = PromptState::default();
        prompt.set_text("hello");
        assert_eq!(prompt.cursor, 5);
    }

    #[test]
    fn calibration_selection_stays_in_range() {
        let mut calibration = CalibrationState::default();
        calibration.move_up();
        assert_eq!(calibration.selected, 0);

        for _ in 0..10 {
            calibration.move_down();
        }
        assert_eq!(calibration.selected, crate::tutor::Grade::all().len() - 1);
    }

    #[test]
    fn history_move_clamps_to_bounds() {
        let mut state = AppState::default();
        state.history_move(1, 3);
        assert_eq!(state.history_selected, Some(0));

        state.history_move(10, 3);
        assert_eq!(state.history_selected, Some(2));

        state.history_move(-10, 3);
        assert_eq!(state.history_selected, Some(0));

        state.history_move(1, 0);
        assert_eq!(state.history_selected, None);
    }

    #[test]
    fn history_clamp_after_deletion() {
        let mut state = AppState::default();
        state.history_selected = Some(2);
        state.history_clamp(2);
        assert_eq!(state.history_selected, Some(1));

        state.history_clamp(0);
        assert_eq!(state.history_selected, None);
    }
}
