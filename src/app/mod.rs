//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::history::History;
use crate::quiz::{self, QuizSession};
use crate::reveal::{self, RevealEvent};
use crate::tutor::{AskRequest, AskResponse, Grade, Mode, TutorClient, TutorError, locate};
use crate::ui;
use input::Action;
use state::{AppState, ContentView, Screen};

/// Shown (but never persisted) when the backend cannot be reached
const FAILURE_MESSAGE: &str = "LINK FAILURE: Ensure backend is running.";

/// Shown after the last quiz question is answered and advanced past
const COMPLETION_MESSAGE: &str = "Module Complete.";

/// Events delivered to the main loop from background tasks
pub enum AppEvent {
    /// The backend answered (or failed) request `seq`
    Answer { seq: u64, result: Result<AskResponse, TutorError> },
    /// The location lookup finished
    Located(String),
}

/// A request currently in flight. Responses for anything but the latest
/// pending sequence number are stale and get dropped on arrival.
struct PendingAsk {
    seq: u64,
    question: String,
    mode: Mode,
}

/// A response is stale unless it answers the most recent pending request
fn response_is_stale(pending: Option<&PendingAsk>, seq: u64) -> bool {
    pending.is_none_or(|p| p.seq != seq)
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Saved sessions (sidebar)
    history: History,

    /// Tutoring backend client
    client: Arc<TutorClient>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Background task events
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,

    /// Reveal timer events
    reveal_tx: mpsc::UnboundedSender<RevealEvent>,
    reveal_rx: mpsc::UnboundedReceiver<RevealEvent>,

    /// Sequence number of the most recent outbound request
    request_seq: u64,

    /// The request whose answer we are waiting for
    pending: Option<PendingAsk>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal()?;

        let history = History::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load history: {}", e);
            History::default()
        });

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (reveal_tx, reveal_rx) = mpsc::unbounded_channel();

        let mut state = AppState::default();
        state.grade = config.grade.unwrap_or_default();
        state.screen =
            if config.needs_calibration() { Screen::Calibration } else { Screen::Main };

        let client = Arc::new(TutorClient::new(config.backend_url.clone()));

        Ok(Self {
            config,
            state,
            history,
            client,
            terminal,
            events_tx,
            events_rx,
            reveal_tx,
            reveal_rx,
            request_seq: 0,
            pending: None,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        // Resolve the user's country in the background
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::Located(locate::detect_country().await));
        });

        loop {
            self.drain_events();

            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.config, &self.history);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && self.handle_key(key.code, key.modifiers)
                    {
                        break; // Exit requested
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Apply queued background events to the state
    fn drain_events(&mut self) {
        while let Ok(event) = self.reveal_rx.try_recv() {
            // Each event names its slot; the other slot ignores it
            if !self.state.answer_reveal.apply(&event) {
                self.state.feedback_reveal.apply(&event);
            }
        }

        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::Answer { seq, result } => self.on_answer(seq, result),
                AppEvent::Located(country) => self.state.location = country,
            }
        }
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if let Some(action) = input::global_key_to_action(key, modifiers) {
            return self.apply_action(action);
        }

        let action = match self.state.screen {
            Screen::Calibration => input::calibration_key_to_action(key),
            Screen::Main => match &self.state.view {
                ContentView::Quiz { session } => {
                    input::quiz_key_to_action(key, session.feedback().is_some())
                }
                _ => input::prompt_key_to_action(key, modifiers),
            },
        };

        match action {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Execute one mapped action, returns true if should exit
    fn apply_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::NewSession => self.new_session(),
            Action::Submit => self.submit(),

            Action::CycleMode => self.state.mode = self.state.mode.next(),
            Action::CycleSubject => self.state.subject = self.state.subject.next(),
            Action::CycleGrade => self.cycle_grade(),

            Action::ToggleHistory => self.state.show_history = !self.state.show_history,
            Action::HistoryUp => self.state.history_move(-1, self.history.len()),
            Action::HistoryDown => self.state.history_move(1, self.history.len()),
            Action::HistoryOpen => self.open_history_entry(),
            Action::HistoryDelete => self.delete_history_entry(),

            Action::InsertChar(c) => self.state.prompt.insert_char(c),
            Action::Backspace => self.state.prompt.delete_char(),
            Action::DeleteForward => self.state.prompt.delete_char_forward(),
            Action::CursorLeft => self.state.prompt.move_left(),
            Action::CursorRight => self.state.prompt.move_right(),
            Action::CursorStart => self.state.prompt.move_start(),
            Action::CursorEnd => self.state.prompt.move_end(),

            Action::SelectOption(letter) => self.select_quiz_option(letter),
            Action::AdvanceQuiz => self.advance_quiz(),
            Action::LeaveQuiz => self.leave_quiz(),

            Action::CalibrationUp => self.state.calibration.move_up(),
            Action::CalibrationDown => self.state.calibration.move_down(),
            Action::CalibrationPick(index) => self.pick_calibration(index),
            Action::CalibrationConfirm => self.finish_calibration(self.state.calibration.grade()),
        }
        false
    }

    /// Send the typed question to the backend.
    ///
    /// Resubmitting while a request is outstanding is allowed; the older
    /// response becomes stale the moment the new sequence number is issued.
    fn submit(&mut self) {
        let question = self.state.prompt.trimmed().to_string();
        if question.is_empty() {
            return;
        }

        self.request_seq += 1;
        let seq = self.request_seq;
        self.pending = Some(PendingAsk { seq, question: question.clone(), mode: self.state.mode });

        self.state.view = ContentView::Loading;
        self.state.answer_reveal.clear();
        self.state.feedback_reveal.clear();
        self.state.clear_status();

        let request = AskRequest::new(
            self.state.mode,
            &question,
            self.state.subject,
            self.state.grade,
            &self.state.location,
        );

        tracing::info!("Asking request {}: {:?}", seq, request.question);

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.ask(request).await;
            let _ = tx.send(AppEvent::Answer { seq, result });
        });
    }

    /// Handle an answer (or failure) arriving from the backend
    fn on_answer(&mut self, seq: u64, result: Result<AskResponse, TutorError>) {
        if response_is_stale(self.pending.as_ref(), seq) {
            tracing::debug!("Discarding stale response for request {}", seq);
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };

        match result {
            Ok(response) => {
                self.history.append(pending.mode, &pending.question, &response.answer);
                if let Err(e) = self.history.save() {
                    tracing::warn!("Failed to save history: {}", e);
                }
                self.state.history_clamp(self.history.len());

                if pending.mode == Mode::Quiz && response.answer.contains("Q:") {
                    if let Some(session) = QuizSession::new(quiz::parse(&response.answer)) {
                        self.state.answer_reveal.clear();
                        self.state.feedback_reveal.clear();
                        self.state.view = ContentView::Quiz { session };
                        return;
                    }
                    // No usable blocks parsed: fall back to plain display
                }

                self.show_answer(response.answer);
            }
            Err(e) => {
                tracing::error!("Request {} failed: {}", seq, e);
                self.state.set_error(e.to_string());
                self.show_answer(FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Put `text` in the content area and start revealing it
    fn show_answer(&mut self, text: String) {
        let interval =
            reveal::scaled_interval(reveal::ANSWER_INTERVAL_MS, self.config.animation_speed);
        self.state.answer_reveal.start(&text, interval, &self.reveal_tx);
        self.state.feedback_reveal.clear();
        self.state.view = ContentView::Answer { text };
    }

    /// Answer the active quiz question
    fn select_quiz_option(&mut self, letter: char) {
        let ContentView::Quiz { session } = &mut self.state.view else {
            return;
        };
        if let Some(feedback) = session.select_letter(letter) {
            let interval = reveal::scaled_interval(
                reveal::FEEDBACK_INTERVAL_MS,
                self.config.animation_speed,
            );
            self.state.feedback_reveal.start(&feedback.explanation, interval, &self.reveal_tx);
        }
    }

    /// Move past the current feedback
    fn advance_quiz(&mut self) {
        let ContentView::Quiz { session } = &mut self.state.view else {
            return;
        };
        if !session.advance() {
            return;
        }
        if session.is_completed() {
            self.show_answer(COMPLETION_MESSAGE.to_string());
        } else {
            self.state.feedback_reveal.clear();
        }
    }

    /// Abandon the quiz without finishing it
    fn leave_quiz(&mut self) {
        if !self.state.view.is_quiz() {
            return;
        }
        self.state.view = ContentView::Empty;
        self.state.answer_reveal.clear();
        self.state.feedback_reveal.clear();
    }

    /// Clear everything back to an empty prompt
    fn new_session(&mut self) {
        self.pending = None;
        self.state.prompt.clear();
        self.state.view = ContentView::Empty;
        self.state.answer_reveal.clear();
        self.state.feedback_reveal.clear();
        self.state.history_selected = None;
        self.state.clear_status();
    }

    /// Reopen a saved session from the sidebar
    fn open_history_entry(&mut self) {
        let Some(index) = self.state.history_selected else {
            return;
        };
        let Some(entry) = self.history.entries().get(index) else {
            return;
        };
        let (question, answer, mode) = (entry.question.clone(), entry.answer.clone(), entry.mode);

        // A still-outstanding answer must not overwrite the reopened session
        self.pending = None;
        self.state.prompt.set_text(&question);
        self.state.mode = mode;
        self.show_answer(answer);
    }

    /// Delete the selected saved session
    fn delete_history_entry(&mut self) {
        let Some(index) = self.state.history_selected else {
            return;
        };
        let Some(entry) = self.history.entries().get(index) else {
            return;
        };
        let id = entry.id;

        if self.history.remove(id) {
            if let Err(e) = self.history.save() {
                tracing::warn!("Failed to save history: {}", e);
            }
            self.state.history_clamp(self.history.len());
        }
    }

    /// Step to the next grade level and persist the preference
    fn cycle_grade(&mut self) {
        self.finish_calibration(self.state.grade.next());
    }

    /// Pick a calibration row directly by number
    fn pick_calibration(&mut self, index: usize) {
        if let Some(&grade) = Grade::all().get(index) {
            self.finish_calibration(grade);
        }
    }

    /// Apply and persist a grade choice, leaving calibration if on it
    fn finish_calibration(&mut self, grade: Grade) {
        self.state.grade = grade;
        self.config.grade = Some(grade);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save grade preference: {}", e);
            self.state.set_error("Could not save grade preference");
        }
        self.state.screen = Screen::Main;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responses_are_stale_without_a_pending_request() {
        assert!(response_is_stale(None, 1));
    }

    #[test]
    fn only_the_latest_sequence_number_is_current() {
        let pending = PendingAsk { seq: 2, question: "q".into(), mode: Mode::General };
        assert!(response_is_stale(Some(&pending), 1));
        assert!(!response_is_stale(Some(&pending), 2));
    }
}
