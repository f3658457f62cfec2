//! Quiz progression state machine
//!
//! One session per parsed quiz. A question is answered at most once: letter
//! selection is only accepted while the current question is unanswered, and
//! feedback stays frozen until the user advances. A finished session is
//! terminal; a fresh parse replaces it rather than resetting in place.

use super::parser::QuizQuestion;

/// Result of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFeedback {
    /// Whether the selected letter matched the question's correct letter
    pub is_correct: bool,
    /// Explanation text to reveal below the verdict
    pub explanation: String,
}

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    /// Question at `index` displayed, not yet answered
    Presenting { index: usize },
    /// Question at `index` answered, feedback shown
    Feedback { index: usize, result: QuizFeedback },
    /// All questions exhausted
    Completed,
}

/// A quiz being walked through one question at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a session on the first question. `None` when there is nothing
    /// to quiz on, which tells the caller to fall back to plain display.
    pub fn new(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self { questions, phase: QuizPhase::Presenting { index: 0 } })
    }

    /// Answer the current question with `letter`.
    ///
    /// Only accepted while presenting; selecting again once feedback exists
    /// is a no-op. A question without a correct letter is never correct.
    pub fn select_letter(&mut self, letter: char) -> Option<QuizFeedback> {
        let QuizPhase::Presenting { index } = self.phase else {
            return None;
        };

        let question = &self.questions[index];
        let result = QuizFeedback {
            is_correct: question.correct == Some(letter.to_ascii_uppercase()),
            explanation: question.explanation.clone(),
        };

        self.phase = QuizPhase::Feedback { index, result: result.clone() };
        Some(result)
    }

    /// Move past the current feedback to the next question, or complete the
    /// session when the last question has been answered. Returns false when
    /// no feedback is showing (nothing to advance from).
    pub fn advance(&mut self) -> bool {
        let QuizPhase::Feedback { index, .. } = self.phase else {
            return false;
        };

        self.phase = if index + 1 < self.questions.len() {
            QuizPhase::Presenting { index: index + 1 }
        } else {
            QuizPhase::Completed
        };
        true
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    /// The question currently on screen (none once completed)
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Presenting { index } | QuizPhase::Feedback { index, .. } => {
                self.questions.get(index)
            }
            QuizPhase::Completed => None,
        }
    }

    /// 0-based index of the current question (none once completed)
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Presenting { index } | QuizPhase::Feedback { index, .. } => Some(index),
            QuizPhase::Completed => None,
        }
    }

    /// Feedback for the current question, if it has been answered
    pub fn feedback(&self) -> Option<&QuizFeedback> {
        match &self.phase {
            QuizPhase::Feedback { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether the current question is the last one
    pub fn on_last_question(&self) -> bool {
        self.current_index().is_some_and(|i| i + 1 == self.questions.len())
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed)
    }
}
