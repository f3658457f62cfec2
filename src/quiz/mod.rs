//! Quiz parsing and progression
//!
//! `parser` recovers structured questions from the backend's semi-structured
//! quiz text; `session` walks the result one question at a time.

pub mod parser;
pub mod session;

pub use parser::{QuizQuestion, parse};
pub use session::{QuizFeedback, QuizPhase, QuizSession};
