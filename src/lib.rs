//! tutorme - a neon terminal tutor
//!
//! Ask a question in any subject and watch the answer type itself out, or
//! switch to quiz mode and work through generated multiple-choice questions
//! one at a time, powered by a local tutoring backend.

pub mod app;
pub mod config;
pub mod history;
pub mod quiz;
pub mod reveal;
pub mod theme;
pub mod tutor;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
