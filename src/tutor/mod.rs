//! Tutoring backend integration
//!
//! Request construction, HTTP transport, and the selectable
//! subject/grade/mode options for the local answering service.

pub mod client;
pub mod error;
pub mod locate;
pub mod models;

// Re-export commonly used types
pub use client::TutorClient;
pub use error::TutorError;
pub use models::{AskRequest, AskResponse, Grade, Mode, Subject};
