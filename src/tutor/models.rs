//! Request/response types and selectable options for the tutoring backend

use serde::{Deserialize, Serialize};

/// Subject the backend routes to a specialist agent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    #[default]
    General,
    Math,
    Science,
    English,
}

impl Subject {
    /// Uppercase label shown in the header
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Math => "MATH",
            Self::Science => "SCIENCE",
            Self::English => "ENGLISH",
        }
    }

    pub fn all() -> &'static [Subject] {
        &[Self::General, Self::Math, Self::Science, Self::English]
    }

    /// The subject after this one, wrapping around
    pub fn next(&self) -> Subject {
        match self {
            Self::General => Self::Math,
            Self::Math => Self::Science,
            Self::Science => Self::English,
            Self::English => Self::General,
        }
    }
}

/// Academic level the backend calibrates its persona to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Elementary,
    Middle,
    #[default]
    High,
    Uni,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Elementary => "Elementary (K-5)",
            Self::Middle => "Middle School (6-8)",
            Self::High => "High School (9-12)",
            Self::Uni => "University",
        }
    }

    /// Short name without the bracketed range
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::Middle => "Middle School",
            Self::High => "High School",
            Self::Uni => "University",
        }
    }

    /// One-line pitch shown on the calibration screen
    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Elementary => "Simple & Fun",
            Self::Middle => "Clear & Concise",
            Self::High => "Academic Prep",
            Self::Uni => "Expert Depth",
        }
    }

    pub fn all() -> &'static [Grade] {
        &[Self::Elementary, Self::Middle, Self::High, Self::Uni]
    }

    pub fn next(&self) -> Grade {
        match self {
            Self::Elementary => Self::Middle,
            Self::Middle => Self::High,
            Self::High => Self::Uni,
            Self::Uni => Self::Elementary,
        }
    }
}

/// Interaction style; its prefix is prepended to the outbound question so
/// the backend knows what shape of answer to produce
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    General,
    Synopsis,
    Study,
    Quiz,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Synopsis => "Synopsis",
            Self::Study => "Study",
            Self::Quiz => "Quiz",
        }
    }

    /// Prefix prepended to the raw question text
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::General => "",
            Self::Synopsis => "Summarize: ",
            Self::Study => "Detailed study guide for: ",
            Self::Quiz => "Quiz me on: ",
        }
    }

    pub fn all() -> &'static [Mode] {
        &[Self::General, Self::Synopsis, Self::Study, Self::Quiz]
    }

    pub fn next(&self) -> Mode {
        match self {
            Self::General => Self::Synopsis,
            Self::Synopsis => Self::Study,
            Self::Study => Self::Quiz,
            Self::Quiz => Self::General,
        }
    }
}

/// Request body for the backend's `/ask` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    /// Question text, already mode-prefixed
    pub question: String,
    pub subject: Subject,
    pub grade: Grade,
    pub location: String,
}

impl AskRequest {
    /// Build a request, applying the mode's question prefix
    pub fn new(mode: Mode, question: &str, subject: Subject, grade: Grade, location: &str) -> Self {
        Self {
            question: format!("{}{}", mode.prefix(), question),
            subject,
            grade,
            location: location.to_string(),
        }
    }
}

/// Response body from `/ask`; only `answer` is consumed here
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub model_used: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mode_prefixes_match_the_backend_contract() {
        assert_eq!(Mode::General.prefix(), "");
        assert_eq!(Mode::Synopsis.prefix(), "Summarize: ");
        assert_eq!(Mode::Study.prefix(), "Detailed study guide for: ");
        assert_eq!(Mode::Quiz.prefix(), "Quiz me on: ");
    }

    #[test]
    fn ask_request_applies_mode_prefix() {
        let request =
            AskRequest::new(Mode::Quiz, "photosynthesis", Subject::Science, Grade::High, "Earth");
        assert_eq!(request.question, "Quiz me on: photosynthesis");
    }

    #[test]
    fn request_serializes_with_lowercase_enums() {
        let request =
            AskRequest::new(Mode::General, "hi there", Subject::Math, Grade::Uni, "Ireland");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["subject"], "math");
        assert_eq!(json["grade"], "uni");
        assert_eq!(json["location"], "Ireland");
    }

    #[test]
    fn response_tolerates_missing_optional_fields() {
        let response: AskResponse = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        assert_eq!(response.answer, "42");
        assert_eq!(response.subject, None);
    }

    #[test]
    fn cycling_wraps_around() {
        let mut mode = Mode::General;
        for _ in 0..Mode::all().len() {
            mode = mode.next();
        }
        assert_eq!(mode, Mode::General);

        let mut grade = Grade::High;
        for _ in 0..Grade::all().len() {
            grade = grade.next();
        }
        assert_eq!(grade, Grade::High);
    }

    #[test]
    fn grade_round_trips_through_config_json() {
        let json = serde_json::to_string(&Grade::Elementary).unwrap();
        assert_eq!(json, r#""elementary""#);
        let back: Grade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Grade::Elementary);
    }
}
