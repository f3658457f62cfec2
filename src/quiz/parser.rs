//! Parser for the semi-structured quiz format returned by the backend
//!
//! The backend is prompted to emit question blocks shaped like:
//!
//! ```text
//! Q: What is 2+2?
//! A) 3
//! B) 4
//! Correct: B
//! |||Explanation: basic arithmetic
//! ```
//!
//! The producer is a language model, not a serializer, so everything here is
//! best-effort: malformed blocks degrade to partial records or are dropped,
//! and `parse` never fails. The correct letter is taken on faith from the
//! `Correct:` marker and is never checked against the option lines; a
//! mismatched letter makes every selection incorrect.

use once_cell::sync::Lazy;
use regex::Regex;

/// Question blocks start at this delimiter
const BLOCK_DELIMITER: &str = "Q:";

/// Blocks at or under this trimmed length are delimiter artifacts, not questions
const MIN_BLOCK_CHARS: usize = 10;

/// Shown when a block carries no explanation marker at all
const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// Option lines look like "A) ..." or "A. ..." through "D"
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-D][).]").unwrap());

/// A single parsed multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Question text (first non-empty line of the block)
    pub prompt: String,
    /// Full option lines, in block order, duplicates preserved
    pub options: Vec<String>,
    /// Correct letter from the `Correct:` marker; `None` makes the question unscoreable
    pub correct: Option<char>,
    /// Explanation shown after answering
    pub explanation: String,
}

/// Parse raw answer text into quiz questions.
///
/// Returns an empty vec when no usable blocks are found; the caller falls
/// back to plain-answer display in that case.
pub fn parse(raw: &str) -> Vec<QuizQuestion> {
    raw.split(BLOCK_DELIMITER)
        .skip(1) // anything before the first "Q:" is preamble
        .filter(|block| block.trim().chars().count() > MIN_BLOCK_CHARS)
        .map(parse_block)
        .collect()
}

/// Build one question record from the text between two delimiters
fn parse_block(block: &str) -> QuizQuestion {
    let lines: Vec<&str> =
        block.lines().map(str::trim).filter(|line| !line.is_empty()).collect();

    let prompt = lines.first().copied().unwrap_or_default().to_string();

    let options =
        lines.iter().filter(|line| OPTION_LINE.is_match(line)).map(|s| s.to_string()).collect();

    let correct = block
        .split_once("Correct:")
        .and_then(|(_, rest)| rest.trim().chars().next())
        .map(|c| c.to_ascii_uppercase());

    QuizQuestion { prompt, options, correct, explanation: parse_explanation(block) }
}

/// Extract the explanation, preferring the `|||` marker over a bare `Explanation:`
fn parse_explanation(block: &str) -> String {
    if let Some((_, after)) = block.split_once("|||") {
        let text = after.trim();
        return text.strip_prefix("Explanation:").unwrap_or(text).trim().to_string();
    }
    if let Some((_, after)) = block.split_once("Explanation:") {
        return after.trim().to_string();
    }
    DEFAULT_EXPLANATION.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_block_with_preamble() {
        let raw = "random preamble Q: What is 2+2?\nA) 3\nB) 4\nCorrect: B\n|||Explanation: basic arithmetic";
        let questions = parse(raw);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "What is 2+2?");
        assert_eq!(questions[0].options, vec!["A) 3", "B) 4"]);
        assert_eq!(questions[0].correct, Some('B'));
        assert_eq!(questions[0].explanation, "basic arithmetic");
    }

    #[test]
    fn short_blocks_are_dropped() {
        assert!(parse("Q: hi\nQ:  \nQ:").is_empty());
    }

    #[test]
    fn text_without_delimiter_yields_nothing() {
        assert!(parse("The mitochondria is the powerhouse of the cell.").is_empty());
    }

    #[test]
    fn multiple_blocks_preserve_order() {
        let raw = "Q: First question here?\nA) one\nCorrect: A\nQ: Second question here?\nB) two\nCorrect: B";
        let questions = parse(raw);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "First question here?");
        assert_eq!(questions[1].prompt, "Second question here?");
    }

    #[test]
    fn triple_pipe_wins_over_bare_explanation_marker() {
        let raw = "Q: Pick the best option now\nA) x\nExplanation: wrong one\n|||the right one";
        let questions = parse(raw);

        assert_eq!(questions[0].explanation, "the right one");
    }

    #[test]
    fn bare_explanation_marker_is_used_when_no_pipes() {
        let raw = "Q: Pick the best option now\nA) x\nExplanation: because reasons";
        assert_eq!(parse(raw)[0].explanation, "because reasons");
    }

    #[test]
    fn missing_explanation_gets_default() {
        let raw = "Q: Pick the best option now\nA) x\nCorrect: A";
        assert_eq!(parse(raw)[0].explanation, DEFAULT_EXPLANATION);
    }

    #[test]
    fn missing_correct_marker_is_none() {
        let raw = "Q: Pick the best option now\nA) x\nB) y";
        assert_eq!(parse(raw)[0].correct, None);
    }

    #[test]
    fn correct_letter_is_uppercased() {
        let raw = "Q: Pick the best option now\nA) x\nCorrect: b";
        assert_eq!(parse(raw)[0].correct, Some('B'));
    }

    #[test]
    fn correct_marker_with_no_letter_is_none() {
        let raw = "Q: Pick the best option now\nA) x\nCorrect:   ";
        assert_eq!(parse(raw)[0].correct, None);
    }

    #[test]
    fn options_accept_paren_and_dot_labels() {
        let raw = "Q: Pick the best option now\nA) paren style\nB. dot style\nE) not a label\nAB) not a label";
        assert_eq!(parse(raw)[0].options, vec!["A) paren style", "B. dot style"]);
    }

    #[test]
    fn duplicate_option_labels_are_preserved() {
        let raw = "Q: Pick the best option now\nA) first\nA) second";
        assert_eq!(parse(raw)[0].options.len(), 2);
    }

    #[test]
    fn block_with_no_options_is_still_emitted() {
        let raw = "Q: An essay question, no options at all";
        let questions = parse(raw);

        assert_eq!(questions.len(), 1);
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn mismatched_correct_letter_is_kept_as_is() {
        // The letter is never validated against the options present.
        let raw = "Q: Pick the best option now\nA) x\nB) y\nCorrect: D";
        assert_eq!(parse(raw)[0].correct, Some('D'));
    }

    proptest! {
        #[test]
        fn parse_never_panics(raw in ".*") {
            let _ = parse(&raw);
        }

        #[test]
        fn parse_is_deterministic(raw in ".*") {
            prop_assert_eq!(parse(&raw), parse(&raw));
        }
    }
}
