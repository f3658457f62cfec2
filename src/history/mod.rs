//! Session history persistence
//!
//! One entry per completed query, newest first. Entries are keyed by a
//! monotonically increasing id that survives restarts; they are appended and
//! deleted, never mutated.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::tutor::Mode;

/// Titles are the question truncated to this many characters
const TITLE_CHARS: usize = 30;

/// A completed query saved to the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    /// Stable unique key, monotonically increasing
    pub id: u64,
    /// Truncated question used as the list label
    pub title: String,
    /// Interaction mode the query was made in
    pub mode: Mode,
    /// The question as typed
    pub question: String,
    /// The full answer text
    pub answer: String,
    /// Unix timestamp (seconds) of completion
    pub timestamp: i64,
}

/// All saved sessions, most recent first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    /// Next id to hand out
    next_id: u64,
    /// Entries ordered newest first
    entries: Vec<SessionEntry>,
}

impl History {
    /// Load history from the data directory, empty if not present
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::history_path()?)
    }

    /// Load history from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read history from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse history.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save history to the data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::history_path()?)
    }

    /// Save history to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize history")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write history to {:?}", path))?;

        Ok(())
    }

    /// Get path to history.json
    fn history_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("history.json"))
    }

    /// Record a completed query at the front of the list, returning its id
    pub fn append(&mut self, mode: Mode, question: &str, answer: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.insert(
            0,
            SessionEntry {
                id,
                title: make_title(question),
                mode,
                question: question.to_string(),
                answer: answer.to_string(),
                timestamp: unix_now(),
            },
        );
        id
    }

    /// Delete the entry with the given id; false if it was not present
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Question truncated to a short label, char-boundary safe
fn make_title(question: &str) -> String {
    let mut title: String = question.chars().take(TITLE_CHARS).collect();
    if question.chars().count() > TITLE_CHARS {
        title.push_str("...");
    }
    title
}

fn unix_now() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_puts_newest_first() {
        let mut history = History::default();
        history.append(Mode::General, "first question", "a1");
        history.append(Mode::Quiz, "second question", "a2");

        let titles: Vec<_> = history.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["second question", "first question"]);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut history = History::default();
        let a = history.append(Mode::General, "q", "a");
        let b = history.append(Mode::General, "q", "a");
        history.remove(b);
        let c = history.append(Mode::General, "q", "a");

        assert!(a < b && b < c, "ids must never be reused");
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let mut history = History::default();
        let id = history.append(Mode::Study, "keep me around", "a");
        let doomed = history.append(Mode::Study, "delete me", "a");

        assert!(history.remove(doomed));
        assert!(!history.remove(doomed));
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].id, id);
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let mut history = History::default();
        history.append(Mode::General, &"x".repeat(50), "a");

        let title = &history.entries()[0].title;
        assert_eq!(title.chars().count(), TITLE_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn short_titles_are_kept_whole() {
        let mut history = History::default();
        history.append(Mode::General, "short", "a");
        assert_eq!(history.entries()[0].title, "short");
    }

    #[test]
    fn file_round_trip_preserves_order_and_counter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = History::default();
        history.append(Mode::General, "older entry", "a");
        history.append(Mode::Quiz, "newer entry", "b");
        history.save_to(&path).unwrap();

        let mut loaded = History::load_from(&path).unwrap();
        assert_eq!(loaded.entries(), history.entries());

        // The id counter persists, so new entries never collide
        let next = loaded.append(Mode::General, "after reload", "c");
        assert_eq!(next, 2);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::load_from(&dir.path().join("nope.json")).unwrap();
        assert!(history.is_empty());
    }
}
