use std::path::{Path, PathBuf};

use engine_logging::{engine_error, engine_info, engine_warn};
use rewriter_core::{record_submission, HistoryEntry};
use rewriter_engine::{read_optional, write_atomic};
use serde::{Deserialize, Serialize};

const HISTORY_FILENAME: &str = ".rewriter_history.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedEntry {
    urls: Vec<String>,
    timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedHistory {
    submissions: Vec<PersistedEntry>,
}

/// Submission history backed by a RON file. Load and save failures are
/// logged, never fatal.
pub(crate) struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub(crate) fn open(state_dir: &Path) -> Self {
        let path = state_dir.join(HISTORY_FILENAME);
        let entries = load_history(&path);
        Self { path, entries }
    }

    pub(crate) fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub(crate) fn record(&mut self, urls: Vec<String>, timestamp: String) {
        record_submission(&mut self.entries, urls, timestamp);
        save_history(&self.path, &self.entries);
    }
}

fn load_history(path: &Path) -> Vec<HistoryEntry> {
    let content = match read_optional(path) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            engine_warn!("Failed to read history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let history: PersistedHistory = match ron::from_str(&content) {
        Ok(history) => history,
        Err(err) => {
            engine_warn!("Failed to parse history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let entries: Vec<HistoryEntry> = history
        .submissions
        .into_iter()
        .map(|entry| HistoryEntry {
            urls: entry.urls,
            timestamp: entry.timestamp,
        })
        .collect();
    engine_info!("Loaded {} history entries from {:?}", entries.len(), path);
    entries
}

fn save_history(path: &Path, entries: &[HistoryEntry]) {
    let history = PersistedHistory {
        submissions: entries
            .iter()
            .map(|entry| PersistedEntry {
                urls: entry.urls.clone(),
                timestamp: entry.timestamp.clone(),
            })
            .collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&history, pretty) {
        Ok(text) => text,
        Err(err) => {
            engine_error!("Failed to serialize history: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomic(path, &content) {
        engine_error!("Failed to write history to {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rewriter_core::HISTORY_LIMIT;

    #[test]
    fn history_survives_reopen_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path());
        assert!(store.entries().is_empty());

        store.record(vec!["https://a".into()], "2026-01-01T00:00:00+09:00".into());
        store.record(
            vec!["https://b".into(), "https://c".into()],
            "2026-01-02T00:00:00+09:00".into(),
        );

        let reopened = HistoryStore::open(dir.path());
        let urls: Vec<_> = reopened.entries().iter().map(|e| e.urls.clone()).collect();
        assert_eq!(
            urls,
            vec![
                vec!["https://b".to_string(), "https://c".to_string()],
                vec!["https://a".to_string()]
            ]
        );
    }

    #[test]
    fn history_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path());
        for n in 0..HISTORY_LIMIT + 5 {
            store.record(vec![format!("https://x/{n}")], format!("t{n}"));
        }
        let reopened = HistoryStore::open(dir.path());
        assert_eq!(reopened.entries().len(), HISTORY_LIMIT);
        assert_eq!(reopened.entries()[0].timestamp, format!("t{}", HISTORY_LIMIT + 4));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HISTORY_FILENAME), "not ron").unwrap();
        assert!(HistoryStore::open(dir.path()).entries().is_empty());
    }
}
