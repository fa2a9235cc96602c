/// Maximum number of submissions kept in the history log.
pub const HISTORY_LIMIT: usize = 30;

/// One submitted batch of URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub urls: Vec<String>,
    pub timestamp: String,
}

/// Records a submission at the front of `history`, dropping the oldest
/// entries beyond [`HISTORY_LIMIT`]. Empty submissions are not recorded.
pub fn record_submission(history: &mut Vec<HistoryEntry>, urls: Vec<String>, timestamp: String) {
    if urls.is_empty() {
        return;
    }
    history.insert(0, HistoryEntry { urls, timestamp });
    history.truncate(HISTORY_LIMIT);
}
