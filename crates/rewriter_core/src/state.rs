use std::collections::BTreeMap;

use crate::report::RewriteReport;
use crate::view_model::{AppViewModel, ItemRowView};

pub type ItemId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Queued,
    Fetching,
    Extracting,
    Rewriting,
    Reconciling,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Rewritten(Box<RewriteReport>),
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
struct ItemRecord {
    url: String,
    stage: Stage,
    outcome: Option<ItemOutcome>,
}

/// Batch state: submitted input, one record per URL, and whether the view
/// needs re-rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    session: SessionState,
    items: BTreeMap<ItemId, ItemRecord>,
    next_item_id: ItemId,
    rejected_empty: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn view(&self) -> AppViewModel {
        let items: Vec<ItemRowView> = self
            .items
            .iter()
            .map(|(&item_id, record)| ItemRowView {
                item_id,
                url: record.url.clone(),
                stage: record.stage,
                outcome: record.outcome.clone(),
            })
            .collect();
        let completed_count = items.iter().filter(|row| row.outcome.is_some()).count();
        let failed_count = items
            .iter()
            .filter(|row| matches!(row.outcome, Some(ItemOutcome::Failed { .. })))
            .count();
        AppViewModel {
            session: self.session,
            input: self.input.clone(),
            item_count: items.len(),
            completed_count,
            failed_count,
            items,
            rejected_empty: self.rejected_empty,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn reject_empty(&mut self) {
        self.rejected_empty = true;
        self.dirty = true;
    }

    pub(crate) fn start_session(&mut self) {
        self.session = SessionState::Running;
        self.rejected_empty = false;
        self.dirty = true;
    }

    /// Queues one item per URL and clears the input box.
    pub(crate) fn enqueue_items(&mut self, urls: Vec<String>) -> Vec<(ItemId, String)> {
        self.input.clear();
        let mut enqueued = Vec::with_capacity(urls.len());
        for url in urls {
            self.next_item_id += 1;
            let item_id = self.next_item_id;
            self.items.insert(
                item_id,
                ItemRecord {
                    url: url.clone(),
                    stage: Stage::Queued,
                    outcome: None,
                },
            );
            enqueued.push((item_id, url));
        }
        self.dirty = true;
        enqueued
    }

    pub(crate) fn apply_progress(&mut self, item_id: ItemId, stage: Stage) {
        if let Some(record) = self.items.get_mut(&item_id) {
            if record.outcome.is_none() && record.stage != stage {
                record.stage = stage;
                self.dirty = true;
            }
        }
    }

    /// Stores an item's outcome. Returns `true` when this completed the batch.
    pub(crate) fn apply_done(&mut self, item_id: ItemId, outcome: ItemOutcome) -> bool {
        let Some(record) = self.items.get_mut(&item_id) else {
            return false;
        };
        if record.outcome.is_some() {
            return false;
        }
        record.stage = Stage::Done;
        record.outcome = Some(outcome);
        self.dirty = true;

        let all_done = self.items.values().all(|r| r.outcome.is_some());
        if all_done && self.session == SessionState::Running {
            self.session = SessionState::Finished;
            return true;
        }
        false
    }
}
