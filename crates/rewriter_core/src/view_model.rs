use crate::{ItemId, ItemOutcome, SessionState, Stage};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub input: String,
    pub item_count: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub items: Vec<ItemRowView>,
    /// The last submission contained no URLs.
    pub rejected_empty: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowView {
    pub item_id: ItemId,
    pub url: String,
    pub stage: Stage,
    pub outcome: Option<ItemOutcome>,
}

impl AppViewModel {
    /// Progress line such as `2/5 처리 중...`.
    pub fn progress_label(&self) -> String {
        match self.session {
            SessionState::Idle => "시작하는 중...".to_string(),
            SessionState::Finished => "완료!".to_string(),
            SessionState::Running => {
                let current = (self.completed_count + 1).min(self.item_count);
                format!("{current}/{} 처리 중...", self.item_count)
            }
        }
    }
}
