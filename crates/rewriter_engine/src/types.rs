pub type ItemId = u64;

/// Where an item currently is inside the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Normalizing,
    Downloading,
    Extracting,
    Rewriting,
    Reconciling,
    SearchingImages,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProgress {
    pub item_id: ItemId,
    pub stage: Stage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(ItemProgress),
}

impl EngineEvent {
    pub(crate) fn stage(item_id: ItemId, stage: Stage) -> Self {
        Self::Progress(ItemProgress { item_id, stage })
    }
}

/// Raw page as served, before charset detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: Vec<u8>,
    /// Address after redirects; relative image sources resolve against it.
    pub final_url: String,
    pub content_type: Option<String>,
}

/// Download failures. The messages follow the "크롤링 실패" prefix in the
/// per-item report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("잘못된 주소입니다 ({0})")]
    InvalidUrl(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("응답 시간이 초과되었습니다")]
    Timeout,
    #[error("리다이렉트가 너무 많습니다")]
    TooManyRedirects,
    #[error("페이지가 너무 큽니다 ({received}/{limit} bytes)")]
    TooLarge { limit: u64, received: u64 },
    #[error("HTML 문서가 아닙니다 ({0})")]
    NotHtml(String),
    #[error("네트워크 오류: {0}")]
    Network(String),
}
