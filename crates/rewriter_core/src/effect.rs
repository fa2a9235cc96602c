#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submission had no URLs; nothing was queued.
    RejectEmptyBatch,
    /// Append the submitted URLs to the history log.
    RecordHistory { urls: Vec<String> },
    /// Run the pipeline for one URL.
    ProcessUrl { item_id: crate::ItemId, url: String },
    /// Every item of the running batch has an outcome.
    BatchFinished,
}
