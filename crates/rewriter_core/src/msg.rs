#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input (one URL per line).
    InputChanged(String),
    /// User submitted the current input for rewriting.
    UrlsSubmitted,
    /// Pipeline moved an item to a new stage.
    ItemProgress {
        item_id: crate::ItemId,
        stage: crate::Stage,
    },
    /// Pipeline finished an item, successfully or not.
    ItemDone {
        item_id: crate::ItemId,
        outcome: crate::ItemOutcome,
    },
}
