//! Rewriter core: pure text processing and the batch state machine.
//!
//! Nothing in this crate performs IO. The engine feeds it extracted text and
//! completion output; the app drives [`update`] and renders [`AppViewModel`].
mod blog_url;
mod effect;
mod history;
mod msg;
mod pattern;
mod placeholder;
mod prompt;
mod reconcile;
mod report;
mod scrub;
mod sections;
mod similarity;
mod state;
mod update;
mod view_model;

pub use blog_url::{is_platform_url, normalize_blog_url, UrlError, EXPECTED_URL_EXAMPLE};
pub use effect::Effect;
pub use history::{record_submission, HistoryEntry, HISTORY_LIMIT};
pub use msg::Msg;
pub use pattern::ImagePattern;
pub use placeholder::{
    count_placeholders, find_placeholders, image_placeholder, PlaceholderSpan, IMAGE_MARKER,
    IMAGE_PLACEHOLDER, LINK_MARKER,
};
pub use prompt::{build_system_prompt, build_user_message, SYSTEM_PROMPT};
pub use reconcile::{reconcile_placeholders, Reconciliation, ACCEPT_DIVISOR};
pub use report::{image_links, number_placeholders, ImageLink, RewriteReport, RewriteStats};
pub use scrub::scrub_attribution;
pub use sections::{
    format_sections, parse_rewrite, RewriteResult, BODY_MARKER, HASHTAG_MARKER, TITLE_MARKER,
};
pub use similarity::similarity_ratio;
pub use state::{AppState, ItemId, ItemOutcome, SessionState, Stage};
pub use update::update;
pub use view_model::{AppViewModel, ItemRowView};
