//! Rewriter engine: page fetching, extraction and the completion round trip.
//!
//! IO lives here; the text rules it applies come from `rewriter_core`.
mod config;
mod decode;
mod engine;
mod error;
mod extract;
mod fetch;
mod generator;
mod image_search;
mod persist;
mod pipeline;
mod types;

pub use config::{
    CompletionSettings, EngineConfig, ImageSearchSettings, DEFAULT_COMPLETION_BASE_URL,
    DEFAULT_IMAGE_SEARCH_ENDPOINT, DEFAULT_MODEL,
};
pub use decode::{decode_html, DecodedHtml};
pub use engine::Engine;
pub use error::{EngineError, PipelineError};
pub use extract::{
    extract_generic_document, extract_platform_document, image_sources, render_blocks,
    ContentBlock, DocumentExtractor, ExtractError, GenericExtractor, PlatformExtractor,
    ScrapedDocument, FALLBACK_TITLE,
};
pub use fetch::{
    ChannelProgressSink, FetchSettings, Fetcher, NullProgressSink, ProgressSink, ReqwestFetcher,
    MOBILE_USER_AGENT,
};
pub use generator::{GenerateError, OpenAiGenerator, TextGenerator};
pub use image_search::{ImageFinder, PexelsImageFinder};
pub use persist::{read_optional, write_atomic, PersistError};
pub use pipeline::RewritePipeline;
pub use types::{EngineEvent, FetchError, FetchedPage, ItemId, ItemProgress, Stage};
